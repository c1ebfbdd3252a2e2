//! Score card objectives.

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// One slot on a player's score card.
///
/// An objective starts unlocked with zero points. Committing a score locks
/// it, after which its points never change.
///
/// Only `name` is required when deserializing; a missing `display` falls back
/// to the category's label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawObjective")]
pub struct Objective {
    /// Category scored in this slot.
    name: Category,
    /// Label shown to players.
    display: String,
    /// Whether a score has been committed.
    locked: bool,
    /// Committed points.
    points: u16,
}

#[derive(Deserialize)]
struct RawObjective {
    name: Category,
    display: Option<String>,
    #[serde(default)]
    locked: bool,
    #[serde(default)]
    points: u16,
}

impl From<RawObjective> for Objective {
    fn from(raw: RawObjective) -> Self {
        let display = raw.display.unwrap_or_else(|| raw.name.label().into());
        Self {
            name: raw.name,
            display,
            locked: raw.locked,
            points: raw.points,
        }
    }
}

impl Objective {
    /// Creates an open objective with the category's default label.
    #[must_use]
    pub fn new(name: Category) -> Self {
        Self::with_display(name, name.label())
    }

    /// Creates an open objective with a custom label.
    #[must_use]
    pub fn with_display(name: Category, display: impl Into<String>) -> Self {
        Self {
            name,
            display: display.into(),
            locked: false,
            points: 0,
        }
    }

    /// Returns the category of this objective.
    #[must_use]
    pub const fn name(&self) -> Category {
        self.name
    }

    /// Returns the label shown to players.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns whether a score has been committed.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Returns the committed points, or `None` while the objective is open.
    #[must_use]
    pub const fn points(&self) -> Option<u16> {
        if self.locked { Some(self.points) } else { None }
    }

    /// Records `points` and locks the objective.
    pub(crate) const fn commit(&mut self, points: u16) {
        self.points = points;
        self.locked = true;
    }

    /// Returns the full open score card in score-card order.
    pub(crate) fn score_card() -> Vec<Self> {
        Category::ALL.into_iter().map(Self::new).collect()
    }
}

impl From<Category> for Objective {
    fn from(name: Category) -> Self {
        Self::new(name)
    }
}

impl core::fmt::Display for Objective {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.points() {
            Some(points) => write!(f, "{}: {points}", self.display),
            None => write!(f, "{}: -", self.display),
        }
    }
}
