//! Dice.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;

/// Number of dice in play.
pub const DICE_COUNT: usize = 5;

/// Number of faces on a die.
pub const FACES: u8 = 6;

/// A single six-sided die.
///
/// Serializes as `{ "value": 1..=6, "locked": bool }`. Deserialization
/// rejects values outside `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDie")]
pub struct Die {
    /// Face currently showing.
    value: u8,
    /// Whether the die is kept out of rolls.
    locked: bool,
}

#[derive(Deserialize)]
struct RawDie {
    value: u8,
    #[serde(default)]
    locked: bool,
}

impl TryFrom<RawDie> for Die {
    type Error = SnapshotError;

    fn try_from(raw: RawDie) -> Result<Self, Self::Error> {
        Self::restore(raw.value, raw.locked)
    }
}

impl Die {
    /// Creates an unlocked die showing a random face.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            value: Self::random_face(rng),
            locked: false,
        }
    }

    /// Recreates a die from a saved value and lock state.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is outside `1..=6`.
    ///
    /// # Example
    ///
    /// ```
    /// use yahtzee::{Die, SnapshotError};
    ///
    /// let die = Die::restore(4, true).unwrap();
    /// assert_eq!(die.value(), 4);
    /// assert!(die.is_locked());
    ///
    /// assert_eq!(Die::restore(7, false), Err(SnapshotError::DieValue(7)));
    /// ```
    pub const fn restore(value: u8, locked: bool) -> Result<Self, SnapshotError> {
        if value == 0 || value > FACES {
            return Err(SnapshotError::DieValue(value));
        }
        Ok(Self { value, locked })
    }

    /// Rolls the die unless it is locked.
    pub fn roll<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.locked {
            return;
        }
        self.value = Self::random_face(rng);
        log::trace!("die rolled {}", self.value);
    }

    /// Locks the die so later rolls keep its face.
    pub const fn lock(&mut self) {
        self.locked = true;
    }

    /// Returns the face currently showing.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Returns whether the die is locked.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    fn random_face<R: Rng + ?Sized>(rng: &mut R) -> u8 {
        rng.random_range(1..=FACES)
    }
}
