//! Error types for game operations.

use thiserror::Error;

use crate::category::Category;

/// Errors that can occur when locking a die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LockError {
    /// The die index is outside the dice set.
    #[error("die index {index} is out of range")]
    InvalidIndex {
        /// The rejected index.
        index: usize,
    },
}

/// Errors that can occur when committing a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// The category already holds a committed score.
    #[error("category `{0}` has already been scored")]
    AlreadyLocked(Category),
    /// An objective was already selected this round.
    #[error("an objective has already been selected this round")]
    AlreadySelected,
}

/// Errors that can occur when restoring a game from a snapshot.
///
/// Every variant describes a structurally invalid snapshot; absent fields are
/// not errors and fall back to fresh-game defaults instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// The snapshot holds the wrong number of dice.
    #[error("expected 5 dice, found {0}")]
    DiceCount(usize),
    /// A die value is outside `1..=6`.
    #[error("die value {0} is outside 1..=6")]
    DieValue(u8),
    /// The snapshot holds the wrong number of objectives.
    #[error("expected 15 objectives, found {0}")]
    ObjectiveCount(usize),
    /// A category appears more than once.
    #[error("category `{0}` appears more than once")]
    DuplicateObjective(Category),
    /// More rolls were used than the round allows.
    #[error("{dice_rolled} rolls used but only {max_rolls} allowed")]
    RollsExceeded {
        /// Rolls used this round.
        dice_rolled: u8,
        /// Rolls allowed this round.
        max_rolls: u8,
    },
    /// The stored score disagrees with the committed objectives.
    #[error("score {score} does not match committed points {committed}")]
    ScoreMismatch {
        /// The stored running total.
        score: u16,
        /// The sum of points over locked objectives.
        committed: u16,
    },
}

/// Error returned when a string names no known category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown category")]
pub struct ParseCategoryError;
