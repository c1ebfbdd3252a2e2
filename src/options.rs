//! Game configuration options.

use serde::{Deserialize, Serialize};

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use yahtzee::GameOptions;
///
/// let options = GameOptions::default()
///     .with_rounds(13)
///     .with_max_rolls(2);
/// ```
/// Options are saved with every snapshot, so a restored game keeps the
/// rules it was started with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameOptions {
    /// Rounds in a game, including the opening deal.
    pub rounds: u8,
    /// Rolls allowed per round.
    pub max_rolls: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            rounds: 9,
            max_rolls: 3,
        }
    }
}

impl GameOptions {
    /// Rounds left to deal once the opening round is in play.
    pub(crate) const fn rounds_after_first(self) -> u8 {
        self.rounds.saturating_sub(1)
    }

    /// Sets the number of rounds.
    ///
    /// # Example
    ///
    /// ```
    /// use yahtzee::GameOptions;
    ///
    /// let options = GameOptions::default().with_rounds(13);
    /// assert_eq!(options.rounds, 13);
    /// ```
    #[must_use]
    pub const fn with_rounds(mut self, rounds: u8) -> Self {
        self.rounds = rounds;
        self
    }

    /// Sets the rolls allowed per round.
    ///
    /// # Example
    ///
    /// ```
    /// use yahtzee::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_rolls(2);
    /// assert_eq!(options.max_rolls, 2);
    /// ```
    #[must_use]
    pub const fn with_max_rolls(mut self, max_rolls: u8) -> Self {
        self.max_rolls = max_rolls;
        self
    }
}
