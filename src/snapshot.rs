//! Serializable game state.

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::dice::Die;
use crate::objective::Objective;
use crate::options::GameOptions;

/// Plain game state for persistence.
///
/// [`Game::snapshot`](crate::Game::snapshot) fills every field.
/// [`Game::from_snapshot`](crate::Game::from_snapshot) accepts partial
/// snapshots: `None` scalars and empty lists fall back to fresh-game
/// defaults. Keys are camelCase when serialized.
///
/// # Example
///
/// ```
/// use yahtzee::{Game, GameOptions, GameSnapshot};
///
/// let game = Game::new(GameOptions::default(), 3);
/// let snapshot = game.snapshot();
/// assert_eq!(snapshot.rounds, Some(8));
/// assert_eq!(snapshot.options, Some(GameOptions::default()));
///
/// let partial = GameSnapshot {
///     rounds: Some(2),
///     ..GameSnapshot::default()
/// };
/// let options = GameOptions::default().with_max_rolls(2);
/// let restored = Game::from_snapshot(partial, options, 3).unwrap();
/// assert_eq!(restored.rounds(), 2);
/// assert_eq!(restored.max_rolls(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameSnapshot {
    /// Options the game was started with.
    pub options: Option<GameOptions>,
    /// Rounds left after the current one.
    pub rounds: Option<u8>,
    /// Current round number, starting at 1.
    pub current_round: Option<u8>,
    /// Rolls allowed this round.
    pub max_rolls: Option<u8>,
    /// Rolls used this round.
    pub dice_rolled: Option<u8>,
    /// The dice in play.
    pub dice: Vec<Die>,
    /// Running total.
    pub score: Option<u16>,
    /// The score card.
    pub objectives: Vec<Objective>,
    /// Whether an objective was committed this round.
    pub objective_selected: bool,
}
