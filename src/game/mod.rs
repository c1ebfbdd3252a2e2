//! Game engine and state management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::category::{CATEGORY_COUNT, Category};
use crate::dice::{DICE_COUNT, Die};
use crate::error::SnapshotError;
use crate::objective::Objective;
use crate::options::GameOptions;
use crate::snapshot::GameSnapshot;

mod listeners;
mod rolling;
mod scoring;
pub mod state;

use listeners::Listeners;
pub use state::{GamePhase, RoundPhase};

/// A Yahtzee game engine for a single player's score card.
///
/// The game owns five dice and one [`Objective`] per [`Category`]. Hosts
/// drive it through [`round`](Self::round), [`throw_dice`](Self::throw_dice),
/// [`lock_dice`](Self::lock_dice) and [`commit`](Self::commit), and observe
/// it through listeners. The running score always equals the sum of the
/// committed points.
#[derive(Debug)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Rounds left to deal.
    rounds: u8,
    /// Current round number, starting at 1.
    current_round: u8,
    /// Rolls allowed this round.
    max_rolls: u8,
    /// Rolls used this round.
    dice_rolled: u8,
    /// Dice in play.
    dice: [Die; DICE_COUNT],
    /// Score card, ordered like [`Category::ALL`].
    objectives: Vec<Objective>,
    /// Running total of committed points.
    score: u16,
    /// Whether an objective was committed this round.
    objective_selected: bool,
    /// Registered listeners.
    listeners: Listeners,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a fresh game with the given seed.
    ///
    /// The first round is dealt immediately and counts against
    /// `options.rounds`, so a game always has at least one round. The score
    /// card is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use yahtzee::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.rounds(), 8);
    /// assert_eq!(game.current_round(), 1);
    /// assert_eq!(game.score(), 0);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let dice = Self::deal(&mut rng);

        Self {
            options,
            rounds: options.rounds_after_first(),
            current_round: 1,
            max_rolls: options.max_rolls,
            dice_rolled: 0,
            dice,
            objectives: Objective::score_card(),
            score: 0,
            objective_selected: false,
            listeners: Listeners::default(),
            rng,
        }
    }

    /// Restores a game from a snapshot.
    ///
    /// Options stored in the snapshot take precedence over `options`, which
    /// only fill in snapshots saved without them. Missing scalars and empty
    /// dice or objective lists fall back to the values of a fresh game built
    /// from the resolved options. A missing score is
    /// recomputed from the committed objectives. Objectives are stored in
    /// score-card order regardless of their order in the snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot does not hold exactly five dice or
    /// fifteen distinct objectives, if more rolls were used than allowed, or
    /// if the stored score disagrees with the committed points.
    pub fn from_snapshot(
        snapshot: GameSnapshot,
        options: GameOptions,
        seed: u64,
    ) -> Result<Self, SnapshotError> {
        let options = snapshot.options.unwrap_or(options);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let dice = if snapshot.dice.is_empty() {
            Self::deal(&mut rng)
        } else {
            let count = snapshot.dice.len();
            <[Die; DICE_COUNT]>::try_from(snapshot.dice)
                .map_err(|_| SnapshotError::DiceCount(count))?
        };

        let objectives = if snapshot.objectives.is_empty() {
            Objective::score_card()
        } else {
            Self::sort_score_card(snapshot.objectives)?
        };

        let max_rolls = snapshot.max_rolls.unwrap_or(options.max_rolls);
        let dice_rolled = snapshot.dice_rolled.unwrap_or(0);
        if dice_rolled > max_rolls {
            return Err(SnapshotError::RollsExceeded {
                dice_rolled,
                max_rolls,
            });
        }

        let committed = committed_points(&objectives);
        let score = snapshot.score.unwrap_or(committed);
        if score != committed {
            return Err(SnapshotError::ScoreMismatch { score, committed });
        }

        Ok(Self {
            options,
            rounds: snapshot.rounds.unwrap_or_else(|| options.rounds_after_first()),
            current_round: snapshot.current_round.unwrap_or(1),
            max_rolls,
            dice_rolled,
            dice,
            objectives,
            score,
            objective_selected: snapshot.objective_selected,
            listeners: Listeners::default(),
            rng,
        })
    }

    /// Captures the full game state.
    ///
    /// Restoring the snapshot with [`Game::from_snapshot`] yields a game with
    /// the same counters, dice and score card. Listeners are not captured.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            options: Some(self.options),
            rounds: Some(self.rounds),
            current_round: Some(self.current_round),
            max_rolls: Some(self.max_rolls),
            dice_rolled: Some(self.dice_rolled),
            dice: self.dice.to_vec(),
            score: Some(self.score),
            objectives: self.objectives.clone(),
            objective_selected: self.objective_selected,
        }
    }

    /// Deals a fresh set of unlocked dice.
    fn deal(rng: &mut ChaCha8Rng) -> [Die; DICE_COUNT] {
        core::array::from_fn(|_| Die::new(&mut *rng))
    }

    /// Checks that every category appears once and orders the card.
    fn sort_score_card(mut objectives: Vec<Objective>) -> Result<Vec<Objective>, SnapshotError> {
        if objectives.len() != CATEGORY_COUNT {
            return Err(SnapshotError::ObjectiveCount(objectives.len()));
        }

        let mut seen = [false; CATEGORY_COUNT];
        for objective in &objectives {
            let slot = &mut seen[objective.name().index()];
            if *slot {
                return Err(SnapshotError::DuplicateObjective(objective.name()));
            }
            *slot = true;
        }

        objectives.sort_by_key(Objective::name);
        Ok(objectives)
    }

    /// Returns the options the game was created with.
    #[must_use]
    pub const fn options(&self) -> GameOptions {
        self.options
    }

    /// Returns the number of rounds left to deal after the current one.
    #[must_use]
    pub const fn rounds(&self) -> u8 {
        self.rounds
    }

    /// Returns the current round number, starting at 1.
    #[must_use]
    pub const fn current_round(&self) -> u8 {
        self.current_round
    }

    /// Returns the rolls allowed this round.
    #[must_use]
    pub const fn max_rolls(&self) -> u8 {
        self.max_rolls
    }

    /// Returns the rolls used this round.
    #[must_use]
    pub const fn dice_rolled(&self) -> u8 {
        self.dice_rolled
    }

    /// Returns the rolls left this round.
    #[must_use]
    pub const fn rolls_left(&self) -> u8 {
        self.max_rolls - self.dice_rolled
    }

    /// Returns the dice in play.
    #[must_use]
    pub const fn dice(&self) -> &[Die; DICE_COUNT] {
        &self.dice
    }

    /// Returns the faces currently showing.
    #[must_use]
    pub fn faces(&self) -> [u8; DICE_COUNT] {
        self.dice.map(|die| die.value())
    }

    /// Returns the score card in score-card order.
    #[must_use]
    pub fn objectives(&self) -> &[Objective] {
        &self.objectives
    }

    /// Returns the objective for `category`.
    #[must_use]
    pub fn objective(&self, category: Category) -> &Objective {
        &self.objectives[category.index()]
    }

    /// Returns the categories that are still open.
    #[must_use]
    pub fn open_categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.objectives
            .iter()
            .filter(|objective| !objective.is_locked())
            .map(Objective::name)
    }

    /// Returns the running score.
    #[must_use]
    pub const fn score(&self) -> u16 {
        self.score
    }

    /// Returns whether an objective was committed this round.
    #[must_use]
    pub const fn objective_selected(&self) -> bool {
        self.objective_selected
    }

    /// Returns the game phase.
    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        if self.rounds == 0 {
            GamePhase::Finished
        } else {
            GamePhase::Active
        }
    }

    /// Returns whether no rounds remain to be dealt.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.phase(), GamePhase::Finished)
    }

    /// Returns the phase of the current round.
    #[must_use]
    pub const fn round_phase(&self) -> RoundPhase {
        if self.objective_selected {
            RoundPhase::Ended
        } else if self.dice_rolled >= self.max_rolls {
            RoundPhase::Selecting
        } else {
            RoundPhase::Rolling
        }
    }
}

fn committed_points(objectives: &[Objective]) -> u16 {
    objectives
        .iter()
        .filter_map(Objective::points)
        .fold(0, u16::saturating_add)
}
