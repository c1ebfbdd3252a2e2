use crate::error::LockError;

use super::Game;
use super::listeners::Event;

impl Game {
    /// Advances to the next round.
    ///
    /// Deals five fresh unlocked dice, uses up one of the remaining rounds,
    /// restores the roll budget and clears the round's objective selection.
    /// Notifies dice-rolled listeners, then round-advanced listeners.
    ///
    /// Returns `false` without changing anything when no rounds remain.
    ///
    /// # Example
    ///
    /// ```
    /// use yahtzee::{Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default().with_rounds(2), 7);
    /// assert_eq!(game.rounds(), 1);
    /// assert!(game.round());
    /// assert_eq!(game.rounds(), 0);
    /// assert_eq!(game.current_round(), 2);
    /// assert!(!game.round());
    /// ```
    pub fn round(&mut self) -> bool {
        if self.rounds == 0 {
            log::debug!("no rounds left to deal");
            return false;
        }

        self.dice = Self::deal(&mut self.rng);
        self.rounds -= 1;
        self.max_rolls = self.options.max_rolls;
        self.dice_rolled = 0;
        self.current_round = self.current_round.saturating_add(1);
        self.objective_selected = false;

        log::debug!(
            "round {} dealt, {} rounds left",
            self.current_round,
            self.rounds
        );

        self.notify(Event::DiceRolled);
        self.notify(Event::RoundAdvanced);
        true
    }

    /// Rolls every unlocked die.
    ///
    /// Locked dice keep their faces. Notifies dice-rolled listeners.
    ///
    /// Returns `false` without rolling when the round's rolls are used up.
    pub fn throw_dice(&mut self) -> bool {
        if self.dice_rolled >= self.max_rolls {
            log::debug!("no rolls left this round");
            return false;
        }

        for die in &mut self.dice {
            die.roll(&mut self.rng);
        }
        self.dice_rolled += 1;

        log::debug!(
            "throw {}/{}: {:?}",
            self.dice_rolled,
            self.max_rolls,
            self.faces()
        );

        self.notify(Event::DiceRolled);
        true
    }

    /// Locks the die at `index` so later throws keep its face.
    ///
    /// Dice stay locked until the next [`round`](Self::round).
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not below the number of dice.
    pub fn lock_dice(&mut self, index: usize) -> Result<(), LockError> {
        let die = self
            .dice
            .get_mut(index)
            .ok_or(LockError::InvalidIndex { index })?;
        die.lock();
        Ok(())
    }
}
