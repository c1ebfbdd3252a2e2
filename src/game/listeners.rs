use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use super::Game;

type Listener = Box<dyn FnMut(&Game)>;

/// Events a host can listen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Event {
    DiceRolled,
    RoundAdvanced,
    ScoreUpdated,
}

/// Registered listeners, one list per event.
#[derive(Default)]
pub(super) struct Listeners {
    dice_rolled: Vec<Listener>,
    round_advanced: Vec<Listener>,
    score_updated: Vec<Listener>,
}

impl Listeners {
    const fn slot(&mut self, event: Event) -> &mut Vec<Listener> {
        match event {
            Event::DiceRolled => &mut self.dice_rolled,
            Event::RoundAdvanced => &mut self.round_advanced,
            Event::ScoreUpdated => &mut self.score_updated,
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("dice_rolled", &self.dice_rolled.len())
            .field("round_advanced", &self.round_advanced.len())
            .field("score_updated", &self.score_updated.len())
            .finish()
    }
}

impl Game {
    /// Registers a listener called after the dice change from a throw or a
    /// fresh deal.
    ///
    /// # Example
    ///
    /// ```
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// use yahtzee::{Game, GameOptions};
    ///
    /// let throws = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&throws);
    ///
    /// let mut game = Game::new(GameOptions::default(), 1);
    /// game.on_dice_rolled(move |_| counter.set(counter.get() + 1));
    /// game.throw_dice();
    /// assert_eq!(throws.get(), 1);
    /// ```
    pub fn on_dice_rolled<F>(&mut self, listener: F)
    where
        F: FnMut(&Self) + 'static,
    {
        self.listeners.dice_rolled.push(Box::new(listener));
    }

    /// Registers a listener called after a new round has been dealt.
    pub fn on_round_advanced<F>(&mut self, listener: F)
    where
        F: FnMut(&Self) + 'static,
    {
        self.listeners.round_advanced.push(Box::new(listener));
    }

    /// Registers a listener called after the score is written.
    pub fn on_score_updated<F>(&mut self, listener: F)
    where
        F: FnMut(&Self) + 'static,
    {
        self.listeners.score_updated.push(Box::new(listener));
    }

    /// Calls every listener for `event` with the current game state.
    pub(super) fn notify(&mut self, event: Event) {
        let mut listeners = core::mem::take(self.listeners.slot(event));
        for listener in &mut listeners {
            listener(self);
        }
        // Listeners only see `&Game`, so none can be registered meanwhile.
        *self.listeners.slot(event) = listeners;
    }
}
