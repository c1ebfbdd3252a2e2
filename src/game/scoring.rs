use crate::category::{CATEGORY_COUNT, Category};
use crate::error::ScoreError;

use super::Game;
use super::listeners::Event;

impl Game {
    /// Scores the current dice in `category` without committing.
    ///
    /// Works for locked categories too; the result is only an estimate.
    #[must_use]
    pub fn estimate(&self, category: Category) -> u16 {
        category.score(&self.faces())
    }

    /// Scores the current dice in every category, in score-card order.
    ///
    /// # Example
    ///
    /// ```
    /// use yahtzee::{Category, Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 11);
    /// let estimates = game.estimates();
    /// assert_eq!(
    ///     estimates[Category::Yahtzee.index()],
    ///     game.estimate(Category::Yahtzee)
    /// );
    /// ```
    #[must_use]
    pub fn estimates(&self) -> [u16; CATEGORY_COUNT] {
        let faces = self.faces();
        Category::ALL.map(|category| category.score(&faces))
    }

    /// Commits the current dice to `category`.
    ///
    /// The objective records the evaluated points and locks, then the points
    /// are added to the score and score-updated listeners are notified once.
    /// Returns the committed points.
    ///
    /// # Errors
    ///
    /// Returns an error if the category is already locked or an objective has
    /// already been committed this round.
    pub fn commit(&mut self, category: Category) -> Result<u16, ScoreError> {
        if self.objectives[category.index()].is_locked() {
            return Err(ScoreError::AlreadyLocked(category));
        }
        if self.objective_selected {
            return Err(ScoreError::AlreadySelected);
        }

        let points = self.estimate(category);
        self.objectives[category.index()].commit(points);
        self.objective_selected = true;

        log::debug!("committed {points} points to {category}");

        self.set_score(self.score.saturating_add(points));
        Ok(points)
    }

    fn set_score(&mut self, score: u16) {
        self.score = score;
        self.notify(Event::ScoreUpdated);
    }
}
