//! Game state types.

/// Progress of the whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// More rounds can be dealt.
    Active,
    /// No rounds remain to be dealt. The current deal can still be scored.
    Finished,
}

/// Progress within the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Rolls are left and no objective has been selected.
    Rolling,
    /// Every roll is used; an objective should be selected.
    Selecting,
    /// An objective was selected; the round is ready to end.
    Ended,
}
