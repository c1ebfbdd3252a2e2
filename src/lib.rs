//! A Yahtzee dice-scoring game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns five dice and the fifteen
//! scoring objectives of one player's score card. It handles rolling and
//! locking dice, round progression, and evaluating or committing category
//! scores. Hosts observe changes by registering listeners and persist games
//! through [`GameSnapshot`].
//!
//! # Example
//!
//! ```
//! use yahtzee::{Category, Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.throw_dice();
//! game.lock_dice(0).unwrap();
//! game.throw_dice();
//!
//! let points = game.commit(Category::Chance).unwrap();
//! assert_eq!(game.score(), points);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod category;
pub mod dice;
pub mod error;
pub mod game;
pub mod objective;
pub mod options;
pub mod scoring;
pub mod snapshot;

// Re-export main types
pub use category::{CATEGORY_COUNT, Category};
pub use dice::{DICE_COUNT, Die, FACES};
pub use error::{LockError, ParseCategoryError, ScoreError, SnapshotError};
pub use game::{Game, GamePhase, RoundPhase};
pub use objective::Objective;
pub use options::GameOptions;
pub use scoring::FaceCounts;
pub use snapshot::GameSnapshot;
