//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one round at a time: the bet
//! is taken on [`Game::deal`], the player hits or stands, the dealer draws to
//! 17 and the payout is credited. Every transition is reported to subscribed
//! [`RoundObserver`]s so any presentation layer can follow the table.
//!
//! # Example
//!
//! ```
//! use bjround::{Game, GameOptions, Phase};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.subscribe(|view: &bjround::RoundView| {
//!     let _ = (view.phase, view.balance);
//! });
//!
//! let view = game.deal().unwrap();
//! if view.phase == Phase::PlayerTurn {
//!     game.stand().unwrap();
//! }
//! assert_eq!(game.phase(), Phase::Settled);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod observer;
pub mod options;
pub mod result;
pub mod rng;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{Deck, canonical_cards};
pub use error::{ActionError, DealError, RoundError};
pub use game::{Game, Phase};
pub use hand::{BLACKJACK, Hand};
pub use observer::{RoundObserver, RoundView, Status};
pub use options::{DEFAULT_BALANCE, DEFAULT_BET, GameOptions, RoundingMode};
pub use result::{Outcome, RoundResult};
pub use rng::{NoShuffle, RandomSource, SeededRng};
