//! A deck of colored playing cards with optional `no_std` support.
//!
//! The crate provides a [`Deck`] type that owns an ordered sequence of
//! [`Card`]s and supports shuffling, dealing from the top, sorting by color
//! and value, and a simple two-player scoring game.
//!
//! # Example
//!
//! ```
//! use colordeck::{Color, DeckOptions};
//!
//! let mut deck = DeckOptions::default().with_seed(42).build().unwrap();
//! let sorted = deck.sort_cards(&[Color::Yellow, Color::Green]).unwrap();
//! assert_eq!(sorted.len(), 20);
//!
//! deck.shuffle();
//! let result = deck.play_game().unwrap();
//! assert_eq!(deck.len(), 24);
//! let _ = result.winner;
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
pub mod hand;
pub mod options;
pub mod parse;
pub mod result;

// Re-export main types
pub use card::{Card, CardId, Color};
pub use deck::{Deck, GAME_CARDS};
pub use error::{CardError, DealError, DeckError, SortError};
pub use hand::Hand;
pub use options::DeckOptions;
pub use result::{GameResult, Winner};
