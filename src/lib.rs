//! Uno cards, deck building, dealing and scoring with optional `no_std` support.
//!
//! The crate provides a [`Card`] type with play-compatibility and scoring
//! rules, a 108-card [`Deck`], a round-robin dealer and a hand scorer.
//!
//! # Example
//!
//! ```
//! use unodeck::{create_deck_seeded, deal_hands, DECK_SIZE};
//!
//! let mut deck = create_deck_seeded(42);
//! let hands = deal_hands(&mut deck, 4);
//! assert_eq!(deck.len(), DECK_SIZE - 4 * 7);
//! let _scores: Vec<u32> = hands.iter().map(|hand| hand.score()).collect();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod dealer;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;

// Re-export main types
pub use card::{ACTION_POINTS, Card, Color, Rank, RankKind, WILD_POINTS};
pub use dealer::{deal_hands, deal_hands_with};
#[cfg(feature = "std")]
pub use deck::create_deck;
pub use deck::{DECK_SIZE, Deck, create_deck_seeded, create_deck_with_rng, unshuffled_deck};
pub use error::CardError;
pub use hand::{Hand, hand_score};
pub use options::{DEFAULT_HAND_SIZE, DealOptions};
