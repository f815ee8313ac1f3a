// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hold'em cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use holdem_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert!(ah.rank() > kd.rank());
//! ```
//!
//! a [Deck] type for shuffling and dealing cards from the front of the deck:
//!
//! ```
//! # use holdem_cards::Deck;
//! # use rand::prelude::*;
//! let mut deck = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(1));
//! let flop = deck.deal(3);
//! assert_eq!(flop.len(), 3);
//! assert_eq!(deck.count(), 49);
//! ```
//!
//! and [HoleCards] with the [Archetype] starting hand shapes used to sample
//! hands with a given shape:
//!
//! ```
//! # use holdem_cards::Archetype;
//! # use rand::prelude::*;
//! let archetype: Archetype = "suited-connected".parse().unwrap();
//! let hole = archetype.sample(&mut StdRng::seed_from_u64(1));
//! assert!(hole.is_suited() && hole.is_connected());
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, ParseCardError, Rank, Suit, parse_cards};

mod deck;
pub use deck::Deck;

mod hole;
pub use hole::{Archetype, HoleCards, UnknownArchetype};
