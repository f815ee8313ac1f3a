// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hold'em hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. The evaluator counts ranks
//! and suits in a single pass over the cards and derives the hand category and
//! its tie-break ranks from the counts, the result is the same as picking the
//! best 5 cards hand out of the given cards.
//!
//! To use the evaluator create a hand and use [HandValue] to evaluate the hand
//! and get its category:
//!
//! ```
//! # use holdem_eval::*;
//! let hand = parse_cards("AS AH 2C 7D 9H JS KC").unwrap();
//! let value = HandValue::eval(&hand).unwrap();
//! assert_eq!(value.category(), HandCategory::OnePair);
//!
//! let other = parse_cards("KS KH 2C 7D 9H JS KC").unwrap();
//! assert!(HandValue::eval(&other).unwrap() > value);
//! ```
//!
//! or the [classify] and [compare] functions.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod category;
pub use category::{HandCategory, category_name};

mod eval;
pub use eval::{EvalError, HandValue, MAX_HAND_SIZE, MIN_HAND_SIZE, classify, compare};

// Reexport cards types.
pub use holdem_cards::{Card, Deck, Rank, Suit, parse_cards};
