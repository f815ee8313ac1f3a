// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hold'em equity Monte Carlo simulation.
//!
//! Each trial deals a fresh shuffled deck to the players and the board, folds
//! random players if requested, and evaluates the showdown. Trials share no
//! state, the rng is passed explicitly so that a seeded rng reproduces the
//! same results:
//!
//! ```
//! # use holdem_sim::*;
//! # use holdem_cards::{Card, HoleCards, Rank, Suit};
//! # use rand::prelude::*;
//! let aces = HoleCards::new(
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::Ace, Suit::Hearts),
//! );
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let equity = simulate_equity(aces, 1, 1_000, 0, &mut rng).unwrap();
//! assert!(equity > 75.0);
//! ```
//!
//! The **`parallel`** feature enables the `par_*` functions that split a batch
//! across a number of threads and add the per thread counters together, the
//! [Simulator] uses them when configured with more than one task.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

/// Maximum number of opponents against the hero.
pub const MAX_OPPONENTS: usize = 9;

/// Maximum number of players in a symmetric game.
pub const MAX_PLAYERS: usize = 10;

mod error;
pub use error::SimError;

mod round;
pub use round::{BOARD_SIZE, Outcome, Round, simulate_round};

mod simulate;
pub use simulate::{
    simulate_equity, simulate_equity_stats, simulate_pocket_frequency, simulate_winning_category,
};

mod stats;
pub use stats::{CategoryDistribution, EquityStats, PocketFrequency};

mod simulator;
pub use simulator::{Config, Simulator};

#[cfg(feature = "parallel")]
mod parallel;
#[cfg(feature = "parallel")]
pub use parallel::{
    par_simulate_equity_stats, par_simulate_pocket_frequency, par_simulate_winning_category,
};
