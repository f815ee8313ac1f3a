// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand evaluation.
use std::{cmp::Ordering, fmt};
use thiserror::Error;

use holdem_cards::{Card, Rank};

use crate::HandCategory;

/// Hand evaluation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A hand must have between 5 and 7 cards.
    #[error("invalid hand size {0}, a hand must have 5 to 7 cards")]
    InvalidHandSize(usize),
    /// The same card appears more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
}

/// Minimum number of cards in a hand.
pub const MIN_HAND_SIZE: usize = 5;

/// Maximum number of cards in a hand.
pub const MAX_HAND_SIZE: usize = 7;

const ACE: u8 = 14;
const ACE_LOW: u8 = 1;

/// Rank and suit counts for a hand, every category check and tie-break is
/// derived from this single pass over the cards.
#[derive(Debug, Default)]
struct Tally {
    /// Number of cards for each rank value, indexed by 2..=14.
    ranks: [u8; 15],
    /// Number of cards for each suit.
    suits: [u8; 4],
    /// Bit r is set if the suit has a card of rank value r.
    suit_masks: [u16; 4],
    /// Bit r is set if the hand has a card of rank value r.
    rank_mask: u16,
}

impl Tally {
    fn new(cards: &[Card]) -> Result<Self, EvalError> {
        let mut tally = Tally::default();
        let mut seen = 0u64;

        for card in cards {
            let bit = 1u64 << card.index();
            if seen & bit != 0 {
                return Err(EvalError::DuplicateCard(*card));
            }
            seen |= bit;

            let (rank, suit) = (card.rank().value(), card.suit().index());
            tally.ranks[rank as usize] += 1;
            tally.suits[suit] += 1;
            tally.suit_masks[suit] |= 1 << rank;
            tally.rank_mask |= 1 << rank;
        }

        Ok(tally)
    }

    /// The suit with at least 5 cards, with 7 cards there can be only one.
    fn flush_suit(&self) -> Option<usize> {
        self.suits.iter().position(|&n| n >= 5)
    }

    /// Rank values with exactly `count` cards, highest first.
    fn with_count(&self, count: u8) -> impl Iterator<Item = u8> + '_ {
        (2..=ACE).rev().filter(move |&r| self.ranks[r as usize] == count)
    }

    /// Rank values of the cards left after removing all cards of the `excluded`
    /// ranks, highest first, a rank is repeated once for each card.
    fn kickers<'a>(&'a self, excluded: &'a [u8]) -> impl Iterator<Item = u8> + 'a {
        (2..=ACE)
            .rev()
            .filter(move |r| !excluded.contains(r))
            .flat_map(move |r| std::iter::repeat_n(r, self.ranks[r as usize] as usize))
    }
}

/// Returns the top card of the highest run of 5 consecutive ranks in a rank
/// mask, the Ace also plays low so the wheel A-2-3-4-5 has top card 5.
fn straight_top(mask: u16) -> Option<u8> {
    let mask = if mask & (1 << ACE) != 0 {
        mask | (1 << ACE_LOW)
    } else {
        mask
    };

    (5..=ACE).rev().find(|&top| {
        let run = 0b11111u16 << (top - 4);
        mask & run == run
    })
}

/// Rank values of a mask, highest first.
fn mask_ranks(mask: u16) -> impl Iterator<Item = u8> {
    (2..=ACE).rev().filter(move |&r| mask & (1 << r) != 0)
}

/// The value of a poker hand.
///
/// A value is a hand category plus the ranks that break ties between hands of
/// the same category, values implement [Ord] so the best hand is the greatest.
#[derive(Clone, Copy)]
pub struct HandValue {
    category: HandCategory,
    ranks: [u8; MAX_HAND_SIZE],
    len: u8,
}

impl HandValue {
    /// Evaluates a hand of 5, 6, or 7 cards.
    ///
    /// The category is the one of the best 5 cards hand that can be made from
    /// the given cards. High card hands compare all their ranks, and two pair
    /// hands take the kicker from the unpaired cards.
    pub fn eval(cards: &[Card]) -> Result<HandValue, EvalError> {
        if !(MIN_HAND_SIZE..=MAX_HAND_SIZE).contains(&cards.len()) {
            return Err(EvalError::InvalidHandSize(cards.len()));
        }

        let tally = Tally::new(cards)?;
        let flush_suit = tally.flush_suit();

        if let Some(suit) = flush_suit {
            if let Some(top) = straight_top(tally.suit_masks[suit]) {
                return Ok(Self::new(HandCategory::StraightFlush, [top]));
            }
        }

        if let Some(quads) = tally.with_count(4).next() {
            return Ok(Self::new(HandCategory::FourOfAKind, [quads]));
        }

        if let Some(trips) = tally.with_count(3).next() {
            // A second triple can play as the pair.
            let pair = (2..=ACE)
                .rev()
                .find(|&r| r != trips && tally.ranks[r as usize] >= 2);
            if let Some(pair) = pair {
                return Ok(Self::new(HandCategory::FullHouse, [trips, pair]));
            }
        }

        if let Some(suit) = flush_suit {
            return Ok(Self::new(
                HandCategory::Flush,
                mask_ranks(tally.suit_masks[suit]).take(5),
            ));
        }

        if let Some(top) = straight_top(tally.rank_mask) {
            return Ok(Self::new(HandCategory::Straight, [top]));
        }

        if let Some(trips) = tally.with_count(3).next() {
            let excluded = [trips];
            let ranks = std::iter::once(trips).chain(tally.kickers(&excluded).take(2));
            return Ok(Self::new(HandCategory::ThreeOfAKind, ranks));
        }

        let mut pairs = tally.with_count(2);
        match (pairs.next(), pairs.next()) {
            (Some(high), Some(low)) => {
                // A third pair never plays as the kicker.
                let ranks = [high, low].into_iter().chain(tally.with_count(1).take(1));
                Ok(Self::new(HandCategory::TwoPair, ranks))
            }
            (Some(pair), None) => {
                let pairs = [pair];
                let ranks = std::iter::once(pair).chain(tally.kickers(&pairs).take(3));
                Ok(Self::new(HandCategory::OnePair, ranks))
            }
            _ => Ok(Self::new(HandCategory::HighCard, tally.kickers(&[]))),
        }
    }

    fn new<I>(category: HandCategory, ranks: I) -> Self
    where
        I: IntoIterator<Item = u8>,
    {
        let mut value = Self {
            category,
            ranks: [0; MAX_HAND_SIZE],
            len: 0,
        };

        for (slot, rank) in value.ranks.iter_mut().zip(ranks) {
            *slot = rank;
            value.len += 1;
        }

        value
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The rank values compared, in order, to break ties within a category.
    ///
    /// For straights this is the top card of the run, 5 for the wheel.
    pub fn tiebreak(&self) -> &[u8] {
        &self.ranks[..self.len as usize]
    }

    /// Same as [HandValue::tiebreak] as ranks.
    pub fn tiebreak_ranks(&self) -> Vec<Rank> {
        self.tiebreak()
            .iter()
            .filter_map(|&r| Rank::from_value(r))
            .collect()
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        // Tie-break ranks are compared over their common length only.
        self.category.cmp(&other.category).then_with(|| {
            self.tiebreak()
                .iter()
                .zip(other.tiebreak())
                .map(|(a, b)| a.cmp(b))
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HandValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandValue {}

impl fmt::Debug for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandValue")
            .field("category", &self.category)
            .field("tiebreak", &self.tiebreak())
            .finish()
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)?;
        for rank in self.tiebreak_ranks() {
            write!(f, " {rank}")?;
        }

        Ok(())
    }
}

/// Classifies a hand of 5 to 7 cards.
pub fn classify(cards: &[Card]) -> Result<HandCategory, EvalError> {
    HandValue::eval(cards).map(|v| v.category())
}

/// Compares two hands.
///
/// Returns [Ordering::Greater] if hand `a` wins, [Ordering::Less] if hand `b`
/// wins, and [Ordering::Equal] for a tie.
pub fn compare(a: &[Card], b: &[Card]) -> Result<Ordering, EvalError> {
    Ok(HandValue::eval(a)?.cmp(&HandValue::eval(b)?))
}
