// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hole cards and starting hand archetypes.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::{Card, Deck, Rank};

/// A player two private cards.
///
/// The cards are kept in canonical order, lower rank first and suit order for
/// pairs, so that the same two cards compare equal in whatever order they were
/// dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HoleCards([Card; 2]);

impl HoleCards {
    /// Number of distinct hole cards combinations.
    pub const COMBINATIONS: usize = 1_326;

    /// Creates hole cards from two cards.
    ///
    /// Panics if the two cards are equal.
    pub fn new(c1: Card, c2: Card) -> Self {
        assert_ne!(c1, c2, "hole cards must be distinct");
        if c1 <= c2 { Self([c1, c2]) } else { Self([c2, c1]) }
    }

    /// Creates hole cards from two cards, returns `None` if the cards are equal.
    pub fn try_new(c1: Card, c2: Card) -> Option<Self> {
        (c1 != c2).then(|| Self::new(c1, c2))
    }

    /// Returns all 1326 two cards combinations.
    pub fn all() -> Vec<HoleCards> {
        let mut hands = Vec::with_capacity(Self::COMBINATIONS);
        Deck::default().for_each(2, |cards| hands.push(HoleCards::new(cards[0], cards[1])));
        hands
    }

    /// The two cards.
    pub fn cards(&self) -> [Card; 2] {
        self.0
    }

    /// The lower ranked card.
    pub fn low(&self) -> Card {
        self.0[0]
    }

    /// The higher ranked card.
    pub fn high(&self) -> Card {
        self.0[1]
    }

    /// Checks if this is a pocket pair.
    pub fn is_pair(&self) -> bool {
        self.low().rank() == self.high().rank()
    }

    /// Checks if both cards have the same suit.
    pub fn is_suited(&self) -> bool {
        self.low().suit() == self.high().suit()
    }

    /// Checks if the two ranks are adjacent, Ace connects with both King and Deuce.
    pub fn is_connected(&self) -> bool {
        let (lo, hi) = (self.low().rank(), self.high().rank());
        hi.value() == lo.value() + 1 || (lo == Rank::Deuce && hi == Rank::Ace)
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0[0], self.0[1])
    }
}

/// Error returned for an unrecognized archetype name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown hand archetype '{0}'")]
pub struct UnknownArchetype(pub String);

/// A starting hand shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    /// A pocket pair.
    Paired,
    /// Two cards of the same suit.
    Suited,
    /// Two cards with adjacent ranks.
    Connected,
    /// Two cards of the same suit with adjacent ranks.
    SuitedConnected,
}

impl Archetype {
    /// Returns all archetypes.
    pub fn all() -> impl DoubleEndedIterator<Item = Archetype> {
        [
            Archetype::Paired,
            Archetype::Suited,
            Archetype::Connected,
            Archetype::SuitedConnected,
        ]
        .into_iter()
    }

    /// The archetype canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Archetype::Paired => "paired",
            Archetype::Suited => "suited",
            Archetype::Connected => "connected",
            Archetype::SuitedConnected => "suited-connected",
        }
    }

    /// Checks if the hole cards have this archetype shape.
    pub fn matches(&self, hole: &HoleCards) -> bool {
        match self {
            Archetype::Paired => hole.is_pair(),
            Archetype::Suited => hole.is_suited(),
            Archetype::Connected => hole.is_connected(),
            Archetype::SuitedConnected => hole.is_suited() && hole.is_connected(),
        }
    }

    /// Samples hole cards with this shape uniformly at random.
    ///
    /// Draws the top two cards of a freshly shuffled deck until they match
    /// the shape, every matching combination is equally likely.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> HoleCards {
        loop {
            let mut deck = Deck::new_and_shuffled(rng);
            let hole = HoleCards::new(deck.deal_one(), deck.deal_one());
            if self.matches(&hole) {
                return hole;
            }
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Archetype {
    type Err = UnknownArchetype;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "paired" | "pair" | "pairs" => Ok(Archetype::Paired),
            "suited" => Ok(Archetype::Suited),
            "connected" => Ok(Archetype::Connected),
            "suited-connected" | "suited_connected" | "connected-suited" | "connected_suited" => {
                Ok(Archetype::SuitedConnected)
            }
            _ => Err(UnknownArchetype(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Suit;
    use ahash::{HashMap, HashSet};

    fn hole(s: &str) -> HoleCards {
        let cards = crate::parse_cards(s).unwrap();
        HoleCards::new(cards[0], cards[1])
    }

    #[test]
    fn canonical_order() {
        assert_eq!(hole("AS 2C"), hole("2C AS"));
        assert_eq!(hole("AS 2C").low(), Card::new(Rank::Deuce, Suit::Clubs));
        assert_eq!(hole("KH KC").low(), Card::new(Rank::King, Suit::Clubs));
        assert_eq!(hole("KH KC").to_string(), "KC/KH");
    }

    #[test]
    fn all_combinations() {
        let all = HoleCards::all();
        assert_eq!(all.len(), HoleCards::COMBINATIONS);
        assert_eq!(all.iter().collect::<HashSet<_>>().len(), HoleCards::COMBINATIONS);

        assert_eq!(all.iter().filter(|h| h.is_pair()).count(), 78);
        assert_eq!(all.iter().filter(|h| h.is_suited()).count(), 312);
        // 13 adjacent rank pairs including A-2, 16 suit combinations each.
        assert_eq!(all.iter().filter(|h| h.is_connected()).count(), 208);
    }

    #[test]
    fn shapes() {
        assert!(hole("7H 7D").is_pair());
        assert!(!hole("7H 7D").is_connected());
        assert!(hole("7H 8H").is_suited());
        assert!(hole("7H 8C").is_connected());
        assert!(hole("AH 2C").is_connected());
        assert!(hole("AH KC").is_connected());
        assert!(!hole("AH 3C").is_connected());
        assert!(!hole("AH QH").is_connected());
    }

    #[test]
    fn parse_archetype() {
        assert_eq!("paired".parse(), Ok(Archetype::Paired));
        assert_eq!("pairs".parse(), Ok(Archetype::Paired));
        assert_eq!("Suited".parse(), Ok(Archetype::Suited));
        assert_eq!("connected".parse(), Ok(Archetype::Connected));
        assert_eq!("connected_suited".parse(), Ok(Archetype::SuitedConnected));
        assert_eq!("suited-connected".parse(), Ok(Archetype::SuitedConnected));
        assert_eq!(
            "offsuit".parse::<Archetype>(),
            Err(UnknownArchetype("offsuit".to_string()))
        );

        for a in Archetype::all() {
            assert_eq!(a.name().parse(), Ok(a));
        }
    }

    #[test]
    fn samples_match_shape() {
        let mut rng = StdRng::seed_from_u64(11);
        for archetype in Archetype::all() {
            for _ in 0..200 {
                let h = archetype.sample(&mut rng);
                assert!(archetype.matches(&h), "{archetype} {h}");
            }
        }
    }

    #[test]
    fn samples_cover_ranks() {
        // Every pair rank should show up with enough samples.
        let mut rng = StdRng::seed_from_u64(3);
        let mut counts = HashMap::<Rank, usize>::default();
        for _ in 0..2_000 {
            let h = Archetype::Paired.sample(&mut rng);
            *counts.entry(h.low().rank()).or_default() += 1;
        }

        assert_eq!(counts.len(), 13);
        assert!(counts.values().all(|&c| c > 80), "{counts:?}");
    }
}
