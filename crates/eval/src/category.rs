// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A poker hand category, a higher category always beats a lower one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No other category.
    HighCard = 1,
    /// Two cards of the same rank.
    OnePair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight with all cards of the same suit.
    StraightFlush,
}

impl HandCategory {
    /// Number of categories.
    pub const COUNT: usize = 9;

    /// Returns all categories from the lowest to the highest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// The category number in 1..=9.
    #[inline]
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Zero based index, useful to index counters arrays.
    #[inline]
    pub fn index(&self) -> usize {
        self.value() as usize - 1
    }

    /// Returns the category for a number in 1..=9.
    pub fn from_value(value: u8) -> Option<HandCategory> {
        Self::categories().find(|c| c.value() == value)
    }

    /// The category label.
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "high card",
            HandCategory::OnePair => "one pair",
            HandCategory::TwoPair => "two pairs",
            HandCategory::ThreeOfAKind => "three of a kind",
            HandCategory::Straight => "straight",
            HandCategory::Flush => "flush",
            HandCategory::FullHouse => "full house",
            HandCategory::FourOfAKind => "four of a kind",
            HandCategory::StraightFlush => "straight flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Returns the label for a hand category.
pub fn category_name(category: HandCategory) -> &'static str {
    category.name()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_values() {
        let values = HandCategory::categories()
            .map(|c| c.value())
            .collect::<Vec<_>>();
        assert_eq!(values, (1..=9).collect::<Vec<_>>());

        for (idx, c) in HandCategory::categories().enumerate() {
            assert_eq!(c.index(), idx);
            assert_eq!(HandCategory::from_value(c.value()), Some(c));
        }

        assert_eq!(HandCategory::from_value(0), None);
        assert_eq!(HandCategory::from_value(10), None);
    }

    #[test]
    fn category_order() {
        let categories = HandCategory::categories().collect::<Vec<_>>();
        assert!(categories.windows(2).all(|w| w[0] < w[1]));
        assert!(HandCategory::StraightFlush > HandCategory::FourOfAKind);
        assert!(HandCategory::Flush > HandCategory::Straight);
    }

    #[test]
    fn category_names() {
        assert_eq!(category_name(HandCategory::HighCard), "high card");
        assert_eq!(category_name(HandCategory::TwoPair), "two pairs");
        assert_eq!(HandCategory::StraightFlush.to_string(), "straight flush");
    }
}
