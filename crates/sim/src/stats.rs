// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Simulation counters.
//!
//! Counters from independent batches merge by addition, so the order in which
//! trials complete doesn't change the final statistics.
use ahash::HashMap;
use serde::{Deserialize, Serialize};
use std::{iter, ops};

use holdem_cards::HoleCards;
use holdem_eval::HandCategory;

use crate::Outcome;

fn percent(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Hero win, tie, and loss counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquityStats {
    /// Number of won rounds.
    pub wins: u64,
    /// Number of tied rounds.
    pub ties: u64,
    /// Number of lost rounds.
    pub losses: u64,
}

impl EquityStats {
    /// Records a round outcome.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::Loss => self.losses += 1,
        }
    }

    /// Total number of rounds.
    pub fn total(&self) -> u64 {
        self.wins + self.ties + self.losses
    }

    /// Percentage of won or tied rounds, `None` if no round was played.
    pub fn win_rate(&self) -> Option<f64> {
        let total = self.total();
        (total > 0).then(|| percent(self.wins + self.ties, total))
    }

    /// Percentage of won rounds.
    pub fn win_pct(&self) -> f64 {
        percent(self.wins, self.total())
    }

    /// Percentage of tied rounds.
    pub fn tie_pct(&self) -> f64 {
        percent(self.ties, self.total())
    }

    /// Percentage of lost rounds.
    pub fn loss_pct(&self) -> f64 {
        percent(self.losses, self.total())
    }
}

impl ops::AddAssign for EquityStats {
    fn add_assign(&mut self, rhs: Self) {
        self.wins += rhs.wins;
        self.ties += rhs.ties;
        self.losses += rhs.losses;
    }
}

impl ops::Add for EquityStats {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl iter::Sum for EquityStats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, s| acc + s)
    }
}

/// Number of times each category was the winning hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDistribution {
    counts: [u64; HandCategory::COUNT],
}

impl CategoryDistribution {
    /// Records a winning category.
    pub fn record(&mut self, category: HandCategory) {
        self.counts[category.index()] += 1;
    }

    /// Number of wins for a category.
    pub fn count(&self, category: HandCategory) -> u64 {
        self.counts[category.index()]
    }

    /// Number of recorded trials.
    pub fn trials(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Percentage of trials won by a category.
    pub fn percentage(&self, category: HandCategory) -> f64 {
        percent(self.count(category), self.trials())
    }

    /// Categories with their percentages, from the highest category.
    pub fn percentages(&self) -> Vec<(HandCategory, f64)> {
        HandCategory::categories()
            .rev()
            .map(|c| (c, self.percentage(c)))
            .collect()
    }
}

impl ops::AddAssign for CategoryDistribution {
    fn add_assign(&mut self, rhs: Self) {
        for (l, r) in self.counts.iter_mut().zip(rhs.counts) {
            *l += r;
        }
    }
}

impl iter::Sum for CategoryDistribution {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |mut acc, d| {
            acc += d;
            acc
        })
    }
}

/// How many times each hole cards combination was dealt.
#[derive(Debug, Clone, Default)]
pub struct PocketFrequency {
    counts: HashMap<HoleCards, u64>,
    trials: u64,
}

impl PocketFrequency {
    /// Records the hole cards dealt in one trial.
    pub fn record(&mut self, dealt: &[HoleCards]) {
        for hole in dealt {
            *self.counts.entry(*hole).or_default() += 1;
        }

        self.trials += 1;
    }

    /// Number of times the hole cards were dealt.
    pub fn count(&self, hole: &HoleCards) -> u64 {
        self.counts.get(hole).copied().unwrap_or_default()
    }

    /// Number of recorded trials.
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Number of hole cards dealt across all trials.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// All 1326 combinations with their counts, most frequent first.
    pub fn entries(&self) -> Vec<(HoleCards, u64)> {
        let mut entries = HoleCards::all()
            .into_iter()
            .map(|h| (h, self.count(&h)))
            .collect::<Vec<_>>();
        entries.sort_by(|(h1, c1), (h2, c2)| c2.cmp(c1).then(h1.cmp(h2)));
        entries
    }
}

impl ops::AddAssign for PocketFrequency {
    fn add_assign(&mut self, rhs: Self) {
        for (hole, count) in rhs.counts {
            *self.counts.entry(hole).or_default() += count;
        }

        self.trials += rhs.trials;
    }
}

impl iter::Sum for PocketFrequency {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |mut acc, f| {
            acc += f;
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_cards::{Card, Rank, Suit};

    #[test]
    fn equity_counters() {
        let mut stats = EquityStats::default();
        assert_eq!(stats.win_rate(), None);

        stats.record(Outcome::Win);
        stats.record(Outcome::Win);
        stats.record(Outcome::Tie);
        stats.record(Outcome::Loss);

        assert_eq!(stats.total(), 4);
        assert_eq!(stats.win_rate(), Some(75.0));
        assert_eq!(stats.win_pct(), 50.0);
        assert_eq!(stats.tie_pct(), 25.0);
        assert_eq!(stats.loss_pct(), 25.0);
    }

    #[test]
    fn equity_merge() {
        let a = EquityStats {
            wins: 3,
            ties: 1,
            losses: 2,
        };
        let b = EquityStats {
            wins: 1,
            ties: 0,
            losses: 5,
        };

        assert_eq!(a + b, b + a);
        assert_eq!([a, b].into_iter().sum::<EquityStats>(), a + b);
        assert_eq!((a + b).total(), a.total() + b.total());
    }

    #[test]
    fn category_distribution() {
        let mut d = CategoryDistribution::default();
        d.record(HandCategory::OnePair);
        d.record(HandCategory::OnePair);
        d.record(HandCategory::Flush);
        d.record(HandCategory::HighCard);

        assert_eq!(d.trials(), 4);
        assert_eq!(d.count(HandCategory::OnePair), 2);
        assert_eq!(d.percentage(HandCategory::Flush), 25.0);

        let p = d.percentages();
        assert_eq!(p[0].0, HandCategory::StraightFlush);
        assert_eq!(p.iter().map(|(_, p)| p).sum::<f64>(), 100.0);

        let mut merged = d.clone();
        merged += d;
        assert_eq!(merged.count(HandCategory::OnePair), 4);
        assert_eq!(merged.trials(), 8);
    }

    #[test]
    fn pocket_frequency() {
        let aa = HoleCards::new(
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Ace, Suit::Hearts),
        );
        let kq = HoleCards::new(
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Queen, Suit::Hearts),
        );

        let mut f = PocketFrequency::default();
        f.record(&[aa, kq]);
        f.record(&[aa]);

        assert_eq!(f.trials(), 2);
        assert_eq!(f.total(), 3);
        assert_eq!(f.count(&aa), 2);

        let entries = f.entries();
        assert_eq!(entries.len(), HoleCards::COMBINATIONS);
        assert_eq!(entries[0], (aa, 2));
        assert_eq!(entries[1], (kq, 1));

        let mut merged = f.clone();
        merged += f;
        assert_eq!(merged.count(&aa), 4);
        assert_eq!(merged.trials(), 4);
    }
}
