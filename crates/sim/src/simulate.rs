// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Sequential simulation batches.
use log::debug;
use rand::prelude::*;

use holdem_cards::{Deck, HoleCards};

use crate::{
    CategoryDistribution, EquityStats, PocketFrequency, Round, SimError,
    error::{check_opponents, check_players, check_trials},
    round::deal_hole_cards,
    simulate_round,
};

/// Plays `n_trials` rounds for the hero and returns the outcome counters.
pub fn simulate_equity_stats<R: Rng + ?Sized>(
    hero: HoleCards,
    n_opponents: usize,
    n_trials: usize,
    n_folding: usize,
    rng: &mut R,
) -> Result<EquityStats, SimError> {
    check_trials(n_trials)?;
    check_opponents(n_opponents)?;

    debug!("Equity {hero} against {n_opponents} opponents, {n_folding} folding, {n_trials} trials");

    let mut stats = EquityStats::default();
    for _ in 0..n_trials {
        stats.record(simulate_round(hero, n_opponents, n_folding, rng)?);
    }

    Ok(stats)
}

/// Returns the percentage of won or tied rounds out of `n_trials` rounds.
pub fn simulate_equity<R: Rng + ?Sized>(
    hero: HoleCards,
    n_opponents: usize,
    n_trials: usize,
    n_folding: usize,
    rng: &mut R,
) -> Result<f64, SimError> {
    let stats = simulate_equity_stats(hero, n_opponents, n_trials, n_folding, rng)?;
    stats.win_rate().ok_or(SimError::NoTrials)
}

/// Deals `n_trials` rounds to `n_players` players and counts the category of
/// the winning hand.
pub fn simulate_winning_category<R: Rng + ?Sized>(
    n_players: usize,
    n_trials: usize,
    rng: &mut R,
) -> Result<CategoryDistribution, SimError> {
    check_trials(n_trials)?;
    check_players(n_players)?;

    debug!("Winning categories for {n_players} players, {n_trials} trials");

    let mut dist = CategoryDistribution::default();
    for _ in 0..n_trials {
        let round = Round::deal(None, n_players, rng);
        if let Some((_, value)) = round.best_player()? {
            dist.record(value.category());
        }
    }

    Ok(dist)
}

/// Deals hole cards to `n_players` players `n_trials` times and counts how
/// many times each combination was dealt.
pub fn simulate_pocket_frequency<R: Rng + ?Sized>(
    n_players: usize,
    n_trials: usize,
    rng: &mut R,
) -> Result<PocketFrequency, SimError> {
    check_trials(n_trials)?;
    check_players(n_players)?;

    debug!("Pocket frequency for {n_players} players, {n_trials} trials");

    let mut freq = PocketFrequency::default();
    for _ in 0..n_trials {
        let mut deck = Deck::new_and_shuffled(rng);
        freq.record(&deal_hole_cards(&mut deck, n_players));
    }

    Ok(freq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_cards::parse_cards;
    use holdem_eval::HandCategory;

    fn hole(s: &str) -> HoleCards {
        let cards = parse_cards(s).unwrap();
        HoleCards::new(cards[0], cards[1])
    }

    #[test]
    fn pocket_aces_heads_up() {
        let mut rng = StdRng::seed_from_u64(0);
        let equity = simulate_equity(hole("AS AH"), 1, 10_000, 0, &mut rng).unwrap();
        assert!((83.0..88.0).contains(&equity), "equity {equity}");
    }

    #[test]
    fn equity_drops_with_more_opponents() {
        let mut rng = StdRng::seed_from_u64(1);
        let one = simulate_equity(hole("AS AH"), 1, 4_000, 0, &mut rng).unwrap();
        let five = simulate_equity(hole("AS AH"), 5, 4_000, 0, &mut rng).unwrap();
        assert!(five < one, "{five} >= {one}");
    }

    #[test]
    fn folding_raises_equity() {
        let hero = hole("7S 2D");
        let mut rng = StdRng::seed_from_u64(2);
        let all_in = simulate_equity(hero, 6, 5_000, 0, &mut rng).unwrap();
        let folded = simulate_equity(hero, 6, 5_000, 5, &mut rng).unwrap();
        assert!(folded > all_in, "{folded} <= {all_in}");
    }

    #[test]
    fn seeded_runs_repeat() {
        let hero = hole("KS QS");
        let s1 = simulate_equity_stats(hero, 3, 500, 1, &mut StdRng::seed_from_u64(9)).unwrap();
        let s2 = simulate_equity_stats(hero, 3, 500, 1, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(s1, s2);
        assert_eq!(s1.total(), 500);
    }

    #[test]
    fn zero_trials_is_an_error() {
        let mut rng = StdRng::seed_from_u64(0);
        let hero = hole("AS AH");
        assert_eq!(
            simulate_equity(hero, 1, 0, 0, &mut rng),
            Err(SimError::NoTrials)
        );
        assert_eq!(
            simulate_winning_category(2, 0, &mut rng),
            Err(SimError::NoTrials)
        );
        assert!(simulate_pocket_frequency(2, 0, &mut rng).is_err());
    }

    #[test]
    fn invalid_player_counts() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            simulate_equity(hole("AS AH"), 0, 10, 0, &mut rng),
            Err(SimError::InvalidOpponents(0))
        );
        assert_eq!(
            simulate_winning_category(11, 10, &mut rng),
            Err(SimError::InvalidPlayers(11))
        );
        assert_eq!(
            simulate_pocket_frequency(0, 10, &mut rng).err(),
            Some(SimError::InvalidPlayers(0))
        );
    }

    #[test]
    fn winning_categories_sum_to_100() {
        let mut rng = StdRng::seed_from_u64(3);
        let dist = simulate_winning_category(6, 3_000, &mut rng).unwrap();

        assert_eq!(dist.trials(), 3_000);
        let total = dist.percentages().iter().map(|(_, p)| p).sum::<f64>();
        assert!((total - 100.0).abs() < 1e-9, "total {total}");

        // With 6 players the winner most often has two pairs or better.
        let pairs_or_less = dist.percentage(HandCategory::HighCard)
            + dist.percentage(HandCategory::OnePair);
        assert!(pairs_or_less < 30.0, "{pairs_or_less}");
    }

    #[test]
    fn pocket_frequency_counts() {
        let mut rng = StdRng::seed_from_u64(4);
        let freq = simulate_pocket_frequency(9, 1_000, &mut rng).unwrap();

        assert_eq!(freq.trials(), 1_000);
        assert_eq!(freq.total(), 9_000);
    }
}
