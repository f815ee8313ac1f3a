// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Subcommands runners and reports.
use anyhow::{Result, bail};
use log::info;
use std::time::Instant;

use holdem_cards::{Archetype, Card, HoleCards, Rank, Suit, parse_cards};
use holdem_eval::HandCategory;
use holdem_sim::{EquityStats, Simulator};

/// Parses a two cards hand like "AS AH" or "KD,QD".
pub fn parse_hole(s: &str) -> Result<HoleCards> {
    let cards = parse_cards(s)?;
    let [c1, c2] = cards[..] else {
        bail!("a hand needs two cards, got {} in '{s}'", cards.len());
    };

    match HoleCards::try_new(c1, c2) {
        Some(hole) => Ok(hole),
        None => bail!("duplicate card {c1} in '{s}'"),
    }
}

fn print_stats(stats: &EquityStats) {
    println!(
        "Win {:6.2}%  Tie {:6.2}%  Loss {:6.2}%  ({} trials)",
        stats.win_pct(),
        stats.tie_pct(),
        stats.loss_pct(),
        stats.total()
    );

    if let Some(rate) = stats.win_rate() {
        println!("Equity {rate:.2}%");
    }
}

pub fn equity(sim: &Simulator, hand: &str, n_opponents: usize, n_folding: usize) -> Result<()> {
    let hero = parse_hole(hand)?;
    let now = Instant::now();

    let stats = sim.equity(hero, n_opponents, n_folding)?;

    println!("{hero} against {n_opponents} opponents, {n_folding} folding");
    print_stats(&stats);
    info!("Elapsed: {:.3}s", now.elapsed().as_secs_f64());

    Ok(())
}

pub fn archetype(
    sim: &Simulator,
    shape: &str,
    n_opponents: usize,
    n_folding: usize,
    samples: usize,
) -> Result<()> {
    let archetype = shape.parse::<Archetype>()?;
    let now = Instant::now();

    let stats = sim.archetype_equity(archetype, n_opponents, n_folding, samples)?;

    println!("{samples} {archetype} hands against {n_opponents} opponents, {n_folding} folding");
    print_stats(&stats);
    info!("Elapsed: {:.3}s", now.elapsed().as_secs_f64());

    Ok(())
}

pub fn winners(sim: &Simulator, min_players: usize, max_players: usize) -> Result<()> {
    if min_players > max_players {
        bail!("min players {min_players} greater than max players {max_players}");
    }

    let now = Instant::now();

    print!("{:<16}", "Players");
    for n_players in min_players..=max_players {
        print!("{n_players:>8}");
    }
    println!();

    let dists = (min_players..=max_players)
        .map(|n| sim.winning_categories(n))
        .collect::<Result<Vec<_>, _>>()?;

    for category in HandCategory::categories().rev() {
        print!("{:<16}", category.name());
        for dist in &dists {
            print!("{:>7.2}%", dist.percentage(category));
        }
        println!();
    }

    info!("Elapsed: {:.3}s", now.elapsed().as_secs_f64());
    Ok(())
}

/// Chart cell hand, suited above the diagonal, offsuit below it, and pairs on
/// the diagonal.
fn chart_hand(r1: Rank, r2: Rank) -> (HoleCards, String) {
    if r1 == r2 {
        let hole = HoleCards::new(Card::new(r1, Suit::Hearts), Card::new(r2, Suit::Spades));
        (hole, format!("{r1}{r2} "))
    } else if r1 > r2 {
        let hole = HoleCards::new(Card::new(r1, Suit::Hearts), Card::new(r2, Suit::Hearts));
        (hole, format!("{r1}{r2}s"))
    } else {
        let hole = HoleCards::new(Card::new(r2, Suit::Hearts), Card::new(r1, Suit::Spades));
        (hole, format!("{r2}{r1}o"))
    }
}

fn separator() {
    print!("|");
    for _ in 0..13 {
        print!("-----|");
    }
    println!();
}

pub fn chart(sim: &Simulator, n_opponents: usize) -> Result<()> {
    let now = Instant::now();

    separator();

    for r1 in Rank::ranks().rev() {
        let mut labels = Vec::with_capacity(13);
        let mut probs = Vec::with_capacity(13);

        for r2 in Rank::ranks().rev() {
            let (hole, label) = chart_hand(r1, r2);
            let stats = sim.equity(hole, n_opponents, 0)?;
            labels.push(label);
            probs.push(stats.win_rate().unwrap_or_default());
        }

        print!("|");
        for label in labels {
            print!(" {label} |");
        }
        println!();

        print!("|");
        for prob in &probs {
            print!(" {:2.0}% |", prob.round().min(99.0));
        }
        println!();

        separator();
    }

    info!("Elapsed: {:.3}s", now.elapsed().as_secs_f64());
    Ok(())
}

pub fn pocket(sim: &Simulator, n_players: usize, top: usize) -> Result<()> {
    let now = Instant::now();

    let freq = sim.pocket_frequency(n_players)?;
    let total = freq.total().max(1) as f64;

    println!(
        "{} hands dealt in {} trials to {n_players} players",
        freq.total(),
        freq.trials()
    );

    for (hole, count) in freq.entries().into_iter().take(top) {
        let pct = count as f64 / total * 100.0;
        println!("{hole}  {count:>8}  {pct:.4}%");
    }

    info!("Elapsed: {:.3}s", now.elapsed().as_secs_f64());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hole_hands() {
        let hole = parse_hole("as, kd").unwrap();
        assert_eq!(hole.high(), Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(hole.low(), Card::new(Rank::King, Suit::Diamonds));

        assert!(parse_hole("AS").is_err());
        assert!(parse_hole("AS KD QC").is_err());
        assert!(parse_hole("AS AS").is_err());
        assert!(parse_hole("AS XX").is_err());
    }

    #[test]
    fn chart_cells() {
        let (hole, label) = chart_hand(Rank::Ace, Rank::Ace);
        assert!(hole.is_pair());
        assert_eq!(label, "AA ");

        let (hole, label) = chart_hand(Rank::Ace, Rank::King);
        assert!(hole.is_suited());
        assert_eq!(label, "AKs");

        let (hole, label) = chart_hand(Rank::King, Rank::Ace);
        assert!(!hole.is_suited());
        assert_eq!(label, "AKo");
    }
}
