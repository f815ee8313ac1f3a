// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hold'em equity CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand, value_parser};
use log::error;

use holdem_sim::{Config, MAX_OPPONENTS, MAX_PLAYERS, Simulator};

mod commands;

#[derive(Debug, Parser)]
#[clap(version, about = "Hold'em hands equity Monte Carlo simulation.")]
struct Cli {
    /// The rng seed, a random seed is used if not set.
    #[clap(long, global = true)]
    seed: Option<u64>,
    /// Number of parallel tasks.
    #[clap(long, global = true, default_value_t = 4, value_parser = value_parser!(u16).range(1..=256))]
    tasks: u16,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Equity of a starting hand against random opponents.
    Equity {
        /// The hero hand, e.g. "AS AH".
        #[clap(long)]
        hand: String,
        /// The number of opponents.
        #[clap(long, short, default_value_t = 1, value_parser = value_parser!(u8).range(1..=MAX_OPPONENTS as i64))]
        opponents: u8,
        /// The number of random opponents that fold before the showdown.
        #[clap(long, short, default_value_t = 0)]
        folding: u8,
        /// The number of trials.
        #[clap(long, short, default_value_t = 10_000, value_parser = value_parser!(u64).range(1..))]
        trials: u64,
    },
    /// Equity of starting hands sampled with a given shape.
    Archetype {
        /// The hand shape: paired, suited, connected, or suited-connected.
        #[clap(long, short)]
        shape: String,
        /// The number of opponents.
        #[clap(long, short, default_value_t = 1, value_parser = value_parser!(u8).range(1..=MAX_OPPONENTS as i64))]
        opponents: u8,
        /// The number of random opponents that fold before the showdown.
        #[clap(long, short, default_value_t = 0)]
        folding: u8,
        /// The number of sampled hands.
        #[clap(long, default_value_t = 20, value_parser = value_parser!(u64).range(1..))]
        samples: u64,
        /// The number of trials for each sampled hand.
        #[clap(long, short, default_value_t = 5_000, value_parser = value_parser!(u64).range(1..))]
        trials: u64,
    },
    /// Distribution of the winning hand categories.
    Winners {
        /// The minimum number of players.
        #[clap(long, default_value_t = 2, value_parser = value_parser!(u8).range(1..=MAX_PLAYERS as i64))]
        min_players: u8,
        /// The maximum number of players.
        #[clap(long, default_value_t = 9, value_parser = value_parser!(u8).range(1..=MAX_PLAYERS as i64))]
        max_players: u8,
        /// The number of trials for each number of players.
        #[clap(long, short, default_value_t = 10_000, value_parser = value_parser!(u64).range(1..))]
        trials: u64,
    },
    /// Equity chart of all the starting hands.
    Chart {
        /// The number of opponents.
        #[clap(long, short, default_value_t = 1, value_parser = value_parser!(u8).range(1..=MAX_OPPONENTS as i64))]
        opponents: u8,
        /// The number of trials for each hand.
        #[clap(long, short, default_value_t = 10_000, value_parser = value_parser!(u64).range(1..))]
        trials: u64,
    },
    /// How often each starting hand is dealt.
    Pocket {
        /// The number of players.
        #[clap(long, short, default_value_t = 2, value_parser = value_parser!(u8).range(1..=MAX_PLAYERS as i64))]
        players: u8,
        /// The number of trials.
        #[clap(long, short, default_value_t = 10_000, value_parser = value_parser!(u64).range(1..))]
        trials: u64,
        /// The number of most frequent hands to show.
        #[clap(long, default_value_t = 10)]
        top: usize,
    },
}

impl Command {
    fn trials(&self) -> u64 {
        match self {
            Command::Equity { trials, .. }
            | Command::Archetype { trials, .. }
            | Command::Winners { trials, .. }
            | Command::Chart { trials, .. }
            | Command::Pocket { trials, .. } => *trials,
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config {
        trials: cli.command.trials() as usize,
        tasks: cli.tasks as usize,
        seed: cli.seed,
    };

    let sim = Simulator::new(config)?;

    match cli.command {
        Command::Equity {
            hand,
            opponents,
            folding,
            ..
        } => commands::equity(&sim, &hand, opponents as usize, folding as usize),
        Command::Archetype {
            shape,
            opponents,
            folding,
            samples,
            ..
        } => commands::archetype(
            &sim,
            &shape,
            opponents as usize,
            folding as usize,
            samples as usize,
        ),
        Command::Winners {
            min_players,
            max_players,
            ..
        } => commands::winners(&sim, min_players as usize, max_players as usize),
        Command::Chart { opponents, .. } => commands::chart(&sim, opponents as usize),
        Command::Pocket { players, top, .. } => commands::pocket(&sim, players as usize, top),
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_equity_command() {
        let cli = Cli::parse_from(["holdem", "--seed", "3", "equity", "--hand", "AS AH", "-o", "3"]);
        assert_eq!(cli.seed, Some(3));
        assert_eq!(cli.command.trials(), 10_000);
        assert!(matches!(
            cli.command,
            Command::Equity {
                opponents: 3,
                folding: 0,
                ..
            }
        ));
    }

    #[test]
    fn reject_out_of_range() {
        assert!(Cli::try_parse_from(["holdem", "equity", "--hand", "AS AH", "-o", "10"]).is_err());
        assert!(Cli::try_parse_from(["holdem", "chart", "-t", "0"]).is_err());
        assert!(Cli::try_parse_from(["holdem", "pocket", "-p", "11"]).is_err());
    }
}
