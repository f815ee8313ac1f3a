// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Simulation batches configuration.
use log::info;
use rand::prelude::*;

use holdem_cards::{Archetype, HoleCards};

use crate::{CategoryDistribution, EquityStats, PocketFrequency, SimError, error::check_trials};

/// Simulation batches configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of trials for each batch.
    pub trials: usize,
    /// Number of parallel tasks, used only with the `parallel` feature.
    pub tasks: usize,
    /// The rng seed, a random seed is used if not set.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trials: 10_000,
            tasks: 1,
            seed: None,
        }
    }
}

impl Config {
    /// Checks the configuration values.
    pub fn validate(&self) -> Result<(), SimError> {
        check_trials(self.trials)?;
        if self.tasks == 0 {
            return Err(SimError::NoTasks);
        }

        Ok(())
    }
}

/// Runs simulation batches with a given configuration.
///
/// Every batch starts from the configured seed, so the same batch with the
/// same configuration always gives the same result.
#[derive(Debug, Clone)]
pub struct Simulator {
    config: Config,
    seed: u64,
}

impl Simulator {
    /// Creates a new simulator.
    pub fn new(config: Config) -> Result<Self, SimError> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        info!(
            "Simulator seed {seed}, {} trials, {} tasks",
            config.trials, config.tasks
        );

        Ok(Self { config, seed })
    }

    /// The seed used for the batches.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The simulator configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Hero equity against `n_opponents` with up to `n_folding` folding players.
    pub fn equity(
        &self,
        hero: HoleCards,
        n_opponents: usize,
        n_folding: usize,
    ) -> Result<EquityStats, SimError> {
        self.equity_with_seed(hero, n_opponents, n_folding, self.seed)
    }

    /// Equity of `samples` hands sampled with the archetype shape, the counters
    /// of all the sampled hands are added together.
    ///
    /// Returns [SimError::NoTrials] if `samples` is zero.
    pub fn archetype_equity(
        &self,
        archetype: Archetype,
        n_opponents: usize,
        n_folding: usize,
        samples: usize,
    ) -> Result<EquityStats, SimError> {
        check_trials(samples)?;

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut stats = EquityStats::default();

        for _ in 0..samples {
            let hero = archetype.sample(&mut rng);
            stats += self.equity_with_seed(hero, n_opponents, n_folding, rng.random())?;
        }

        Ok(stats)
    }

    /// Distribution of the winning hand categories for `n_players`.
    pub fn winning_categories(&self, n_players: usize) -> Result<CategoryDistribution, SimError> {
        #[cfg(feature = "parallel")]
        {
            if self.config.tasks > 1 {
                return crate::parallel::par_simulate_winning_category(
                    n_players,
                    self.config.trials,
                    self.config.tasks,
                    self.seed,
                );
            }
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        crate::simulate_winning_category(n_players, self.config.trials, &mut rng)
    }

    /// Hole cards frequency for `n_players`.
    pub fn pocket_frequency(&self, n_players: usize) -> Result<PocketFrequency, SimError> {
        #[cfg(feature = "parallel")]
        {
            if self.config.tasks > 1 {
                return crate::parallel::par_simulate_pocket_frequency(
                    n_players,
                    self.config.trials,
                    self.config.tasks,
                    self.seed,
                );
            }
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        crate::simulate_pocket_frequency(n_players, self.config.trials, &mut rng)
    }

    fn equity_with_seed(
        &self,
        hero: HoleCards,
        n_opponents: usize,
        n_folding: usize,
        seed: u64,
    ) -> Result<EquityStats, SimError> {
        #[cfg(feature = "parallel")]
        {
            if self.config.tasks > 1 {
                return crate::parallel::par_simulate_equity_stats(
                    hero,
                    n_opponents,
                    self.config.trials,
                    n_folding,
                    self.config.tasks,
                    seed,
                );
            }
        }

        let mut rng = StdRng::seed_from_u64(seed);
        crate::simulate_equity_stats(hero, n_opponents, self.config.trials, n_folding, &mut rng)
    }
}
