// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel simulation batches.
//!
//! A batch is split across `num_tasks` scoped threads, each task plays its
//! share of the trials with its own rng seeded with `seed + task_id`, and the
//! per task counters are added together once all tasks complete. Results are
//! reproducible for the same seed, number of tasks, and number of trials.
use log::debug;
use rand::prelude::*;
use std::{panic, thread};

use holdem_cards::HoleCards;

use crate::{
    CategoryDistribution, EquityStats, PocketFrequency, SimError,
    error::check_trials,
    simulate::{simulate_equity_stats, simulate_pocket_frequency, simulate_winning_category},
};

/// Number of trials for a task, the first `n_trials % num_tasks` tasks play
/// one more trial.
fn task_trials(n_trials: usize, num_tasks: usize, task_id: usize) -> usize {
    n_trials / num_tasks + usize::from(task_id < n_trials % num_tasks)
}

/// Runs `f` from `num_tasks` parallel tasks, passing each task its rng and
/// number of trials, and returns the tasks results.
fn par_run<T, F>(num_tasks: usize, n_trials: usize, seed: u64, f: F) -> Result<Vec<T>, SimError>
where
    T: Send,
    F: Fn(&mut SmallRng, usize) -> Result<T, SimError> + Send + Sync,
{
    if num_tasks == 0 {
        return Err(SimError::NoTasks);
    }

    check_trials(n_trials)?;

    // Never start a task without trials.
    let num_tasks = num_tasks.min(n_trials);
    debug!("Running {n_trials} trials on {num_tasks} tasks with seed {seed}");

    thread::scope(|s| {
        let handles = (0..num_tasks)
            .map(|task_id| {
                let f = &f;
                s.spawn(move || {
                    let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(task_id as u64));
                    f(&mut rng, task_trials(n_trials, num_tasks, task_id))
                })
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| panic::resume_unwind(e)))
            .collect()
    })
}

/// Parallel version of [simulate_equity_stats](crate::simulate_equity_stats).
pub fn par_simulate_equity_stats(
    hero: HoleCards,
    n_opponents: usize,
    n_trials: usize,
    n_folding: usize,
    num_tasks: usize,
    seed: u64,
) -> Result<EquityStats, SimError> {
    let stats = par_run(num_tasks, n_trials, seed, |rng, trials| {
        simulate_equity_stats(hero, n_opponents, trials, n_folding, rng)
    })?;

    Ok(stats.into_iter().sum())
}

/// Parallel version of [simulate_winning_category](crate::simulate_winning_category).
pub fn par_simulate_winning_category(
    n_players: usize,
    n_trials: usize,
    num_tasks: usize,
    seed: u64,
) -> Result<CategoryDistribution, SimError> {
    let dists = par_run(num_tasks, n_trials, seed, |rng, trials| {
        simulate_winning_category(n_players, trials, rng)
    })?;

    Ok(dists.into_iter().sum())
}

/// Parallel version of [simulate_pocket_frequency](crate::simulate_pocket_frequency).
pub fn par_simulate_pocket_frequency(
    n_players: usize,
    n_trials: usize,
    num_tasks: usize,
    seed: u64,
) -> Result<PocketFrequency, SimError> {
    let freqs = par_run(num_tasks, n_trials, seed, |rng, trials| {
        simulate_pocket_frequency(n_players, trials, rng)
    })?;

    Ok(freqs.into_iter().sum())
}
