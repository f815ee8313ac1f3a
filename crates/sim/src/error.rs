// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Simulation errors.
use thiserror::Error;

use holdem_eval::EvalError;

use crate::{MAX_OPPONENTS, MAX_PLAYERS};

/// Simulation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// A batch must run at least one trial.
    #[error("the number of trials must be greater than zero")]
    NoTrials,
    /// The number of opponents is out of range.
    #[error("invalid number of opponents {0}, must be 1 to {max}", max = MAX_OPPONENTS)]
    InvalidOpponents(usize),
    /// The number of players is out of range.
    #[error("invalid number of players {0}, must be 1 to {max}", max = MAX_PLAYERS)]
    InvalidPlayers(usize),
    /// A parallel batch must run at least one task.
    #[error("the number of tasks must be greater than zero")]
    NoTasks,
    /// Hand evaluation error.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

pub(crate) fn check_opponents(n_opponents: usize) -> Result<(), SimError> {
    if (1..=MAX_OPPONENTS).contains(&n_opponents) {
        Ok(())
    } else {
        Err(SimError::InvalidOpponents(n_opponents))
    }
}

pub(crate) fn check_players(n_players: usize) -> Result<(), SimError> {
    if (1..=MAX_PLAYERS).contains(&n_players) {
        Ok(())
    } else {
        Err(SimError::InvalidPlayers(n_players))
    }
}

pub(crate) fn check_trials(n_trials: usize) -> Result<(), SimError> {
    if n_trials > 0 {
        Ok(())
    } else {
        Err(SimError::NoTrials)
    }
}
