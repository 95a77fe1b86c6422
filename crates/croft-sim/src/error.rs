//! Simulation-level error type.

use thiserror::Error;

use croft_behavior::BehaviorError;
use croft_core::CroftError;
use croft_grid::GridError;

/// Errors produced while building or running a [`Sim`][crate::Sim].
#[derive(Debug, Error)]
pub enum SimError {
    #[error("expected {expected} {what}, got {got}")]
    AgentCountMismatch {
        expected: usize,
        got: usize,
        what: &'static str,
    },

    #[error(transparent)]
    Behavior(#[from] BehaviorError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Core(#[from] CroftError),
}

pub type SimResult<T> = Result<T, SimError>;
