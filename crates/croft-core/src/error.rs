//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `CroftError` via `From` impls or stay separate; prefer whichever keeps
//! error sites clean.

use thiserror::Error;

use crate::{AgentId, SpeciesId, TreeKey};

/// The top-level error type for `croft-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CroftError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("no profile registered for species {0}")]
    SpeciesNotFound(SpeciesId),

    #[error("no behavior tree registered for {0}")]
    TreeNotFound(TreeKey),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `croft-*` crates.
pub type CroftResult<T> = Result<T, CroftError>;
