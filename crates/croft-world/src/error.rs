//! World-subsystem error type.

use thiserror::Error;

use croft_core::TileCoord;

use crate::Interaction;

/// Errors produced by `croft-world`.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("tile {0} is not in the registry")]
    UnknownTile(TileCoord),

    #[error("tile {0} registered twice")]
    DuplicatePlot(TileCoord),

    #[error("cannot {interaction} tile {at} in its current state")]
    InvalidInteraction {
        interaction: Interaction,
        at: TileCoord,
    },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type WorldResult<T> = Result<T, WorldError>;
