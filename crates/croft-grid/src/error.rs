//! Grid-subsystem error type.

use thiserror::Error;

use croft_core::SpeciesId;

/// Errors produced by `croft-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid dimensions {width}x{height} do not match {cells} cells")]
    DimensionMismatch {
        width: usize,
        height: usize,
        cells: usize,
    },

    #[error("no search configuration registered for species {0}")]
    UnknownSpecies(SpeciesId),
}

pub type GridResult<T> = Result<T, GridError>;
