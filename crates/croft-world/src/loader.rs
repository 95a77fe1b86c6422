//! CSV loaders for room collision data and farm plot layouts.
//!
//! # Room CSV format
//!
//! Headerless matrix of `0`/`1` cells, one row per tile row, `1` = blocked:
//!
//! ```csv
//! 1,1,1,1,1
//! 1,0,0,0,1
//! 1,0,0,0,1
//! 1,1,1,1,1
//! ```
//!
//! All rows must share the same width; a ragged row is a parse error (the
//! grid invariant is rectangularity).
//!
//! # Plot CSV format
//!
//! One row per farm tile, with headers:
//!
//! ```csv
//! x,y,state
//! 3,4,wild
//! 4,4,hoed
//! 5,4,planted
//! 6,4,watered
//! ```
//!
//! `state` is cumulative — `watered` implies `planted`, `planted` implies
//! `hoed`.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use croft_core::TileCoord;

use crate::tiles::{FarmTile, TileRegistry};
use crate::{RoomMap, WorldError, WorldResult};

// ── Room loader ───────────────────────────────────────────────────────────────

/// Load a [`RoomMap`] from a CSV file.
pub fn load_room_csv(path: &Path) -> WorldResult<RoomMap> {
    let file = std::fs::File::open(path).map_err(WorldError::Io)?;
    load_room_reader(file)
}

/// Like [`load_room_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded room data.
pub fn load_room_reader<R: Read>(reader: R) -> WorldResult<RoomMap> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(reader);

    let mut width = 0usize;
    let mut blocked: Vec<bool> = Vec::new();
    let mut rows = 0usize;

    for (row, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| WorldError::Parse(e.to_string()))?;
        if row == 0 {
            width = record.len();
        } else if record.len() != width {
            return Err(WorldError::Parse(format!(
                "row {row} has {} cells, expected {width}",
                record.len()
            )));
        }
        for (col, cell) in record.iter().enumerate() {
            blocked.push(parse_cell(cell, row, col)?);
        }
        rows += 1;
    }

    Ok(RoomMap {
        width,
        height: rows,
        blocked,
    })
}

fn parse_cell(cell: &str, row: usize, col: usize) -> WorldResult<bool> {
    match cell.trim() {
        "0" => Ok(false),
        "1" => Ok(true),
        other => Err(WorldError::Parse(format!(
            "invalid cell {other:?} at row {row}, col {col}: expected 0 or 1"
        ))),
    }
}

// ── Plot loader ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PlotRecord {
    x: i32,
    y: i32,
    state: String,
}

/// Load a [`TileRegistry`] from a CSV file.
pub fn load_plots_csv(path: &Path) -> WorldResult<TileRegistry> {
    let file = std::fs::File::open(path).map_err(WorldError::Io)?;
    load_plots_reader(file)
}

/// Like [`load_plots_csv`] but accepts any `Read` source.
pub fn load_plots_reader<R: Read>(reader: R) -> WorldResult<TileRegistry> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut registry = TileRegistry::new();

    for result in csv_reader.deserialize::<PlotRecord>() {
        let row = result.map_err(|e| WorldError::Parse(e.to_string()))?;
        let coord = TileCoord::new(row.x, row.y);
        registry.insert(parse_state(coord, &row.state)?)?;
    }

    Ok(registry)
}

fn parse_state(coord: TileCoord, state: &str) -> WorldResult<FarmTile> {
    let mut tile = FarmTile::wild(coord);
    match state.trim() {
        "wild" => {}
        "hoed" => {
            tile.hoed = true;
        }
        "planted" => {
            tile.hoed = true;
            tile.planted = true;
        }
        "watered" => {
            tile.hoed = true;
            tile.planted = true;
            tile.watered = true;
        }
        other => {
            return Err(WorldError::Parse(format!(
                "invalid plot state {other:?} at {coord}: expected wild, hoed, planted, or watered"
            )));
        }
    }
    Ok(tile)
}
