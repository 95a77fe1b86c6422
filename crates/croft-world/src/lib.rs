//! `croft-world` — the farm tile registry and room data loading.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`tiles`]  | `FarmTile`, `TileRegistry`, `Interaction`                 |
//! | [`room`]   | `RoomMap` — static collision matrix for a room            |
//! | [`loader`] | CSV loaders for room collision data and plot layouts      |
//! | [`error`]  | `WorldError`, `WorldResult<T>`                            |
//!
//! The behavior layer only *reads* the registry (candidate scans) and invokes
//! the side-effecting interactions (`hoe`/`plant`/`water`) owned here; it
//! never mutates tile flags directly.
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | FxHash for the coord → plot index (integer-keyed, hot).  |

pub mod error;
pub mod loader;
pub mod room;
pub mod tiles;


pub use error::{WorldError, WorldResult};
pub use loader::{load_plots_csv, load_plots_reader, load_room_csv, load_room_reader};
pub use room::RoomMap;
pub use tiles::{FarmTile, Interaction, TileRegistry};
