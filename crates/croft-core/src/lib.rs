//! `croft-core` — foundational types for the croft autonomous-agent core.
//!
//! This crate is a dependency of every other `croft-*` crate.  It
//! intentionally has no `croft-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`ids`]     | `AgentId`, `SpeciesId`, `PlotId`                        |
//! | [`mode`]    | `BehaviorMode`, `TreeKey`                               |
//! | [`space`]   | `Vec2`, `TileCoord`, `Rect`, `Facing`, tile conversions |
//! | [`time`]    | `Tick`, `TickClock`, `SimConfig`                        |
//! | [`rng`]     | `AgentRng` (per-agent), `SimRng` (global)               |
//! | [`error`]   | `CroftError`, `CroftResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod mode;
pub mod rng;
pub mod space;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CroftError, CroftResult};
pub use ids::{AgentId, PlotId, SpeciesId};
pub use mode::{BehaviorMode, TreeKey};
pub use rng::{AgentRng, SimRng};
pub use space::{Facing, Rect, TileCoord, Vec2, TILE_SIZE};
pub use time::{SimConfig, Tick, TickClock};
