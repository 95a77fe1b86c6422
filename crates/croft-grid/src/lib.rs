//! `croft-grid` — shared walkability grid and bounded tile path search.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`grid`]   | `WalkGrid`, `GridManager`, `ExclusionScope`                  |
//! | [`search`] | `SearchConfig`, `DiagonalPolicy`, bounded A*                 |
//! | [`error`]  | `GridError`, `GridResult<T>`                                 |
//!
//! # Shared-state discipline
//!
//! The walkability grid is process-wide shared state: it must always reflect
//! the static map's permanent obstacles, yet a path query for one agent must
//! be able to treat tiles occupied by *other* agents (and the player's
//! footprint) as blocked.  The only sanctioned mutation path for that is
//! [`GridManager::exclusion_scope`], an RAII guard that saves the affected
//! cells, marks them blocked, and restores the exact prior values when it is
//! dropped — on every exit path, panics included.

pub mod error;
pub mod grid;
pub mod search;


pub use error::{GridError, GridResult};
pub use grid::{ExclusionScope, GridManager, WalkGrid};
pub use search::{DiagonalPolicy, SearchConfig};
