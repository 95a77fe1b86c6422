//! `croft-sim` — the tick driver.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`sim`]      | `Sim` and the per-agent tick loop                     |
//! | [`collide`]  | `ColliderIndex` (R-tree) and edge-snap resolution     |
//! | [`builder`]  | `SimBuilder` with fail-fast startup validation        |
//! | [`observer`] | `SimObserver`, `AgentEvent`, `NoopObserver`           |
//! | [`error`]    | `SimError`, `SimResult<T>`                            |
//!
//! # Concurrency model
//!
//! Single-threaded, cooperative, tick-driven.  Tree evaluation and path
//! search run to completion inside one agent's update; iteration over agents
//! is in ascending `AgentId` order, so a tick's sequence of operations is
//! deterministic for a given seed.  One agent's failures (unreachable
//! targets, collisions, invalid interactions) never touch another agent's
//! state or scheduling.

pub mod builder;
pub mod collide;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use collide::{ColliderId, ColliderIndex};
pub use error::{SimError, SimResult};
pub use observer::{AgentEvent, NoopObserver, SimObserver};
pub use sim::Sim;
