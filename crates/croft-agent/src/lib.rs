//! `croft-agent` — kinematic agent storage.
//!
//! # Crate layout
//!
//! | Module      | Contents                                        |
//! |-------------|-------------------------------------------------|
//! | [`store`]   | `AgentStore` (SoA kinematics), `AgentRngs`      |
//! | [`builder`] | `SpawnSpec`, `AgentStoreBuilder`                |
//!
//! The store owns only what the decision-and-movement core needs from the
//! rendering layer's kinematic primitives: position, hitbox half-extents,
//! facing, speed.  Sprite/animation state stays with the renderer.

pub mod builder;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::{AgentStoreBuilder, SpawnSpec};
pub use store::{AgentRngs, AgentStore};
