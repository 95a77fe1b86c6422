//! `croft-behavior` — the behavior-tree engine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`tree`]     | `Node<W>` composites and leaves, synchronous evaluation    |
//! | [`context`]  | `Context` — transient per-evaluation handle                |
//! | [`followup`] | `FollowUp` — one-shot path-terminal commands               |
//! | [`registry`] | `TreeRegistry<W>` — `(species, mode) → Arc<Node<W>>`       |
//! | [`error`]    | `BehaviorError`, `BehaviorResult<T>`                       |
//!
//! # Design notes
//!
//! Trees are generic over an opaque world type `W` and are built once per
//! `(species, mode)` at startup.  A `Node<W>` is never mutated after
//! construction — leaf callbacks are `Fn + Send + Sync` — so one `Arc`'d tree
//! instance drives every agent of its species.  Evaluation is fully
//! synchronous and completes within the calling tick; there are no
//! suspension points.

pub mod context;
pub mod error;
pub mod followup;
pub mod registry;
pub mod tree;

#[cfg(test)]
mod tests;

pub use context::Context;
pub use error::{BehaviorError, BehaviorResult};
pub use followup::FollowUp;
pub use registry::TreeRegistry;
pub use tree::Node;
