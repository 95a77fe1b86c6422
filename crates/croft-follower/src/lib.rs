//! `croft-follower` — the per-agent path-following state machine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`state`]    | `PathState`, `PathGoal`, `Body`, dwell constants    |
//! | [`follower`] | `PathFollower` — request, follow, abort, complete   |
//! | [`store`]    | `FollowerStore` — one follower per agent            |
//!
//! # State machine
//!
//! ```text
//! Idle --(dwell expires, tree run, path created)--> Moving
//! Moving --(path exhausted)--------> Idle(randomized dwell)
//! Moving --(collision / invalid start / external cancel)--> Idle(short dwell)
//! ```
//!
//! The follower owns no world state: the driver hands it a [`Body`] view of
//! the acting agent's kinematics each update, and terminal transitions stage
//! [`FollowUp`][croft_behavior::FollowUp] commands in an outbox the driver
//! drains.  Exactly one of the two registered queues ever fires per path.

pub mod follower;
pub mod state;
pub mod store;


pub use follower::PathFollower;
pub use state::{Body, PathGoal, PathState, ABORT_DWELL_SECS};
pub use store::FollowerStore;
