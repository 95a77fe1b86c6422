//! Follow-up commands — the one-shot continuations a path can end with.
//!
//! Behavior trees chain "after arriving, do X" by registering follow-ups on
//! the path follower; the follower knows nothing about their meaning and the
//! driver executes whichever terminal queue fires.  Commands rather than
//! boxed callables keep the follower free of world borrows while preserving
//! the fires-at-most-once-then-cleared contract.

use croft_core::TileCoord;
use croft_world::Interaction;

/// A deferred command executed when a path reaches a terminal transition.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FollowUp {
    /// Re-orient the agent toward a tile (e.g., the farm plot it walked to).
    Face(TileCoord),

    /// Invoke a registry interaction on the target tile.
    Interact {
        target: TileCoord,
        kind: Interaction,
    },

    /// Clear the fleeing flag and restore normal speed.
    EndFlee,
}
