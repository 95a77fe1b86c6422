//! Follower state types and the kinematic capability view.

use croft_core::{Facing, Vec2};

/// Dwell applied after an involuntary interruption (collision, invalid
/// start, external cancel).  Short and fixed, so an interrupted agent
/// re-plans quickly — visibly distinct from the longer randomized pause
/// after a completed walk.
pub const ABORT_DWELL_SECS: f32 = 0.4;

/// How close (px) counts as having reached a waypoint.
pub(crate) const WAYPOINT_EPS: f32 = 0.5;

/// The two follower states.
#[derive(Clone, Debug, PartialEq)]
pub enum PathState {
    /// Counting down until the behavior tree runs again.
    Idle { dwell_secs: f32 },
    /// Following the stored waypoint path.
    Moving,
}

/// Where a requested path should stop relative to the target tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PathGoal {
    /// Walk onto the target tile.
    OnTile,
    /// Stop one waypoint short — within interaction range of the target
    /// rather than on top of it.
    Adjacent,
}

/// The slice of an agent's kinematic state the follower drives.
///
/// An explicit capability view rather than a whole-agent borrow: the follower
/// needs nothing else, and the driver can hand out disjoint field borrows of
/// its SoA store.
pub struct Body<'a> {
    /// Pixel position (hitbox center), advanced along the path.
    pub position: &'a mut Vec2,
    /// Render facing, updated from the axis-rounded direction.
    pub facing: &'a mut Facing,
    /// Effective speed in px/s (base speed × any boost).
    pub speed: f32,
}
