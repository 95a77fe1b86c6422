//! The `PathFollower` — one agent's path request/follow/terminate machinery.

use std::collections::VecDeque;
use std::mem;

use croft_behavior::FollowUp;
use croft_core::{AgentRng, Facing, TileCoord, Vec2};
use croft_grid::{GridManager, SearchConfig};

use crate::state::{Body, PathGoal, PathState, ABORT_DWELL_SECS, WAYPOINT_EPS};

/// Per-agent path-following state machine.
///
/// Owned by a [`FollowerStore`][crate::FollowerStore] entry per agent and
/// driven by the simulation loop.  See the crate docs for the state diagram.
pub struct PathFollower {
    state: PathState,
    /// Tile-center waypoints; front is the next one.  Non-empty whenever the
    /// state is `Moving`, except transiently while completion runs.
    path: VecDeque<Vec2>,
    /// Axis-aligned unit direction for rendering; zero while idle.
    direction: Vec2,
    /// Dwell range (secs) drawn from after a completed path.
    complete_dwell: (f32, f32),

    on_completion: Vec<FollowUp>,
    on_abortion: Vec<FollowUp>,
    /// Terminal queue staged for the driver; drained by
    /// [`take_fired`][Self::take_fired].
    fired: Vec<FollowUp>,
}

impl Default for PathFollower {
    fn default() -> Self {
        Self::new((1.0, 3.0))
    }
}

impl PathFollower {
    /// A fresh idle follower with the given completion-dwell range.
    ///
    /// The initial dwell is zero, so the behavior tree runs on the agent's
    /// first update.
    pub fn new(complete_dwell: (f32, f32)) -> Self {
        Self {
            state: PathState::Idle { dwell_secs: 0.0 },
            path: VecDeque::new(),
            direction: Vec2::ZERO,
            complete_dwell,
            on_completion: Vec::new(),
            on_abortion: Vec::new(),
            fired: Vec::new(),
        }
    }

    // ── State inspection ──────────────────────────────────────────────────

    #[inline]
    pub fn state(&self) -> &PathState {
        &self.state
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self.state, PathState::Idle { .. })
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        matches!(self.state, PathState::Moving)
    }

    /// Render direction hint: an axis-aligned unit vector while walking,
    /// zero after an abort.
    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    #[inline]
    pub fn path_len(&self) -> usize {
        self.path.len()
    }

    /// Remaining waypoints, next first.
    pub fn waypoints(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.path.iter().copied()
    }

    /// The path's final waypoint, if any.
    pub fn last_waypoint(&self) -> Option<Vec2> {
        self.path.back().copied()
    }

    // ── Subscriptions ─────────────────────────────────────────────────────

    /// Register a follow-up for the current path's completion.  Cleared —
    /// fired or not — at the next terminal transition.
    pub fn on_path_completion(&mut self, follow_up: FollowUp) {
        self.on_completion.push(follow_up);
    }

    /// Register a follow-up for the current path's abortion.
    pub fn on_path_abortion(&mut self, follow_up: FollowUp) {
        self.on_abortion.push(follow_up);
    }

    /// Drain whichever terminal queue fired since the last call.
    pub fn take_fired(&mut self) -> Vec<FollowUp> {
        mem::take(&mut self.fired)
    }

    // ── Path requests ─────────────────────────────────────────────────────

    /// Request a path from the agent's pixel position to `target`.
    ///
    /// Fails immediately — no state change — when `target` is not walkable.
    /// A start tile outside the grid (an agent shoved past a map edge)
    /// aborts the current path and fails.  Otherwise the search runs inside
    /// an exclusion scope over `exclude` (tiles occupied by other agents and
    /// the player's footprint), using the species' shared `config`.
    ///
    /// A first waypoint equal to the start tile is dropped so the walk has no
    /// zero-length first leg (which would show as a spurious turn).  With
    /// [`PathGoal::Adjacent`] the final node is dropped too, stopping the
    /// agent within interaction range of the target instead of on it.  An
    /// empty search result aborts and returns `false`; success stores the
    /// path, enters `Moving` (dwell implicitly zero), and returns `true`.
    pub fn create_path_to_tile(
        &mut self,
        start_px: Vec2,
        grid: &mut GridManager,
        config: &SearchConfig,
        target: TileCoord,
        exclude: &[TileCoord],
        goal: PathGoal,
    ) -> bool {
        if !grid.walkable(target) {
            return false;
        }

        let start_tile = start_px.tile();
        if !grid.in_bounds(start_tile) {
            self.abort_path();
            return false;
        }

        grid.cleanup();
        let found = {
            let mut scope = grid.exclusion_scope(exclude);
            scope.find_path(start_tile, target, config)
        };
        let Some(mut tiles) = found else {
            self.abort_path();
            return false;
        };

        if tiles.first() == Some(&start_tile) {
            tiles.remove(0);
        }
        if goal == PathGoal::Adjacent {
            tiles.pop();
        }

        if tiles.is_empty() {
            if goal == PathGoal::OnTile {
                self.abort_path();
                return false;
            }
            // Already adjacent to the target: keep a single waypoint at the
            // agent's own tile center so completion still flows through
            // update_moving after the caller registers its follow-ups.
            tiles.push(start_tile);
        }

        self.path = tiles.into_iter().map(TileCoord::center).collect();
        self.state = PathState::Moving;
        true
    }

    // ── Per-tick updates ──────────────────────────────────────────────────

    /// Idle housekeeping: burn `dt` off the dwell counter.
    ///
    /// Returns `true` when the dwell has expired — the driver's cue to invoke
    /// the species' exit-idle hook (normally: run the behavior tree).  `false`
    /// while still dwelling or not idle.
    pub fn update_idle(&mut self, dt: f32) -> bool {
        match &mut self.state {
            PathState::Idle { dwell_secs } => {
                *dwell_secs -= dt;
                *dwell_secs <= 0.0
            }
            PathState::Moving => false,
        }
    }

    /// Advance along the path with a movement budget of `speed * dt`.
    ///
    /// Waypoints are popped as they are reached; when the path empties the
    /// follower completes (returns `true`, exactly once per path).  A partial
    /// step rounds the stored direction to the dominant axis so rendering
    /// does not flicker between facings on diagonally biased legs.
    pub fn update_moving(&mut self, dt: f32, body: Body<'_>, rng: &mut AgentRng) -> bool {
        if !self.is_moving() {
            return false;
        }

        let mut budget = body.speed * dt;
        loop {
            let Some(&waypoint) = self.path.front() else {
                self.complete_path(rng);
                return true;
            };

            let delta = waypoint - *body.position;
            let dist = delta.length();

            if dist <= WAYPOINT_EPS {
                self.path.pop_front();
                continue;
            }

            if budget >= dist {
                *body.position = waypoint;
                budget -= dist;
                self.path.pop_front();
                continue;
            }

            let dir = delta * (1.0 / dist);
            *body.position += dir * budget;
            self.direction = dir.dominant_axis();
            *body.facing = Facing::from_vec(self.direction);
            return false;
        }
    }

    // ── Terminal transitions ──────────────────────────────────────────────

    /// Involuntary termination: post-move collision, invalid start tile, or
    /// an external cancellation.
    ///
    /// Enters `Idle` with the short fixed dwell, clears the direction, stages
    /// the abortion queue for the driver, and discards the completion queue
    /// unfired.  Safe to call with no active path: both queues are already
    /// empty and the dwell is simply reset.
    pub fn abort_path(&mut self) {
        self.state = PathState::Idle {
            dwell_secs: ABORT_DWELL_SECS,
        };
        self.path.clear();
        self.direction = Vec2::ZERO;

        let aborted = mem::take(&mut self.on_abortion);
        self.on_completion.clear();
        self.fired.extend(aborted);
    }

    /// Natural termination: the path emptied without collision.
    ///
    /// Enters `Idle` with a dwell drawn from the follower's completion range,
    /// stages the completion queue, and discards the abortion queue unfired.
    pub fn complete_path(&mut self, rng: &mut AgentRng) {
        let (lo, hi) = self.complete_dwell;
        let dwell_secs = if hi > lo { rng.gen_range(lo..hi) } else { lo };
        self.state = PathState::Idle { dwell_secs };
        self.path.clear();

        let completed = mem::take(&mut self.on_completion);
        self.on_abortion.clear();
        self.fired.extend(completed);
    }

    #[cfg(test)]
    pub(crate) fn pending_queue_lens(&self) -> (usize, usize) {
        (self.on_completion.len(), self.on_abortion.len())
    }
}
