//! The `FollowerStore` — one `PathFollower` per agent.

use croft_core::AgentId;

use crate::PathFollower;

/// Holds every agent's follower, indexed by `AgentId` in parallel with the
/// agent store's SoA arrays.
#[derive(Default)]
pub struct FollowerStore {
    followers: Vec<PathFollower>,
}

impl FollowerStore {
    /// Build from per-agent completion-dwell ranges (one entry per agent, in
    /// `AgentId` order — usually derived from each agent's species profile).
    pub fn from_dwell_ranges(ranges: Vec<(f32, f32)>) -> Self {
        Self {
            followers: ranges.into_iter().map(PathFollower::new).collect(),
        }
    }

    /// `count` followers with the default dwell range.
    pub fn with_count(count: usize) -> Self {
        Self {
            followers: (0..count).map(|_| PathFollower::default()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.followers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.followers.is_empty()
    }

    #[inline]
    pub fn get(&self, agent: AgentId) -> &PathFollower {
        &self.followers[agent.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut PathFollower {
        &mut self.followers[agent.index()]
    }
}
