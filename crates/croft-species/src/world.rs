//! The `FarmWorld` aggregate — everything a behavior tree can touch.

use croft_agent::AgentStore;
use croft_behavior::Context;
use croft_core::{AgentId, Rect, TileCoord, Vec2};
use croft_follower::FollowerStore;
use croft_grid::GridManager;
use croft_world::TileRegistry;

use crate::SpeciesProfiles;

/// Kinematic reference for the player — the distinguished threat agent.
///
/// The core never moves the player; the application writes `position` from
/// its input handling and the core reads it for flee distance checks,
/// occupancy exclusion, and collision.
#[derive(Clone, Debug)]
pub struct PlayerRef {
    pub position: Vec2,
    pub half_extents: Vec2,
}

impl PlayerRef {
    pub fn hitbox(&self) -> Rect {
        Rect::from_center(self.position, self.half_extents)
    }
}

/// The concrete world type species trees evaluate against.
///
/// Owns the grid manager, the farm registry, the kinematic agent store, and
/// the follower store; the simulation driver holds this plus the tree
/// registry and per-agent RNGs.  Fields are `pub`: tree leaves and the
/// driver take disjoint field borrows rather than going through accessors.
pub struct FarmWorld {
    pub grid: GridManager,
    pub farm: TileRegistry,
    pub agents: AgentStore,
    pub followers: FollowerStore,
    pub player: Option<PlayerRef>,
    pub profiles: SpeciesProfiles,
}

impl FarmWorld {
    pub fn new(
        grid: GridManager,
        farm: TileRegistry,
        agents: AgentStore,
        followers: FollowerStore,
        profiles: SpeciesProfiles,
    ) -> Self {
        Self {
            grid,
            farm,
            agents,
            followers,
            player: None,
            profiles,
        }
    }

    /// The threat reference position, when a player is present.
    #[inline]
    pub fn threat_position(&self) -> Option<Vec2> {
        self.player.as_ref().map(|p| p.position)
    }

    /// Evaluation context for one agent.
    #[inline]
    pub fn context_for(&self, agent: AgentId) -> Context {
        Context::with_threat(agent, self.threat_position())
    }

    /// Tiles currently occupied by every *other* collidable agent, plus the
    /// player's full hitbox footprint.
    ///
    /// This is the exclusion set for `agent`'s path searches: occupied tiles
    /// are hidden from the search without ever touching the permanent
    /// obstacle data.
    pub fn occupied_tiles_except(&self, agent: AgentId) -> Vec<TileCoord> {
        let mut occupied = Vec::with_capacity(self.agents.count + 4);

        for other in self.agents.agent_ids() {
            if other == agent || !self.agents.collidable[other.index()] {
                continue;
            }
            occupied.extend(self.agents.hitbox(other).tiles());
        }

        if let Some(player) = &self.player {
            occupied.extend(player.hitbox().tiles());
        }

        occupied
    }
}
