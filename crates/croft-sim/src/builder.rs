//! Fluent builder for constructing a [`Sim`].

use croft_agent::{AgentRngs, AgentStore};
use croft_behavior::TreeRegistry;
use croft_core::SimConfig;
use croft_follower::FollowerStore;
use croft_grid::GridManager;
use croft_species::{FarmWorld, PlayerRef, SpeciesProfiles};
use croft_world::TileRegistry;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — seed, timestep, total ticks
/// - [`GridManager`] — with a search config registered per species
/// - [`AgentStore`] + [`AgentRngs`] — from [`croft_agent::AgentStoreBuilder`]
/// - [`TreeRegistry`] — every assigned `(species, mode)` tree
/// - [`SpeciesProfiles`] — one profile per spawned species
///
/// # Optional inputs
///
/// | Method       | Default                 |
/// |--------------|-------------------------|
/// | `.farm(reg)` | empty `TileRegistry`    |
/// | `.player(p)` | no player present       |
///
/// # Fail-fast validation
///
/// `build()` rejects a missing species profile, a species without a search
/// config, and any agent whose assigned tree key does not resolve — all
/// programming errors that must surface at startup, not mid-tick.
pub struct SimBuilder {
    config: SimConfig,
    grid: GridManager,
    agents: AgentStore,
    rngs: AgentRngs,
    registry: TreeRegistry<FarmWorld>,
    profiles: SpeciesProfiles,
    farm: Option<TileRegistry>,
    player: Option<PlayerRef>,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(
        config: SimConfig,
        grid: GridManager,
        agents: AgentStore,
        rngs: AgentRngs,
        registry: TreeRegistry<FarmWorld>,
        profiles: SpeciesProfiles,
    ) -> Self {
        Self {
            config,
            grid,
            agents,
            rngs,
            registry,
            profiles,
            farm: None,
            player: None,
        }
    }

    /// Supply the farm tile registry.  Without one, farm-work trees find no
    /// candidates and fall through to wandering.
    pub fn farm(mut self, farm: TileRegistry) -> Self {
        self.farm = Some(farm);
        self
    }

    /// Place the player (threat reference) at startup.
    pub fn player(mut self, player: PlayerRef) -> Self {
        self.player = Some(player);
        self
    }

    /// Validate inputs, build the follower store, and return a ready-to-run
    /// [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        let agent_count = self.agents.count;

        if self.rngs.len() != agent_count {
            return Err(SimError::AgentCountMismatch {
                expected: agent_count,
                got: self.rngs.len(),
                what: "agent RNGs",
            });
        }

        // ── Fail fast on incomplete species wiring ────────────────────────
        let mut dwell_ranges = Vec::with_capacity(agent_count);
        for agent in self.agents.agent_ids() {
            let species = self.agents.species[agent.index()];
            let profile = self.profiles.require(species)?;
            self.grid.config_for(species)?;
            dwell_ranges.push(profile.complete_dwell);
        }
        self.registry.validate(self.agents.tree.iter().copied())?;

        let followers = FollowerStore::from_dwell_ranges(dwell_ranges);

        let mut world = FarmWorld::new(
            self.grid,
            self.farm.unwrap_or_default(),
            self.agents,
            followers,
            self.profiles,
        );
        world.player = self.player;

        Ok(Sim {
            clock: self.config.make_clock(),
            config: self.config,
            world,
            registry: self.registry,
            rngs: self.rngs,
        })
    }
}
