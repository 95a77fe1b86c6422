//! Fluent builder for constructing `AgentStore` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use croft_agent::{AgentStoreBuilder, SpawnSpec};
//! use croft_core::{SpeciesId, TileCoord, Vec2};
//!
//! let mut b = AgentStoreBuilder::new(/*seed=*/ 42);
//! let farmer = b.spawn(
//!     SpawnSpec::new(SpeciesId(0), TileCoord::new(4, 4).center())
//!         .speed(96.0)
//!         .half_extents(Vec2::new(14.0, 10.0)),
//! );
//! let (store, rngs) = b.build();
//! assert_eq!(store.count, 1);
//! assert_eq!(store.species[farmer.index()], SpeciesId(0));
//! ```

use croft_core::{AgentId, SpeciesId, TreeKey, Vec2};

use crate::{AgentRngs, AgentStore};

// ── SpawnSpec ─────────────────────────────────────────────────────────────────

/// Everything spawn code decides about one agent.
#[derive(Clone, Debug)]
pub struct SpawnSpec {
    pub species: SpeciesId,
    pub position: Vec2,
    pub base_speed: f32,
    pub half_extents: Vec2,
    pub tree: TreeKey,
    pub collidable: bool,
}

impl SpawnSpec {
    /// A spec with the species' default-mode tree and typical NPC defaults.
    pub fn new(species: SpeciesId, position: Vec2) -> Self {
        Self {
            species,
            position,
            base_speed: 64.0,
            half_extents: Vec2::new(12.0, 8.0),
            tree: TreeKey::default_for(species),
            collidable: true,
        }
    }

    pub fn speed(mut self, px_per_sec: f32) -> Self {
        self.base_speed = px_per_sec;
        self
    }

    pub fn half_extents(mut self, half_extents: Vec2) -> Self {
        self.half_extents = half_extents;
        self
    }

    /// Assign a non-default behavior tree.
    pub fn tree(mut self, tree: TreeKey) -> Self {
        self.tree = tree;
        self
    }

    pub fn collidable(mut self, collidable: bool) -> Self {
        self.collidable = collidable;
        self
    }
}

// ── AgentStoreBuilder ─────────────────────────────────────────────────────────

/// Accumulates [`SpawnSpec`]s, then produces [`AgentStore`] + [`AgentRngs`].
pub struct AgentStoreBuilder {
    seed: u64,
    specs: Vec<SpawnSpec>,
}

impl AgentStoreBuilder {
    /// Create a builder using `seed` as the global RNG seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            specs: Vec::new(),
        }
    }

    /// Queue one agent and return the `AgentId` it will occupy.
    pub fn spawn(&mut self, spec: SpawnSpec) -> AgentId {
        let id = AgentId(self.specs.len() as u32);
        self.specs.push(spec);
        id
    }

    pub fn count(&self) -> usize {
        self.specs.len()
    }

    /// Construct the store and per-agent RNGs.
    pub fn build(self) -> (AgentStore, AgentRngs) {
        let count = self.specs.len();
        let mut store = AgentStore::new(count);

        for (i, spec) in self.specs.into_iter().enumerate() {
            store.position[i] = spec.position;
            store.base_speed[i] = spec.base_speed;
            store.half_extents[i] = spec.half_extents;
            store.species[i] = spec.species;
            store.tree[i] = spec.tree;
            store.collidable[i] = spec.collidable;
        }

        let rngs = AgentRngs::new(count, self.seed);
        (store, rngs)
    }
}
