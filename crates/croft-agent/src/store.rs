//! Core agent storage: `AgentStore` (SoA kinematics) and `AgentRngs`.
//!
//! # Why two structs?
//!
//! Behavior evaluation needs `&mut AgentRng` (exclusive access to the acting
//! agent's RNG) alongside `&mut` access to the world the store lives in.
//! Keeping RNGs outside the store lets the driver borrow both without
//! aliasing gymnastics.

use croft_core::{AgentId, AgentRng, Facing, Rect, SpeciesId, TileCoord, TreeKey, Vec2};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`AgentStore`] to enable
/// simultaneous `&mut AgentRngs` + `&mut AgentStore` borrows.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all agent kinematic state.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them:
///
/// ```ignore
/// let pos = store.position[agent.index()];  // O(1), cache-friendly
/// ```
///
/// Fields are `pub` for direct indexed access on hot paths; the helpers below
/// cover the common derived reads.
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    // ── Kinematics ────────────────────────────────────────────────────────
    /// Pixel-space position (hitbox center).
    pub position: Vec<Vec2>,

    /// Render facing.  Written by the path follower and by `Face` follow-ups.
    pub facing: Vec<Facing>,

    /// Walking speed in pixels per second.
    pub base_speed: Vec<f32>,

    /// Speed multiplier; 1.0 when calm, raised while fleeing.
    pub speed_boost: Vec<f32>,

    /// Hitbox half-extents in pixels.
    pub half_extents: Vec<Vec2>,

    // ── Identity & behavior ───────────────────────────────────────────────
    /// Species of each agent.
    pub species: Vec<SpeciesId>,

    /// The assigned behavior tree, set once by spawn code and validated at
    /// simulation build time.
    pub tree: Vec<TreeKey>,

    /// Whether this agent participates in collision checks.
    pub collidable: Vec<bool>,

    /// Set while a flee path is active; cleared when it completes or aborts.
    pub fleeing: Vec<bool>,
}

impl AgentStore {
    pub(crate) fn new(count: usize) -> Self {
        Self {
            count,
            position: vec![Vec2::ZERO; count],
            facing: vec![Facing::default(); count],
            base_speed: vec![0.0; count],
            speed_boost: vec![1.0; count],
            half_extents: vec![Vec2::ZERO; count],
            species: vec![SpeciesId::INVALID; count],
            tree: vec![TreeKey::default_for(SpeciesId::INVALID); count],
            collidable: vec![true; count],
            fleeing: vec![false; count],
        }
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    // ── Derived reads ─────────────────────────────────────────────────────

    /// The tile the agent's position falls in.
    #[inline]
    pub fn tile_of(&self, agent: AgentId) -> TileCoord {
        self.position[agent.index()].tile()
    }

    /// Current hitbox rectangle.
    #[inline]
    pub fn hitbox(&self, agent: AgentId) -> Rect {
        Rect::from_center(self.position[agent.index()], self.half_extents[agent.index()])
    }

    /// Walking speed with the current boost applied, px/s.
    #[inline]
    pub fn effective_speed(&self, agent: AgentId) -> f32 {
        self.base_speed[agent.index()] * self.speed_boost[agent.index()]
    }

    /// Point the agent toward `target`'s tile center.
    pub fn face_toward(&mut self, agent: AgentId, target: TileCoord) {
        let dir = target.center() - self.position[agent.index()];
        self.facing[agent.index()] = Facing::from_vec(dir);
    }
}
