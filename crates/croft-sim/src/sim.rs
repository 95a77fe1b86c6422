//! The `Sim` struct and its tick loop.

use croft_agent::AgentRngs;
use croft_behavior::{FollowUp, TreeRegistry};
use croft_core::{AgentId, Rect, SimConfig, Tick, TickClock};
use croft_follower::Body;
use croft_species::{FarmWorld, PlayerRef};

use crate::collide::{snap_correction, ColliderId, ColliderIndex};
use crate::{AgentEvent, SimObserver, SimResult};

/// The main simulation runner.
///
/// Holds the world, the tree registry, and per-agent RNGs, and drives the
/// per-agent update sequence each tick:
///
/// 1. **Decide**: an idle agent burns dwell; on expiry its assigned tree runs
///    (which may create a path via the follower).
/// 2. **Move**: a moving agent advances along its path; afterwards its hitbox
///    is checked against the collider index, snapped out of a single overlap,
///    and the path aborted if overlap persists.
/// 3. **Apply**: whichever terminal follow-up queue fired is drained and
///    executed with full world access.
///
/// Create via [`SimBuilder`][crate::SimBuilder], which validates every
/// species profile, search config, and tree assignment before the first
/// tick.
pub struct Sim {
    /// Global configuration (total ticks, seed, timestep).
    pub config: SimConfig,

    /// Simulation clock — current tick and timestep.
    pub clock: TickClock,

    /// The shared world: grid, farm registry, agents, followers, player.
    pub world: FarmWorld,

    /// Immutable behavior trees, one per `(species, mode)`.
    pub registry: TreeRegistry<FarmWorld>,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick < self.config.end_tick() {
            self.tick(observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.tick(observer)?;
        }
        Ok(())
    }

    /// Advance the simulation by one tick.
    pub fn tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        let dt = self.clock.dt_secs;
        observer.on_tick_start(now);

        // Broad-phase collider index from positions at tick start; the
        // narrow phase re-reads live hitboxes (see croft-sim::collide).
        let index = ColliderIndex::build(&self.world.agents, self.world.player.as_ref());

        // Ascending-ID order keeps each tick's operation sequence
        // deterministic for a given seed.
        for i in 0..self.world.agents.count as u32 {
            self.update_agent(AgentId(i), now, dt, &index, observer)?;
        }

        observer.on_tick_end(now);
        self.clock.advance();
        Ok(())
    }

    // ── Per-agent update ──────────────────────────────────────────────────

    fn update_agent<O: SimObserver>(
        &mut self,
        agent: AgentId,
        now: Tick,
        dt: f32,
        index: &ColliderIndex,
        observer: &mut O,
    ) -> SimResult<()> {
        // ── Phase 1: idle countdown → exit-idle hook ──────────────────────
        if self.world.followers.get_mut(agent).update_idle(dt) {
            let key = self.world.agents.tree[agent.index()];
            // Assignments are validated at build time; a miss here is a
            // programming error and surfaces as such.
            let tree = self.registry.require(key)?;
            let ctx = self.world.context_for(agent);
            tree.run(&mut self.world, ctx, self.rngs.get_mut(agent));
        }

        // ── Phase 2: advance along the path, then resolve collisions ─────
        if self.world.followers.get_mut(agent).is_moving() {
            let speed = self.world.agents.effective_speed(agent);
            let prev_hitbox = self.world.agents.hitbox(agent);

            let completed = {
                let position = &mut self.world.agents.position[agent.index()];
                let facing = &mut self.world.agents.facing[agent.index()];
                self.world.followers.get_mut(agent).update_moving(
                    dt,
                    Body { position, facing, speed },
                    self.rngs.get_mut(agent),
                )
            };

            if completed {
                observer.on_agent_event(now, agent, AgentEvent::PathCompleted);
            } else if self.world.agents.collidable[agent.index()] {
                self.resolve_collisions(agent, prev_hitbox, index, now, observer);
            }
        }

        // ── Phase 3: apply terminal follow-ups ────────────────────────────
        for follow_up in self.world.followers.get_mut(agent).take_fired() {
            self.apply_follow_up(agent, follow_up, now, observer);
        }

        Ok(())
    }

    /// Post-move overlap handling: snap out of the first offender along its
    /// nearest edge; abort the path if any overlap survives the correction.
    fn resolve_collisions<O: SimObserver>(
        &mut self,
        agent: AgentId,
        prev_hitbox: Rect,
        index: &ColliderIndex,
        now: Tick,
        observer: &mut O,
    ) {
        let current = self.world.agents.hitbox(agent);
        let candidates = index.candidates_near(current, ColliderId::Agent(agent));

        let offender = candidates
            .iter()
            .find_map(|&id| live_hitbox(&self.world, id).filter(|r| r.intersects(current)));
        let Some(other) = offender else {
            return;
        };

        let correction = snap_correction(prev_hitbox, current, other);
        self.world.agents.position[agent.index()] += correction;

        let resolved = self.world.agents.hitbox(agent);
        let still_overlapping = candidates
            .iter()
            .any(|&id| live_hitbox(&self.world, id).is_some_and(|r| r.intersects(resolved)));

        if still_overlapping {
            self.world.followers.get_mut(agent).abort_path();
            observer.on_agent_event(now, agent, AgentEvent::PathAborted);
        }
    }

    fn apply_follow_up<O: SimObserver>(
        &mut self,
        agent: AgentId,
        follow_up: FollowUp,
        now: Tick,
        observer: &mut O,
    ) {
        match follow_up {
            FollowUp::Face(target) => {
                self.world.agents.face_toward(agent, target);
            }
            FollowUp::Interact { target, kind } => {
                // A wrong-state interaction (the tile changed while this
                // agent walked over) is local to this agent's turn.
                if self.world.farm.apply(target, kind).is_ok() {
                    observer.on_agent_event(now, agent, AgentEvent::Interacted { target, kind });
                }
            }
            FollowUp::EndFlee => {
                self.world.agents.speed_boost[agent.index()] = 1.0;
                self.world.agents.fleeing[agent.index()] = false;
            }
        }
    }
}

/// The up-to-date hitbox for a collider, if it still participates in
/// collision.
fn live_hitbox(world: &FarmWorld, id: ColliderId) -> Option<Rect> {
    match id {
        ColliderId::Agent(agent) if world.agents.collidable[agent.index()] => {
            Some(world.agents.hitbox(agent))
        }
        ColliderId::Agent(_) => None,
        ColliderId::Player => world.player.as_ref().map(PlayerRef::hitbox),
    }
}
