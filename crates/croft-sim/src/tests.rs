//! Builder validation, collision, and tick-loop integration tests.

use croft_agent::{AgentStoreBuilder, SpawnSpec};
use croft_behavior::TreeRegistry;
use croft_core::{AgentId, Rect, SimConfig, SpeciesId, Tick, TileCoord, Vec2};
use croft_follower::PathGoal;
use croft_grid::{DiagonalPolicy, GridManager, SearchConfig, WalkGrid};
use croft_species::{
    register_species_trees, FarmWorld, FleeProfile, PlayerRef, SpeciesKind, SpeciesProfile,
    SpeciesProfiles,
};
use croft_world::{FarmTile, TileRegistry};

use crate::collide::snap_correction;
use crate::{AgentEvent, NoopObserver, Sim, SimBuilder, SimError, SimObserver};

const DRIFTER: SpeciesId = SpeciesId(0);
const FARMER: SpeciesId = SpeciesId(1);
const CHICKEN: SpeciesId = SpeciesId(2);
const STATUE: SpeciesId = SpeciesId(3);

// ── Helpers ───────────────────────────────────────────────────────────────────

fn t(x: i32, y: i32) -> TileCoord {
    TileCoord::new(x, y)
}

/// Observer recording every agent event.
#[derive(Default)]
struct EventLog {
    events: Vec<(Tick, AgentId, AgentEvent)>,
}

impl SimObserver for EventLog {
    fn on_agent_event(&mut self, tick: Tick, agent: AgentId, event: AgentEvent) {
        self.events.push((tick, agent, event));
    }
}

impl EventLog {
    fn count(&self, pred: impl Fn(&AgentEvent) -> bool) -> usize {
        self.events.iter().filter(|(_, _, e)| pred(e)).count()
    }
}

/// Grid manager with search configs for all test species.
fn test_grid(width: usize, height: usize) -> GridManager {
    let mut grid = GridManager::new(WalkGrid::open(width, height));
    grid.register_species(DRIFTER, SearchConfig::new(DiagonalPolicy::WhenOrthogonalsClear, 12));
    grid.register_species(FARMER, SearchConfig::new(DiagonalPolicy::WhenOrthogonalsClear, 12));
    grid.register_species(CHICKEN, SearchConfig::new(DiagonalPolicy::Never, 12));
    grid.register_species(STATUE, SearchConfig::new(DiagonalPolicy::Never, 4));
    grid
}

/// Profiles for all test species.
fn test_profiles() -> SpeciesProfiles {
    let mut profiles = SpeciesProfiles::new();
    profiles.insert(DRIFTER, SpeciesProfile::default());
    let mut farmer = SpeciesProfile::default();
    farmer.farm_chance = 1.0; // deterministic gating for tests
    profiles.insert(FARMER, farmer);
    profiles.insert(
        CHICKEN,
        SpeciesProfile::default().with_flee(FleeProfile::default()),
    );
    // Statues sample a zero-radius wander window: every tree run fails and
    // they stay parked — useful as immovable collidable scenery.
    profiles.insert(STATUE, SpeciesProfile::default().with_wander_radius(0));
    profiles
}

/// Trees for all test species.
fn test_registry() -> TreeRegistry<FarmWorld> {
    let mut registry = TreeRegistry::new();
    register_species_trees(&mut registry, DRIFTER, SpeciesKind::Drifter);
    register_species_trees(&mut registry, FARMER, SpeciesKind::Farmer);
    register_species_trees(&mut registry, CHICKEN, SpeciesKind::Skittish);
    register_species_trees(&mut registry, STATUE, SpeciesKind::Drifter);
    registry
}

fn build_sim(specs: Vec<SpawnSpec>, seed: u64) -> Sim {
    let mut builder = AgentStoreBuilder::new(seed);
    for spec in specs {
        builder.spawn(spec);
    }
    let (agents, rngs) = builder.build();
    SimBuilder::new(
        SimConfig::new(seed, 10_000),
        test_grid(21, 21),
        agents,
        rngs,
        test_registry(),
        test_profiles(),
    )
    .build()
    .expect("test sim wiring is complete")
}

// ── Collision primitives ──────────────────────────────────────────────────────

#[cfg(test)]
mod collision {
    use super::*;

    fn rect(center: (f32, f32), half: (f32, f32)) -> Rect {
        Rect::from_center(Vec2::new(center.0, center.1), Vec2::new(half.0, half.1))
    }

    #[test]
    fn snap_pushes_back_along_the_approach_axis() {
        let other = rect((100.0, 100.0), (12.0, 8.0));

        // Mover came from the west and now clips the offender's west edge.
        let prev = rect((70.0, 100.0), (12.0, 8.0));
        let current = rect((78.0, 100.0), (12.0, 8.0));
        let correction = snap_correction(prev, current, other);
        assert_eq!(correction, Vec2::new(-2.0, 0.0));
        let snapped = current.translated(correction);
        assert!(!snapped.intersects(other), "flush contact is not overlap");

        // Mover came from the north.
        let prev = rect((100.0, 80.0), (12.0, 8.0));
        let current = rect((100.0, 86.0), (12.0, 8.0));
        let correction = snap_correction(prev, current, other);
        assert_eq!(correction, Vec2::new(0.0, -2.0));
    }

    #[test]
    fn surrounded_mover_aborts_its_path() {
        // A mover buried under four overlapping statues cannot be snapped
        // free along any single edge, so the path must abort this tick.
        let center = t(5, 5).center();
        let mut specs = vec![
            SpawnSpec::new(DRIFTER, center).half_extents(Vec2::new(12.0, 8.0)),
        ];
        for offset in [
            Vec2::new(-20.0, 0.0),
            Vec2::new(20.0, 0.0),
            Vec2::new(0.0, -16.0),
            Vec2::new(0.0, 16.0),
        ] {
            specs.push(
                SpawnSpec::new(STATUE, center + offset).half_extents(Vec2::new(30.0, 30.0)),
            );
        }
        let mut sim = build_sim(specs, 77);

        // Hand the mover a path east, bypassing occupancy exclusion.
        let config = SearchConfig::new(DiagonalPolicy::Never, 12);
        let start = sim.world.agents.position[0];
        assert!(sim.world.followers.get_mut(AgentId(0)).create_path_to_tile(
            start,
            &mut sim.world.grid,
            &config,
            t(9, 5),
            &[],
            PathGoal::OnTile,
        ));

        let mut log = EventLog::default();
        sim.run_ticks(2, &mut log).unwrap();

        assert!(
            log.events
                .iter()
                .any(|&(_, agent, e)| agent == AgentId(0) && e == AgentEvent::PathAborted),
            "unresolvable overlap must abort, got {:?}",
            log.events
        );
        assert!(sim.world.followers.get(AgentId(0)).is_idle());
    }
}

// ── Builder validation ────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;

    fn spawn_one(species: SpeciesId) -> (croft_agent::AgentStore, croft_agent::AgentRngs) {
        let mut b = AgentStoreBuilder::new(1);
        b.spawn(SpawnSpec::new(species, t(5, 5).center()));
        b.build()
    }

    #[test]
    fn missing_species_profile_fails_fast() {
        let (agents, rngs) = spawn_one(SpeciesId(9));
        let result = SimBuilder::new(
            SimConfig::new(1, 100),
            test_grid(21, 21),
            agents,
            rngs,
            test_registry(),
            test_profiles(),
        )
        .build();
        assert!(matches!(result, Err(SimError::Core(_))));
    }

    #[test]
    fn missing_search_config_fails_fast() {
        let (agents, rngs) = spawn_one(DRIFTER);
        // Grid without any species registration.
        let bare_grid = GridManager::new(WalkGrid::open(21, 21));
        let result = SimBuilder::new(
            SimConfig::new(1, 100),
            bare_grid,
            agents,
            rngs,
            test_registry(),
            test_profiles(),
        )
        .build();
        assert!(matches!(result, Err(SimError::Grid(_))));
    }

    #[test]
    fn missing_tree_fails_fast() {
        let (agents, rngs) = spawn_one(DRIFTER);
        let result = SimBuilder::new(
            SimConfig::new(1, 100),
            test_grid(21, 21),
            agents,
            rngs,
            TreeRegistry::new(), // nothing registered
            test_profiles(),
        )
        .build();
        assert!(matches!(result, Err(SimError::Behavior(_))));
    }

    #[test]
    fn complete_wiring_builds() {
        let (agents, rngs) = spawn_one(DRIFTER);
        let sim = SimBuilder::new(
            SimConfig::new(1, 100),
            test_grid(21, 21),
            agents,
            rngs,
            test_registry(),
            test_profiles(),
        )
        .build();
        assert!(sim.is_ok());
    }
}

// ── Tick loop integration ─────────────────────────────────────────────────────

#[cfg(test)]
mod tick_loop {
    use super::*;

    #[test]
    fn drifter_wanders_and_completes_paths() {
        let mut sim = build_sim(
            vec![SpawnSpec::new(DRIFTER, t(10, 10).center()).speed(96.0)],
            5,
        );
        let mut log = EventLog::default();
        sim.run_ticks(4_000, &mut log).unwrap();

        let completed = log.count(|e| *e == AgentEvent::PathCompleted);
        assert!(completed >= 2, "expected repeated wander cycles, got {completed}");

        // The agent never leaves the room.
        let pos = sim.world.agents.position[0];
        let tile = pos.tile();
        assert!(sim.world.grid.in_bounds(tile), "agent at {pos} left the grid");
    }

    #[test]
    fn farmer_hoes_its_plots() {
        let mut farm = TileRegistry::new();
        for x in 8..11 {
            farm.insert(FarmTile::wild(t(x, 12))).unwrap();
        }

        let mut builder = AgentStoreBuilder::new(9);
        builder.spawn(SpawnSpec::new(FARMER, t(10, 10).center()).speed(96.0));
        let (agents, rngs) = builder.build();

        let mut sim = SimBuilder::new(
            SimConfig::new(9, 20_000),
            test_grid(21, 21),
            agents,
            rngs,
            test_registry(),
            test_profiles(),
        )
        .farm(farm)
        .build()
        .unwrap();

        let mut log = EventLog::default();
        sim.run_ticks(8_000, &mut log).unwrap();

        let interactions = log.count(|e| matches!(e, AgentEvent::Interacted { .. }));
        assert!(interactions >= 1, "farmer never reached a plot");
        assert!(
            sim.world.farm.iter().any(|tile| tile.hoed),
            "at least one plot gets hoed"
        );
    }

    #[test]
    fn chicken_flees_then_calms_down() {
        let mut sim = build_sim(
            vec![SpawnSpec::new(CHICKEN, t(10, 10).center()).speed(64.0)],
            13,
        );
        sim.world.player = Some(PlayerRef {
            position: t(11, 10).center(),
            half_extents: Vec2::new(14.0, 10.0),
        });

        // The first tree run sees the adjacent threat and bolts.
        sim.run_ticks(10, &mut NoopObserver).unwrap();
        assert!(sim.world.agents.fleeing[0], "threat in range must trigger a flee");
        assert!(sim.world.agents.speed_boost[0] > 1.0);

        // Remove the threat; the flee path finishes and EndFlee clears state.
        sim.world.player = None;
        let mut log = EventLog::default();
        sim.run_ticks(3_000, &mut log).unwrap();

        assert!(!sim.world.agents.fleeing[0]);
        assert_eq!(sim.world.agents.speed_boost[0], 1.0);
        assert!(log.count(|e| *e == AgentEvent::PathCompleted) >= 1);
    }

    #[test]
    fn same_seed_same_trajectory() {
        let spawn = || vec![SpawnSpec::new(DRIFTER, t(10, 10).center()).speed(96.0)];
        let mut a = build_sim(spawn(), 21);
        let mut b = build_sim(spawn(), 21);

        a.run_ticks(1_500, &mut NoopObserver).unwrap();
        b.run_ticks(1_500, &mut NoopObserver).unwrap();

        assert_eq!(a.world.agents.position[0], b.world.agents.position[0]);
        assert_eq!(a.world.agents.facing[0], b.world.agents.facing[0]);
    }

    #[test]
    fn one_agents_failure_never_stalls_another() {
        // Agent 0 is walled into a single tile (every request fails); agent 1
        // roams free.  The free agent keeps completing paths regardless.
        let mut sim = build_sim(
            vec![
                SpawnSpec::new(DRIFTER, t(1, 1).center()),
                SpawnSpec::new(DRIFTER, t(15, 15).center()).speed(96.0),
            ],
            33,
        );
        for (x, y) in [(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2), (2, 2)] {
            sim.world.grid.set_walkable(t(x, y), false);
        }

        let mut log = EventLog::default();
        sim.run_ticks(4_000, &mut log).unwrap();

        let free_completions = log
            .events
            .iter()
            .filter(|&&(_, agent, e)| agent == AgentId(1) && e == AgentEvent::PathCompleted)
            .count();
        assert!(free_completions >= 2);
        assert_eq!(sim.world.agents.position[0].tile(), t(1, 1), "walled agent stays put");
    }
}
