//! farmyard — smallest runnable demo of the croft agent core.
//!
//! One farmer NPC works a row of plots while three chickens wander the yard;
//! the player paces back and forth across the middle of the room, startling
//! whichever chicken strays too close.  A summary observer prints farm
//! progress and path statistics once per simulated second.

use std::io::Cursor;

use anyhow::Result;

use croft_agent::{AgentStoreBuilder, SpawnSpec};
use croft_behavior::TreeRegistry;
use croft_core::{AgentId, SimConfig, SpeciesId, Tick, TileCoord, Vec2, TILE_SIZE};
use croft_grid::{DiagonalPolicy, GridManager, SearchConfig, WalkGrid};
use croft_sim::{AgentEvent, Sim, SimBuilder, SimObserver};
use croft_species::{
    register_species_trees, FleeProfile, PlayerRef, SpeciesKind, SpeciesProfile, SpeciesProfiles,
};
use croft_world::{load_plots_reader, load_room_reader};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const TOTAL_TICKS: u64 = 3_600; // one simulated minute at 60 ticks/s
const REPORT_EVERY: u64 = 60;

const FARMER: SpeciesId = SpeciesId(0);
const CHICKEN: SpeciesId = SpeciesId(1);

// ── Room & plot data ──────────────────────────────────────────────────────────

// 21×12 yard: walled border, a pond in the north-east corner.
const ROOM_CSV: &str = "\
1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1\n\
1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1,1,1,1,1\n\
1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1,1,1,1,1\n\
1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1,1,1\n\
1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1\n\
1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1\n\
1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1\n\
1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1\n\
1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1\n\
1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1\n\
1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1\n\
1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1\n";

// A worked-over row of plots in various stages.
const PLOTS_CSV: &str = "\
x,y,state\n\
4,6,wild\n\
5,6,wild\n\
6,6,hoed\n\
7,6,wild\n\
8,6,planted\n\
9,6,wild\n";

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct SummaryObserver {
    completed: usize,
    aborted: usize,
    interactions: usize,
}

impl SimObserver for SummaryObserver {
    fn on_agent_event(&mut self, _tick: Tick, _agent: AgentId, event: AgentEvent) {
        match event {
            AgentEvent::PathCompleted => self.completed += 1,
            AgentEvent::PathAborted => self.aborted += 1,
            AgentEvent::Interacted { .. } => self.interactions += 1,
        }
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── World data ────────────────────────────────────────────────────────
    let room = load_room_reader(Cursor::new(ROOM_CSV))?;
    let plots = load_plots_reader(Cursor::new(PLOTS_CSV))?;

    let mut grid = GridManager::new(WalkGrid::new(room.width, room.height, room.walkability())?);
    grid.register_species(FARMER, SearchConfig::new(DiagonalPolicy::WhenOrthogonalsClear, 10));
    grid.register_species(CHICKEN, SearchConfig::new(DiagonalPolicy::Never, 10));

    let mut profiles = SpeciesProfiles::new();
    profiles.insert(FARMER, SpeciesProfile::default().with_complete_dwell((0.5, 1.5)));
    profiles.insert(
        CHICKEN,
        SpeciesProfile::default()
            .with_wander_radius(4)
            .with_flee(FleeProfile::default()),
    );

    let mut registry = TreeRegistry::new();
    register_species_trees(&mut registry, FARMER, SpeciesKind::Farmer);
    register_species_trees(&mut registry, CHICKEN, SpeciesKind::Skittish);

    // ── Population ────────────────────────────────────────────────────────
    let mut spawner = AgentStoreBuilder::new(SEED);
    spawner.spawn(SpawnSpec::new(FARMER, TileCoord::new(3, 3).center()).speed(88.0));
    for tile in [TileCoord::new(12, 8), TileCoord::new(14, 5), TileCoord::new(8, 9)] {
        spawner.spawn(
            SpawnSpec::new(CHICKEN, tile.center())
                .speed(56.0)
                .half_extents(Vec2::new(8.0, 6.0)),
        );
    }
    let (agents, rngs) = spawner.build();

    let mut sim = SimBuilder::new(
        SimConfig::new(SEED, TOTAL_TICKS),
        grid,
        agents,
        rngs,
        registry,
        profiles,
    )
    .farm(plots)
    .player(PlayerRef {
        position: TileCoord::new(10, 8).center(),
        half_extents: Vec2::new(14.0, 10.0),
    })
    .build()?;

    // ── Drive ─────────────────────────────────────────────────────────────
    let mut observer = SummaryObserver::default();
    let mut player_dx = 40.0; // px/s, pacing east-west across the yard

    for _ in 0..TOTAL_TICKS {
        if let Some(player) = &mut sim.world.player {
            player.position.x += player_dx * sim.clock.dt_secs;
            if player.position.x > 18.0 * TILE_SIZE || player.position.x < 3.0 * TILE_SIZE {
                player_dx = -player_dx;
            }
        }

        sim.tick(&mut observer)?;

        if sim.clock.current_tick.0 % REPORT_EVERY == 0 {
            report(&sim, &observer);
        }
    }

    println!("──");
    println!(
        "done after {}: {} walks finished, {} aborted, {} tool uses",
        sim.clock, observer.completed, observer.aborted, observer.interactions
    );
    Ok(())
}

fn report(sim: &Sim, observer: &SummaryObserver) {
    let hoed = sim.world.farm.iter().filter(|t| t.hoed).count();
    let planted = sim.world.farm.iter().filter(|t| t.planted).count();
    let watered = sim.world.farm.iter().filter(|t| t.watered).count();
    let fleeing = sim
        .world
        .agents
        .agent_ids()
        .filter(|a| sim.world.agents.fleeing[a.index()])
        .count();

    println!(
        "{}: farm {hoed}h/{planted}p/{watered}w  walks {}✓ {}✗  interactions {}  fleeing {fleeing}",
        sim.clock, observer.completed, observer.aborted, observer.interactions
    );
}
