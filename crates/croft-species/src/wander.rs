//! The shared Wander action.

use croft_behavior::{Context, Node};
use croft_core::{AgentRng, TileCoord};
use croft_follower::PathGoal;

use crate::FarmWorld;

/// Wander as a tree leaf: pick a nearby random walkable tile and walk there.
pub fn wander_action() -> Node<FarmWorld> {
    Node::action("wander", wander)
}

/// Sample random tiles from the wander window until one accepts a path.
///
/// The window is the species' wander radius clamped to the grid; candidate
/// coordinates are sampled without replacement — `min(|xs|, |ys|)` shuffled
/// x values zipped against as many shuffled y values.  If every candidate
/// refuses a path the agent aborts and the action reports failure.
pub(crate) fn wander(world: &mut FarmWorld, ctx: Context, rng: &mut AgentRng) -> bool {
    let agent = ctx.agent;
    let species = world.agents.species[agent.index()];
    let Some(profile) = world.profiles.get(species) else {
        return false;
    };
    let radius = profile.wander_radius;

    let Ok(config) = world.grid.config_for(species) else {
        return false;
    };

    let origin = world.agents.tile_of(agent);
    let grid = world.grid.grid();
    let min_x = (origin.x - radius).max(0);
    let max_x = (origin.x + radius).min(grid.width() as i32 - 1);
    let min_y = (origin.y - radius).max(0);
    let max_y = (origin.y + radius).min(grid.height() as i32 - 1);
    if min_x > max_x || min_y > max_y {
        world.followers.get_mut(agent).abort_path();
        return false;
    }

    let mut xs: Vec<i32> = (min_x..=max_x).collect();
    let mut ys: Vec<i32> = (min_y..=max_y).collect();
    rng.shuffle(&mut xs);
    rng.shuffle(&mut ys);
    let samples = xs.len().min(ys.len());

    let start = world.agents.position[agent.index()];
    let exclude = world.occupied_tiles_except(agent);

    for i in 0..samples {
        let target = TileCoord::new(xs[i], ys[i]);
        if world.followers.get_mut(agent).create_path_to_tile(
            start,
            &mut world.grid,
            &config,
            target,
            &exclude,
            PathGoal::OnTile,
        ) {
            return true;
        }
    }

    world.followers.get_mut(agent).abort_path();
    false
}
