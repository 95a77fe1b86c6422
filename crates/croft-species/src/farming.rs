//! The farm-work tree: hoe, plant, and water in soft priority, else wander.

use croft_behavior::{Context, FollowUp, Node};
use croft_core::{AgentId, AgentRng, TileCoord};
use croft_follower::PathGoal;
use croft_world::{FarmTile, Interaction};

use crate::wander::wander_action;
use crate::FarmWorld;

/// `Selector[ Sequence(should-farm?, Selector[hoe, plant, water]), Wander ]`.
///
/// The gating is probabilistic rather than rigidly ordered: a farmer only
/// farms roughly one run in three, and starting brand-new farmland yields
/// with some probability while partially-worked tiles remain.
pub fn farm_work_tree() -> Node<FarmWorld> {
    Node::selector(vec![
        Node::sequence(vec![
            Node::condition("should-farm", should_farm),
            Node::selector(vec![
                Node::action("create-farmland", create_farmland),
                Node::action("plant-seed", plant_seed),
                Node::action("water-farmland", water_farmland),
            ]),
        ]),
        wander_action(),
    ])
}

fn should_farm(world: &mut FarmWorld, ctx: Context, rng: &mut AgentRng) -> bool {
    let species = world.agents.species[ctx.agent.index()];
    let Some(profile) = world.profiles.get(species) else {
        return false;
    };
    rng.gen_bool(profile.farm_chance)
}

fn create_farmland(world: &mut FarmWorld, ctx: Context, rng: &mut AgentRng) -> bool {
    let candidates = world.farm.candidates(FarmTile::needs_hoe);
    if candidates.is_empty() {
        return false;
    }

    // Bias toward finishing started work: while hoed-unplanted or dry planted
    // tiles exist, breaking new ground yields some of the time so the plant
    // and water actions get their turn.
    let species = world.agents.species[ctx.agent.index()];
    let bias = world
        .profiles
        .get(species)
        .map(|p| p.finish_first_bias)
        .unwrap_or(0.0);
    if world.farm.has_partial_work() && rng.gen_bool(bias) {
        return false;
    }

    work_tile(world, ctx.agent, &candidates, Interaction::Hoe, rng)
}

fn plant_seed(world: &mut FarmWorld, ctx: Context, rng: &mut AgentRng) -> bool {
    let candidates = world.farm.candidates(FarmTile::needs_plant);
    if candidates.is_empty() {
        return false;
    }
    work_tile(world, ctx.agent, &candidates, Interaction::Plant, rng)
}

fn water_farmland(world: &mut FarmWorld, ctx: Context, rng: &mut AgentRng) -> bool {
    let candidates = world.farm.candidates(FarmTile::needs_water);
    if candidates.is_empty() {
        return false;
    }
    work_tile(world, ctx.agent, &candidates, Interaction::Water, rng)
}

/// Path next to a randomly chosen candidate and chain the interaction.
///
/// The path stops adjacent to the plot (final node dropped) so the agent
/// works from interaction range instead of standing on the crop; completion
/// re-orients toward the plot, then applies the tool.
fn work_tile(
    world: &mut FarmWorld,
    agent: AgentId,
    candidates: &[TileCoord],
    kind: Interaction,
    rng: &mut AgentRng,
) -> bool {
    let Some(&target) = rng.choose(candidates) else {
        return false;
    };

    let species = world.agents.species[agent.index()];
    let Ok(config) = world.grid.config_for(species) else {
        return false;
    };
    let start = world.agents.position[agent.index()];
    let exclude = world.occupied_tiles_except(agent);

    if !world.followers.get_mut(agent).create_path_to_tile(
        start,
        &mut world.grid,
        &config,
        target,
        &exclude,
        PathGoal::Adjacent,
    ) {
        return false;
    }

    let follower = world.followers.get_mut(agent);
    follower.on_path_completion(FollowUp::Face(target));
    follower.on_path_completion(FollowUp::Interact { target, kind });
    true
}
