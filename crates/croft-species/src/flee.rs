//! The flee tree for threatened species.

use std::cmp::Ordering;
use std::f32::consts::{PI, TAU};

use croft_behavior::{Context, FollowUp, Node};
use croft_core::{AgentRng, Vec2, TILE_SIZE};
use croft_follower::PathGoal;

use crate::FarmWorld;

/// `Sequence( threat-within-trigger-radius?, flee-from-threat )`.
pub fn flee_tree() -> Node<FarmWorld> {
    Node::sequence(vec![
        Node::condition("threat-near", threat_near),
        Node::action("flee-from-threat", flee_from_threat),
    ])
}

fn threat_near(world: &mut FarmWorld, ctx: Context, _rng: &mut AgentRng) -> bool {
    let Some(threat) = ctx.threat else {
        return false;
    };
    let species = world.agents.species[ctx.agent.index()];
    let Some(flee) = world.profiles.get(species).and_then(|p| p.flee) else {
        return false;
    };

    let pos = world.agents.position[ctx.agent.index()];
    let distance_tiles = pos.distance(threat) / TILE_SIZE;
    distance_tiles < flee.trigger_radius_tiles
}

/// All eight unit offsets, sorted by increasing angular distance from the
/// direction pointing directly away from the threat.  A zero away-vector
/// (agent exactly on the threat) falls back to east-first.
pub(crate) fn offsets_by_angle(away: Vec2) -> [(i32, i32); 8] {
    const OFFSETS: [(i32, i32); 8] = [
        (1, 0),
        (1, 1),
        (0, 1),
        (-1, 1),
        (-1, 0),
        (-1, -1),
        (0, -1),
        (1, -1),
    ];

    let away_angle = if away.x == 0.0 && away.y == 0.0 {
        0.0
    } else {
        away.y.atan2(away.x)
    };

    let mut sorted = OFFSETS;
    sorted.sort_by(|&a, &b| {
        let da = angular_distance((a.1 as f32).atan2(a.0 as f32), away_angle);
        let db = angular_distance((b.1 as f32).atan2(b.0 as f32), away_angle);
        da.partial_cmp(&db).unwrap_or(Ordering::Equal)
    });
    sorted
}

#[inline]
fn angular_distance(a: f32, b: f32) -> f32 {
    let d = (a - b).rem_euclid(TAU);
    if d > PI { TAU - d } else { d }
}

/// Try flee targets starting from "directly away", raising speed and setting
/// the fleeing flag on the first offset that accepts a path.
///
/// The search runs against the flee profile's tighter window (the
/// range-restricted grid variant), and `EndFlee` is registered on *both*
/// terminal queues: whichever way the path ends, the flag and boost clear
/// exactly once.
fn flee_from_threat(world: &mut FarmWorld, ctx: Context, rng: &mut AgentRng) -> bool {
    let agent = ctx.agent;
    let Some(threat) = ctx.threat else {
        return false;
    };
    let species = world.agents.species[agent.index()];
    let Some(flee) = world.profiles.get(species).and_then(|p| p.flee) else {
        return false;
    };
    let Ok(base_config) = world.grid.config_for(species) else {
        return false;
    };
    let config = base_config.with_radius(flee.search_radius);

    let pos = world.agents.position[agent.index()];
    let origin = pos.tile();
    let start = pos;
    let exclude = world.occupied_tiles_except(agent);

    for (dx, dy) in offsets_by_angle(pos - threat) {
        let target = origin.offset(dx * flee.flee_distance, dy * flee.flee_distance);
        if world.followers.get_mut(agent).create_path_to_tile(
            start,
            &mut world.grid,
            &config,
            target,
            &exclude,
            PathGoal::OnTile,
        ) {
            world.agents.speed_boost[agent.index()] = flee.speed_boost;
            world.agents.fleeing[agent.index()] = true;

            let follower = world.followers.get_mut(agent);
            follower.on_path_completion(FollowUp::EndFlee);
            follower.on_path_abortion(FollowUp::EndFlee);
            return true;
        }
    }

    false
}
