//! Collider indexing and post-move overlap resolution.
//!
//! # Broad/narrow phase
//!
//! An R-tree over collider AABBs is bulk-loaded once per tick from the
//! positions at tick start.  Because agents move a few pixels per tick, the
//! broad-phase query inflates its envelope by a margin larger than any
//! single-tick step and the narrow phase re-reads live hitboxes, so
//! intra-tick movement cannot slip past the stale envelopes.

use rstar::{RTree, RTreeObject, AABB};

use croft_agent::AgentStore;
use croft_core::{AgentId, Rect, Vec2};
use croft_species::PlayerRef;

/// Broad-phase envelope inflation, px.  Must exceed the largest per-tick
/// movement step.
const QUERY_MARGIN: f32 = 16.0;

/// What a collider belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ColliderId {
    Agent(AgentId),
    Player,
}

#[derive(Clone)]
struct ColliderEntry {
    min: [f32; 2],
    max: [f32; 2],
    id: ColliderId,
}

impl RTreeObject for ColliderEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.min, self.max)
    }
}

// ── ColliderIndex ─────────────────────────────────────────────────────────────

/// Per-tick spatial index of all collidable hitboxes.
pub struct ColliderIndex {
    tree: RTree<ColliderEntry>,
}

impl ColliderIndex {
    /// Bulk-load from every collidable agent plus the player, if present.
    pub fn build(agents: &AgentStore, player: Option<&PlayerRef>) -> Self {
        let mut entries: Vec<ColliderEntry> = agents
            .agent_ids()
            .filter(|&a| agents.collidable[a.index()])
            .map(|a| {
                let hb = agents.hitbox(a);
                ColliderEntry {
                    min: [hb.min.x, hb.min.y],
                    max: [hb.max.x, hb.max.y],
                    id: ColliderId::Agent(a),
                }
            })
            .collect();

        if let Some(player) = player {
            let hb = player.hitbox();
            entries.push(ColliderEntry {
                min: [hb.min.x, hb.min.y],
                max: [hb.max.x, hb.max.y],
                id: ColliderId::Player,
            });
        }

        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Broad-phase candidates near `rect`, excluding `skip`.
    ///
    /// Callers must narrow-phase against live hitboxes; the returned IDs are
    /// only "possibly overlapping".
    pub fn candidates_near(&self, rect: Rect, skip: ColliderId) -> Vec<ColliderId> {
        let envelope = AABB::from_corners(
            [rect.min.x - QUERY_MARGIN, rect.min.y - QUERY_MARGIN],
            [rect.max.x + QUERY_MARGIN, rect.max.y + QUERY_MARGIN],
        );
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|e| e.id != skip)
            .map(|e| e.id)
            .collect()
    }
}

// ── Edge-snap resolution ──────────────────────────────────────────────────────

/// Correction that snaps the mover's hitbox to the offender's nearest edge.
///
/// The four edge-to-edge distances are measured from the *previous-frame*
/// hitbox, so the snap undoes the smallest part of this tick's motion: an
/// agent that walked into a neighbor's west side gets pushed back west, not
/// squeezed out of whichever side happens to overlap least now.
pub fn snap_correction(prev: Rect, current: Rect, other: Rect) -> Vec2 {
    let push_east = (prev.min.x - other.max.x).abs();
    let push_west = (prev.max.x - other.min.x).abs();
    let push_south = (prev.min.y - other.max.y).abs();
    let push_north = (prev.max.y - other.min.y).abs();

    let shortest = push_east.min(push_west).min(push_south).min(push_north);

    if shortest == push_east {
        Vec2::new(other.max.x - current.min.x, 0.0)
    } else if shortest == push_west {
        Vec2::new(other.min.x - current.max.x, 0.0)
    } else if shortest == push_south {
        Vec2::new(0.0, other.max.y - current.min.y)
    } else {
        Vec2::new(0.0, other.min.y - current.max.y)
    }
}
