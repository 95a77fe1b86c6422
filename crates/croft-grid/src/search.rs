//! Bounded A* over the walkability grid.
//!
//! # Cost model
//!
//! Integer costs: 10 per orthogonal step, 14 per diagonal step (≈ 10·√2),
//! with an octile-distance heuristic in the same units.  Integer costs keep
//! the heap ordering exact and the tie-breaking deterministic.
//!
//! # Search window
//!
//! Expansion never leaves the Chebyshev window `max_radius` around the start
//! tile.  Per-query cost is therefore bounded by the window size and
//! independent of room dimensions — the deliberate scalability trade-off of
//! this system.  Targets outside the window are simply unreachable.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use croft_core::TileCoord;

use crate::grid::WalkGrid;

const STRAIGHT_COST: u32 = 10;
const DIAGONAL_COST: u32 = 14;

// ── SearchConfig ──────────────────────────────────────────────────────────────

/// How diagonal steps are admitted.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum DiagonalPolicy {
    /// Orthogonal steps only.
    Never,
    /// Diagonals whenever the destination tile is walkable.
    Always,
    /// Diagonals only when both adjacent orthogonal tiles are also walkable,
    /// so agents never cut a blocked corner.
    #[default]
    WhenOrthogonalsClear,
}

/// Per-species search configuration — shared and stateless across all agents
/// of the species.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SearchConfig {
    pub diagonal: DiagonalPolicy,
    /// Chebyshev radius of the search window around the start tile.
    pub max_radius: i32,
}

impl SearchConfig {
    pub fn new(diagonal: DiagonalPolicy, max_radius: i32) -> Self {
        Self { diagonal, max_radius }
    }

    /// The same policy with a tighter window — the range-restricted variant
    /// flee logic searches with.
    pub fn with_radius(self, max_radius: i32) -> Self {
        Self { max_radius, ..self }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            diagonal: DiagonalPolicy::default(),
            max_radius: 8,
        }
    }
}

// ── Scratch buffers ───────────────────────────────────────────────────────────

/// Reusable A* bookkeeping, cleared by `GridManager::cleanup` between
/// queries.  Capacity is retained across queries so steady-state searches do
/// not allocate.
#[derive(Default)]
pub(crate) struct SearchScratch {
    open: BinaryHeap<Reverse<(u32, TileCoord)>>,
    cost: HashMap<TileCoord, u32>,
    came_from: HashMap<TileCoord, TileCoord>,
}

impl SearchScratch {
    pub(crate) fn clear(&mut self) {
        self.open.clear();
        self.cost.clear();
        self.came_from.clear();
    }
}

// ── A* ────────────────────────────────────────────────────────────────────────

/// All eight neighbor offsets; orthogonals first so equal-cost expansions
/// prefer straight steps.
const NEIGHBORS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

#[inline]
fn octile(a: TileCoord, b: TileCoord) -> u32 {
    let dx = (a.x - b.x).unsigned_abs();
    let dy = (a.y - b.y).unsigned_abs();
    let (hi, lo) = if dx > dy { (dx, dy) } else { (dy, dx) };
    DIAGONAL_COST * lo + STRAIGHT_COST * (hi - lo)
}

/// Run the search.  Assumes `scratch` was cleared by the caller.
pub(crate) fn astar(
    grid: &WalkGrid,
    scratch: &mut SearchScratch,
    config: &SearchConfig,
    start: TileCoord,
    goal: TileCoord,
) -> Option<Vec<TileCoord>> {
    if start == goal {
        return Some(vec![]);
    }
    if start.chebyshev(goal) > config.max_radius || !grid.walkable(goal) {
        return None;
    }

    scratch.cost.insert(start, 0);
    scratch.open.push(Reverse((octile(start, goal), start)));

    // Min-heap on (f, tile); the TileCoord secondary key makes tie-breaking
    // deterministic across runs.
    while let Some(Reverse((f, tile))) = scratch.open.pop() {
        if tile == goal {
            return Some(reconstruct(&scratch.came_from, start, goal));
        }

        let g = scratch.cost[&tile];
        // Skip stale heap entries.
        if f > g + octile(tile, goal) {
            continue;
        }

        for (dx, dy) in NEIGHBORS {
            let next = tile.offset(dx, dy);
            if start.chebyshev(next) > config.max_radius || !grid.walkable(next) {
                continue;
            }

            let diagonal = dx != 0 && dy != 0;
            if diagonal {
                match config.diagonal {
                    DiagonalPolicy::Never => continue,
                    DiagonalPolicy::Always => {}
                    DiagonalPolicy::WhenOrthogonalsClear => {
                        if !grid.walkable(tile.offset(dx, 0))
                            || !grid.walkable(tile.offset(0, dy))
                        {
                            continue;
                        }
                    }
                }
            }

            let step = if diagonal { DIAGONAL_COST } else { STRAIGHT_COST };
            let next_g = g + step;
            if scratch.cost.get(&next).is_none_or(|&c| next_g < c) {
                scratch.cost.insert(next, next_g);
                scratch.came_from.insert(next, tile);
                scratch.open.push(Reverse((next_g + octile(next, goal), next)));
            }
        }
    }

    None
}

fn reconstruct(
    came_from: &HashMap<TileCoord, TileCoord>,
    start: TileCoord,
    goal: TileCoord,
) -> Vec<TileCoord> {
    let mut path = vec![goal];
    let mut cur = goal;
    while let Some(&prev) = came_from.get(&cur) {
        if prev == start {
            break;
        }
        path.push(prev);
        cur = prev;
    }
    path.reverse();
    path
}
