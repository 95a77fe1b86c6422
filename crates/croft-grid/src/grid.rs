//! Walkability grid, its manager, and temporary exclusion scopes.

use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

use croft_core::{SpeciesId, TileCoord};

use crate::search::{self, SearchConfig, SearchScratch};
use crate::{GridError, GridResult};

// ── WalkGrid ──────────────────────────────────────────────────────────────────

/// Tile-indexed boolean walkability matrix for one room.
///
/// Always rectangular: construction validates that the cell count matches the
/// declared dimensions.  Out-of-bounds queries answer `false` and
/// out-of-bounds writes are ignored, so callers holding a coordinate pushed
/// past a map edge degrade gracefully instead of panicking.
#[derive(Clone, Debug)]
pub struct WalkGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>, // row-major, true = walkable
}

impl WalkGrid {
    /// Build from explicit cells (row-major, `true` = walkable).
    pub fn new(width: usize, height: usize, cells: Vec<bool>) -> GridResult<Self> {
        if cells.len() != width * height {
            return Err(GridError::DimensionMismatch {
                width,
                height,
                cells: cells.len(),
            });
        }
        Ok(Self { width, height, cells })
    }

    /// A fully walkable grid — the usual starting point for tests.
    pub fn open(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![true; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, tile: TileCoord) -> bool {
        tile.x >= 0
            && tile.y >= 0
            && (tile.x as usize) < self.width
            && (tile.y as usize) < self.height
    }

    /// `true` if `tile` is inside the room and currently traversable.
    #[inline]
    pub fn walkable(&self, tile: TileCoord) -> bool {
        self.in_bounds(tile) && self.cells[self.idx(tile)]
    }

    /// Set a single cell.  Writes outside the room are ignored.
    #[inline]
    pub fn set_walkable(&mut self, tile: TileCoord, value: bool) {
        if self.in_bounds(tile) {
            let i = self.idx(tile);
            self.cells[i] = value;
        }
    }

    #[inline]
    fn idx(&self, tile: TileCoord) -> usize {
        tile.y as usize * self.width + tile.x as usize
    }
}

// ── GridManager ───────────────────────────────────────────────────────────────

/// Owner of the walkability source of truth for the active room.
///
/// Holds the grid, reusable search scratch buffers, and one shared, stateless
/// [`SearchConfig`] per species.  All path queries and all grid mutation go
/// through this type; dynamic obstacles are only ever applied via
/// [`exclusion_scope`][Self::exclusion_scope].
pub struct GridManager {
    grid: WalkGrid,
    scratch: SearchScratch,
    configs: HashMap<SpeciesId, SearchConfig>,
}

impl GridManager {
    pub fn new(grid: WalkGrid) -> Self {
        Self {
            grid,
            scratch: SearchScratch::default(),
            configs: HashMap::new(),
        }
    }

    #[inline]
    pub fn grid(&self) -> &WalkGrid {
        &self.grid
    }

    #[inline]
    pub fn walkable(&self, tile: TileCoord) -> bool {
        self.grid.walkable(tile)
    }

    #[inline]
    pub fn in_bounds(&self, tile: TileCoord) -> bool {
        self.grid.in_bounds(tile)
    }

    /// Per-cell mutable accessor for map-loading collaborators (opening a
    /// gate, placing a permanent obstacle).  Agent-occupancy must use
    /// [`exclusion_scope`][Self::exclusion_scope] instead.
    #[inline]
    pub fn set_walkable(&mut self, tile: TileCoord, value: bool) {
        self.grid.set_walkable(tile, value);
    }

    /// Reset internal search bookkeeping before reuse.
    ///
    /// Called by [`find_path`][Self::find_path] itself; exposed so callers
    /// embedding their own search loop can reclaim the buffers explicitly.
    pub fn cleanup(&mut self) {
        self.scratch.clear();
    }

    // ── Species search configs ────────────────────────────────────────────

    /// Register the shared search configuration for a species.  Replaces any
    /// previous registration.
    pub fn register_species(&mut self, species: SpeciesId, config: SearchConfig) {
        self.configs.insert(species, config);
    }

    /// The search configuration for `species`.
    pub fn config_for(&self, species: SpeciesId) -> GridResult<SearchConfig> {
        self.configs
            .get(&species)
            .copied()
            .ok_or(GridError::UnknownSpecies(species))
    }

    // ── Path search ───────────────────────────────────────────────────────

    /// Bounded A* from `start` to `goal`.
    ///
    /// The returned path excludes `start` and ends at `goal`; `None` when the
    /// goal cannot be reached inside the config's search window.  `start` is
    /// not required to be walkable (the agent is already standing there);
    /// every subsequent step is.
    pub fn find_path(
        &mut self,
        start: TileCoord,
        goal: TileCoord,
        config: &SearchConfig,
    ) -> Option<Vec<TileCoord>> {
        self.cleanup();
        search::astar(&self.grid, &mut self.scratch, config, start, goal)
    }

    // ── Exclusion scopes ──────────────────────────────────────────────────

    /// Temporarily mark `tiles` non-walkable for the lifetime of the guard.
    ///
    /// Each cell's *current* value is saved before it is overwritten and the
    /// saved values are written back in reverse order when the guard drops —
    /// normal return, early `?`, or unwind alike.  Restoring saved values
    /// (never a blanket `true`) keeps permanent obstacles intact even when
    /// an excluded tile was already blocked, and reverse order makes
    /// duplicate entries in `tiles` harmless.
    ///
    /// Out-of-bounds tiles in the set are skipped.
    pub fn exclusion_scope(&mut self, tiles: &[TileCoord]) -> ExclusionScope<'_> {
        let mut saved = Vec::with_capacity(tiles.len());
        for &tile in tiles {
            if self.grid.in_bounds(tile) {
                saved.push((tile, self.grid.walkable(tile)));
                self.grid.set_walkable(tile, false);
            }
        }
        ExclusionScope { manager: self, saved }
    }
}

// ── ExclusionScope ────────────────────────────────────────────────────────────

/// RAII guard for a temporary set of dynamic obstacles.
///
/// Derefs to [`GridManager`] so path queries run against the masked grid:
///
/// ```ignore
/// let mut scope = manager.exclusion_scope(&occupied);
/// let path = scope.find_path(start, goal, &config);
/// drop(scope); // prior walkability restored here
/// ```
pub struct ExclusionScope<'a> {
    manager: &'a mut GridManager,
    saved: Vec<(TileCoord, bool)>,
}

impl Deref for ExclusionScope<'_> {
    type Target = GridManager;
    #[inline]
    fn deref(&self) -> &GridManager {
        self.manager
    }
}

impl DerefMut for ExclusionScope<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut GridManager {
        self.manager
    }
}

impl Drop for ExclusionScope<'_> {
    fn drop(&mut self) {
        while let Some((tile, prior)) = self.saved.pop() {
            self.manager.grid.set_walkable(tile, prior);
        }
    }
}
