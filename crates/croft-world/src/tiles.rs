//! The farm tile registry and its interactions.

use croft_core::{PlotId, TileCoord};

use crate::{WorldError, WorldResult};

#[cfg(feature = "fx-hash")]
type CoordMap = rustc_hash::FxHashMap<TileCoord, usize>;
#[cfg(not(feature = "fx-hash"))]
type CoordMap = std::collections::HashMap<TileCoord, usize>;

// ── Interaction ───────────────────────────────────────────────────────────────

/// The tool interactions the world layer owns.  Behavior trees request these
/// through path-completion follow-ups; the registry validates and applies
/// them.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Interaction {
    Hoe,
    Plant,
    Water,
}

impl Interaction {
    pub fn as_str(self) -> &'static str {
        match self {
            Interaction::Hoe => "hoe",
            Interaction::Plant => "plant",
            Interaction::Water => "water",
        }
    }
}

impl std::fmt::Display for Interaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── FarmTile ──────────────────────────────────────────────────────────────────

/// One registered tile and its work flags.
///
/// Flags are cumulative: `watered` implies `planted` implies `hoed` implies
/// `farmable`.  The interactions below are the only writers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FarmTile {
    pub coord: TileCoord,
    pub farmable: bool,
    pub hoed: bool,
    pub planted: bool,
    pub watered: bool,
}

impl FarmTile {
    /// An untouched farmable tile.
    pub fn wild(coord: TileCoord) -> Self {
        Self {
            coord,
            farmable: true,
            hoed: false,
            planted: false,
            watered: false,
        }
    }

    /// Farmable soil that has not been hoed yet.
    #[inline]
    pub fn needs_hoe(&self) -> bool {
        self.farmable && !self.hoed
    }

    /// Hoed soil without a seed.
    #[inline]
    pub fn needs_plant(&self) -> bool {
        self.hoed && !self.planted
    }

    /// Planted soil that is still dry.
    #[inline]
    pub fn needs_water(&self) -> bool {
        self.planted && !self.watered
    }

    /// Work has started but not finished on this tile.
    #[inline]
    pub fn partially_worked(&self) -> bool {
        self.needs_plant() || self.needs_water()
    }
}

// ── TileRegistry ──────────────────────────────────────────────────────────────

/// Enumerable store of all farm tiles in the active room.
///
/// Dense `Vec` ordered by insertion (candidate scans are deterministic) plus
/// a coord index for O(1) interaction lookups.
#[derive(Default)]
pub struct TileRegistry {
    tiles: Vec<FarmTile>,
    by_coord: CoordMap,
}

impl TileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tile.  Duplicate coordinates are a data error.
    pub fn insert(&mut self, tile: FarmTile) -> WorldResult<PlotId> {
        if self.by_coord.contains_key(&tile.coord) {
            return Err(WorldError::DuplicatePlot(tile.coord));
        }
        let id = PlotId(self.tiles.len() as u32);
        self.by_coord.insert(tile.coord, id.index());
        self.tiles.push(tile);
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn get(&self, coord: TileCoord) -> Option<&FarmTile> {
        self.by_coord.get(&coord).map(|&i| &self.tiles[i])
    }

    /// All tiles, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &FarmTile> {
        self.tiles.iter()
    }

    /// Coordinates of every tile matching `pred`, in insertion order.
    pub fn candidates(&self, pred: impl Fn(&FarmTile) -> bool) -> Vec<TileCoord> {
        self.tiles
            .iter()
            .filter(|t| pred(t))
            .map(|t| t.coord)
            .collect()
    }

    /// Any tile where work has started but not finished.
    pub fn has_partial_work(&self) -> bool {
        self.tiles.iter().any(FarmTile::partially_worked)
    }

    // ── Interactions ──────────────────────────────────────────────────────

    /// Apply `interaction` at `coord`, validating the flag transition.
    pub fn apply(&mut self, coord: TileCoord, interaction: Interaction) -> WorldResult<()> {
        let idx = *self
            .by_coord
            .get(&coord)
            .ok_or(WorldError::UnknownTile(coord))?;
        let tile = &mut self.tiles[idx];

        let valid = match interaction {
            Interaction::Hoe => tile.needs_hoe(),
            Interaction::Plant => tile.needs_plant(),
            Interaction::Water => tile.needs_water(),
        };
        if !valid {
            return Err(WorldError::InvalidInteraction {
                interaction,
                at: coord,
            });
        }

        match interaction {
            Interaction::Hoe => tile.hoed = true,
            Interaction::Plant => tile.planted = true,
            Interaction::Water => tile.watered = true,
        }
        Ok(())
    }

    pub fn hoe(&mut self, coord: TileCoord) -> WorldResult<()> {
        self.apply(coord, Interaction::Hoe)
    }

    pub fn plant(&mut self, coord: TileCoord) -> WorldResult<()> {
        self.apply(coord, Interaction::Plant)
    }

    pub fn water(&mut self, coord: TileCoord) -> WorldResult<()> {
        self.apply(coord, Interaction::Water)
    }
}
