//! Static per-room collision data.

use croft_core::TileCoord;

/// The permanent obstacle matrix a room's walkability grid is built from.
///
/// `blocked` is row-major; `true` marks a permanent obstacle (wall, water,
/// furniture).  This is the map-loading collaborator's output format — the
/// grid manager consumes [`walkability`][Self::walkability] and owns the
/// live grid from then on.
#[derive(Clone, Debug)]
pub struct RoomMap {
    pub width: usize,
    pub height: usize,
    pub blocked: Vec<bool>,
}

impl RoomMap {
    /// A room with no obstacles.
    pub fn open(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            blocked: vec![false; width * height],
        }
    }

    #[inline]
    pub fn is_blocked(&self, tile: TileCoord) -> bool {
        if tile.x < 0
            || tile.y < 0
            || tile.x as usize >= self.width
            || tile.y as usize >= self.height
        {
            return true;
        }
        self.blocked[tile.y as usize * self.width + tile.x as usize]
    }

    /// Row-major walkability cells (the inverse of `blocked`), ready for
    /// `WalkGrid::new`.
    pub fn walkability(&self) -> Vec<bool> {
        self.blocked.iter().map(|&b| !b).collect()
    }
}
