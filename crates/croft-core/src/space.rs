//! Tile and pixel geometry.
//!
//! The world is a fixed grid of square tiles, `TILE_SIZE` pixels on a side.
//! Agents move in continuous pixel space (`Vec2`) but decide in tile space
//! (`TileCoord`); the conversions live here so every crate agrees on them.
//!
//! `TileCoord` is signed: an agent shoved into a map edge by a collision can
//! momentarily map to a coordinate outside the grid, and callers must be able
//! to represent (and reject) that rather than panic on an unsigned underflow.

use std::fmt;

/// Pixels per tile edge.
pub const TILE_SIZE: f32 = 64.0;

// ── Vec2 ──────────────────────────────────────────────────────────────────────

/// A 2-D pixel-space vector (position, displacement, or direction).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (other - self).length()
    }

    /// The tile this pixel position falls in (floor division).
    #[inline]
    pub fn tile(self) -> TileCoord {
        TileCoord::new(
            (self.x / TILE_SIZE).floor() as i32,
            (self.y / TILE_SIZE).floor() as i32,
        )
    }

    /// Round to the nearest axis-aligned unit vector.
    ///
    /// Ties go to the horizontal axis; the zero vector stays zero.  Used for
    /// the render-facing direction so diagonally biased motion does not
    /// flicker between two facings when one axis dominates.
    pub fn dominant_axis(self) -> Vec2 {
        if self.x == 0.0 && self.y == 0.0 {
            return Vec2::ZERO;
        }
        if self.x.abs() >= self.y.abs() {
            Vec2::new(self.x.signum(), 0.0)
        } else {
            Vec2::new(0.0, self.y.signum())
        }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl std::ops::AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

// ── TileCoord ─────────────────────────────────────────────────────────────────

/// A tile-grid coordinate.  May lie outside the active room's bounds.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileCoord {
    pub x: i32,
    pub y: i32,
}

impl TileCoord {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Pixel position of this tile's center.
    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(
            (self.x as f32 + 0.5) * TILE_SIZE,
            (self.y as f32 + 0.5) * TILE_SIZE,
        )
    }

    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> TileCoord {
        TileCoord::new(self.x + dx, self.y + dy)
    }

    /// Chebyshev (chessboard) distance — the metric of square search windows.
    #[inline]
    pub fn chebyshev(self, other: TileCoord) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

// ── Rect ──────────────────────────────────────────────────────────────────────

/// An axis-aligned pixel-space rectangle (hitbox).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    #[inline]
    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    /// Strict overlap test — rectangles that merely share an edge do not
    /// collide.
    #[inline]
    pub fn intersects(self, other: Rect) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    #[inline]
    pub fn translated(self, delta: Vec2) -> Rect {
        Rect {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// Every tile this rectangle overlaps.  A hitbox straddling a tile
    /// boundary occupies all the tiles it touches (the agent's "footprint").
    pub fn tiles(self) -> Vec<TileCoord> {
        let lo = self.min.tile();
        // Shrink by an epsilon so a max edge exactly on a tile boundary does
        // not claim the next tile over.
        let hi = (self.max - Vec2::new(1e-3, 1e-3)).tile();
        let mut out = Vec::with_capacity(
            ((hi.x - lo.x + 1).max(0) * (hi.y - lo.y + 1).max(0)) as usize,
        );
        for y in lo.y..=hi.y {
            for x in lo.x..=hi.x {
                out.push(TileCoord::new(x, y));
            }
        }
        out
    }
}

// ── Facing ────────────────────────────────────────────────────────────────────

/// The four render facings.  Animation frame selection (out of scope here)
/// keys off this value.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Facing {
    #[default]
    Down,
    Up,
    Left,
    Right,
}

impl Facing {
    /// Facing nearest to an arbitrary direction vector.
    ///
    /// Zero input keeps the default `Down`.  Ties prefer the horizontal axis,
    /// matching [`Vec2::dominant_axis`].
    pub fn from_vec(dir: Vec2) -> Facing {
        let axis = dir.dominant_axis();
        if axis.x > 0.0 {
            Facing::Right
        } else if axis.x < 0.0 {
            Facing::Left
        } else if axis.y < 0.0 {
            Facing::Up
        } else {
            Facing::Down
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Facing::Down => "down",
            Facing::Up => "up",
            Facing::Left => "left",
            Facing::Right => "right",
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
