//! Coordinate types for world blocks, chunks, and placement tiles.

use serde::{Deserialize, Serialize};

/// Side length of a chunk in world units.
pub const CHUNK_SIZE: i32 = 16;

/// A position on the horizontal world plane, in block units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPos {
    /// X coordinate in world space
    pub x: i32,
    /// Z coordinate in world space
    pub z: i32,
}

impl BlockPos {
    /// Creates a new block position.
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Converts to the chunk containing this position.
    #[must_use]
    pub const fn to_chunk(self) -> ChunkPos {
        ChunkPos {
            x: self.x.div_euclid(CHUNK_SIZE),
            z: self.z.div_euclid(CHUNK_SIZE),
        }
    }
}

/// A chunk position (identifies a chunk in the world grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkPos {
    /// X coordinate in chunk space
    pub x: i32,
    /// Z coordinate in chunk space
    pub z: i32,
}

impl ChunkPos {
    /// Creates a new chunk position.
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Converts to the placement tile containing this chunk, for a tile
    /// of `tile_side` chunks.
    #[must_use]
    pub const fn to_tile(self, tile_side: i32) -> TilePos {
        TilePos {
            x: self.x.div_euclid(tile_side),
            z: self.z.div_euclid(tile_side),
        }
    }

    /// Converts to the world position of this chunk's north-west corner.
    #[must_use]
    pub const fn to_block(self) -> BlockPos {
        BlockPos {
            x: self.x * CHUNK_SIZE,
            z: self.z * CHUNK_SIZE,
        }
    }
}

/// A placement-tile position for some feature type's tiling grid.
///
/// Tiles are square regions of `tile_side` chunks; each feature type has
/// its own tile side length, so a `TilePos` is only meaningful together
/// with the tiling it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TilePos {
    /// X coordinate in tile space
    pub x: i32,
    /// Z coordinate in tile space
    pub z: i32,
}

impl TilePos {
    /// Creates a new tile position.
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }
}

/// An axis-aligned query rectangle on the world plane.
///
/// Denotes the half-open region `[x, x + sx) × [z, z + sz)` in block
/// units. A rectangle with `sx <= 0` or `sz <= 0` denotes the empty
/// region; queries over it return empty results rather than errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// West edge, in block units.
    pub x: i32,
    /// North edge, in block units.
    pub z: i32,
    /// Extent along X, in block units.
    pub sx: i32,
    /// Extent along Z, in block units.
    pub sz: i32,
}

impl Rect {
    /// Creates a new rectangle from origin and size.
    #[must_use]
    pub const fn new(x: i32, z: i32, sx: i32, sz: i32) -> Self {
        Self { x, z, sx, sz }
    }

    /// Exclusive east edge (`x + sx`).
    #[must_use]
    pub const fn x1(&self) -> i32 {
        self.x + self.sx
    }

    /// Exclusive south edge (`z + sz`).
    #[must_use]
    pub const fn z1(&self) -> i32 {
        self.z + self.sz
    }

    /// Whether the rectangle denotes the empty region.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sx <= 0 || self.sz <= 0
    }

    /// Area in cells, as a widened integer so large regions cannot
    /// overflow.
    #[must_use]
    pub const fn area(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            self.sx as i64 * self.sz as i64
        }
    }

    /// Whether a world position lies inside the half-open bounds.
    #[must_use]
    pub const fn contains(&self, x: i32, z: i32) -> bool {
        x >= self.x && x < self.x1() && z >= self.z && z < self.z1()
    }
}
