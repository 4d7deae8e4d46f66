//! The generation-oracle interface and query binding context.
//!
//! The oracle is the deterministic generation engine: it classifies
//! terrain, proposes structure candidates inside placement tiles, and
//! vets candidate positions for viability. The query layer never looks
//! inside it; everything here is expressed against [`WorldOracle`] so the
//! raster and search logic can run against the bundled backend or a test
//! stub interchangeably.

use seedatlas_common::{Dimension, FeatureType, McVersion, Rect};
use serde::{Deserialize, Serialize};

/// An opaque terrain classification for a sampled world location.
///
/// The query layer passes these through untouched; only the oracle
/// assigns meaning to individual values.
pub type TerrainCategory = i32;

/// Vertical plane used for terrain sampling, in block units.
pub const SEA_LEVEL: i32 = 63;

/// Everything needed to bind an oracle for one invocation.
///
/// Version and dimension fallback happens before this struct is built;
/// a context always carries supported values, and binding an oracle to
/// one always succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryContext {
    /// World seed.
    pub seed: u64,
    /// Generation ruleset in effect.
    pub version: McVersion,
    /// Dimension to query.
    pub dimension: Dimension,
}

impl QueryContext {
    /// Creates a context for the given seed, version, and dimension.
    #[must_use]
    pub const fn new(seed: u64, version: McVersion, dimension: Dimension) -> Self {
        Self {
            seed,
            version,
            dimension,
        }
    }
}

impl Default for QueryContext {
    fn default() -> Self {
        Self {
            seed: 0,
            version: McVersion::DEFAULT,
            dimension: Dimension::Overworld,
        }
    }
}

/// A scaled sampling range handed to the oracle for raster queries.
///
/// `sx × sz` cells are sampled; cell `(i, j)` represents the world point
/// `(x + i·scale, z + j·scale)` on the horizontal plane `y` (vertical
/// extent `sy`, always 1 here).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRange {
    /// Horizontal scale factor (world units per cell side).
    pub scale: i32,
    /// West edge, in block units.
    pub x: i32,
    /// North edge, in block units.
    pub z: i32,
    /// Cell count along X.
    pub sx: i32,
    /// Cell count along Z.
    pub sz: i32,
    /// Vertical sampling plane.
    pub y: i32,
    /// Vertical extent in planes.
    pub sy: i32,
}

impl SampleRange {
    /// Builds the sea-level sampling range for a query rectangle.
    #[must_use]
    pub const fn at_sea_level(rect: Rect, scale: i32) -> Self {
        Self {
            scale,
            x: rect.x,
            z: rect.z,
            sx: rect.sx,
            sz: rect.sz,
            y: SEA_LEVEL,
            sy: 1,
        }
    }

    /// Number of cells this range samples.
    #[must_use]
    pub const fn len(&self) -> usize {
        if self.sx <= 0 || self.sz <= 0 {
            0
        } else {
            self.sx as usize * self.sz as usize
        }
    }

    /// Whether the range samples no cells.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Tiling configuration for one (feature type, version) pair.
///
/// Placement tiles are squares of `side` chunks; each tile holds at most
/// one candidate instance of its feature type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileConfig {
    /// Tile side length, in chunk units.
    pub side: i32,
}

impl TileConfig {
    /// Creates a tiling configuration.
    #[must_use]
    pub const fn new(side: i32) -> Self {
        Self { side }
    }
}

/// A world position proposed by the oracle for a structure candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidatePos {
    /// X coordinate in block units.
    pub x: i32,
    /// Z coordinate in block units.
    pub z: i32,
}

impl CandidatePos {
    /// Creates a candidate position.
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }
}

/// The deterministic generation engine, bound to one seed, version, and
/// dimension.
///
/// All operations are pure functions of the bound context and their
/// arguments; repeated calls return identical results. Binding itself is
/// backend-specific (each backend exposes its own constructor taking a
/// [`QueryContext`]), which keeps this trait implementable by trivial
/// test stubs.
pub trait WorldOracle {
    /// Samples terrain categories for an entire range in one call.
    ///
    /// Returns exactly `range.len()` values in row-major order.
    fn sample_raster(&self, range: &SampleRange) -> Vec<TerrainCategory>;

    /// Tiling configuration for a feature type under the bound version.
    ///
    /// `None` means the type does not exist in this version and is
    /// skipped by searches; absence is an ordinary outcome, not an error.
    fn tile_config(&self, feature: FeatureType) -> Option<TileConfig>;

    /// The at-most-one candidate position for a feature type in a
    /// placement tile.
    ///
    /// `None` means the placement rules generate no instance in that
    /// tile. A returned position may lie anywhere inside the tile,
    /// including against its far edges.
    fn candidate_position(&self, feature: FeatureType, tile_x: i32, tile_z: i32)
        -> Option<CandidatePos>;

    /// Whether a candidate position satisfies the terrain and structural
    /// preconditions for actually spawning the feature.
    fn is_viable(&self, feature: FeatureType, x: i32, z: i32) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_range_from_rect() {
        let range = SampleRange::at_sea_level(Rect::new(-32, 16, 8, 4), 4);
        assert_eq!(range.x, -32);
        assert_eq!(range.z, 16);
        assert_eq!(range.sx, 8);
        assert_eq!(range.sz, 4);
        assert_eq!(range.y, SEA_LEVEL);
        assert_eq!(range.sy, 1);
        assert_eq!(range.len(), 32);
    }

    #[test]
    fn test_empty_sample_range() {
        let range = SampleRange::at_sea_level(Rect::new(0, 0, 0, 100), 1);
        assert!(range.is_empty());
        assert_eq!(range.len(), 0);
    }

    #[test]
    fn test_default_context() {
        let ctx = QueryContext::default();
        assert_eq!(ctx.seed, 0);
        assert_eq!(ctx.version, McVersion::DEFAULT);
        assert_eq!(ctx.dimension, Dimension::Overworld);
    }
}
