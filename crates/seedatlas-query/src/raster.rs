//! Biome raster query: terrain categories over a rectangle.

use crate::oracle::{SampleRange, TerrainCategory, WorldOracle};
use seedatlas_common::{QueryError, QueryResult, Rect};
use tracing::debug;

/// Maximum cells a single raster query may request.
///
/// Mirrors the limit the serving layer enforced before invoking the
/// generator; checked here so every embedder gets the same guardrail.
pub const MAX_RASTER_CELLS: i64 = 250_000;

/// Terrain categories for a rectangular region, row-major.
///
/// Cell `(i, j)` (column `i`, row `j`) is stored at `j * width + i` and
/// represents the world point `(origin_x + i·scale, origin_z + j·scale)`
/// at sea level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerrainRaster {
    /// Sampled categories, `width * height` entries.
    pub categories: Vec<TerrainCategory>,
    /// Cell count along X.
    pub width: i32,
    /// Cell count along Z.
    pub height: i32,
    /// World X origin of cell (0, 0).
    pub origin_x: i32,
    /// World Z origin of cell (0, 0).
    pub origin_z: i32,
    /// World units per cell side.
    pub scale: i32,
}

impl TerrainRaster {
    /// Category at local cell (x, z), or `None` outside the raster.
    #[must_use]
    pub fn get(&self, x: i32, z: i32) -> Option<TerrainCategory> {
        if x < 0 || x >= self.width || z < 0 || z >= self.height {
            return None;
        }
        Some(self.categories[(z * self.width + x) as usize])
    }

    /// Total cell count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the raster holds no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Samples terrain categories for `rect` at the given resolution.
///
/// `rect.sx` and `rect.sz` are output cell counts; `scale` only widens
/// the world-space stride between samples. The whole rectangle goes to
/// the oracle in one call and the returned buffer is passed through
/// unmodified. An empty rectangle yields an empty raster without
/// consulting the oracle; negative origins are valid.
pub fn sample<O: WorldOracle>(oracle: &O, rect: Rect, scale: i32) -> QueryResult<TerrainRaster> {
    if rect.is_empty() {
        return Ok(TerrainRaster {
            categories: Vec::new(),
            width: 0,
            height: 0,
            origin_x: rect.x,
            origin_z: rect.z,
            scale,
        });
    }

    let cells = rect.area();
    if cells > MAX_RASTER_CELLS {
        return Err(QueryError::RegionTooLarge {
            cells,
            limit: MAX_RASTER_CELLS,
        });
    }

    let range = SampleRange::at_sea_level(rect, scale);
    debug!(
        x = rect.x,
        z = rect.z,
        sx = rect.sx,
        sz = rect.sz,
        scale,
        "sampling terrain raster"
    );
    let categories = oracle.sample_raster(&range);

    Ok(TerrainRaster {
        categories,
        width: rect.sx,
        height: rect.sz,
        origin_x: rect.x,
        origin_z: rect.z,
        scale,
    })
}
