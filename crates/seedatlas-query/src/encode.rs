//! Result encoding: flattening query results for interchange emission.
//!
//! Pure projection; no validation happens here. The glue layer turns
//! the returned sequences into its interchange format (the CLI emits
//! JSON).

use crate::oracle::TerrainCategory;
use crate::raster::TerrainRaster;
use crate::search::FeatureHit;
use seedatlas_common::FeatureType;
use serde::Serialize;

/// One feature hit, shaped for interchange emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HitRecord {
    /// Feature display name.
    #[serde(rename = "type")]
    pub feature: FeatureType,
    /// X coordinate in block units.
    pub x: i32,
    /// Z coordinate in block units.
    pub z: i32,
}

/// Flattens a raster into its row-major category sequence.
#[must_use]
pub fn raster(raster: TerrainRaster) -> Vec<TerrainCategory> {
    raster.categories
}

/// Projects hits into interchange records, preserving input order.
#[must_use]
pub fn hits(hits: &[FeatureHit]) -> Vec<HitRecord> {
    hits.iter()
        .map(|hit| HitRecord {
            feature: hit.feature,
            x: hit.x,
            z: hit.z,
        })
        .collect()
}
