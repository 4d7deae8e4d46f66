//! # Seedatlas Query
//!
//! Deterministic spatial queries over a seeded, procedurally generated
//! world: a terrain-category raster over a rectangle, and a search for
//! structure placements inside a rectangle. Both are pure functions of
//! (seed, version, dimension, rectangle[, scale]) and run against an
//! injected generation oracle; this crate never looks inside the
//! generator itself.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod encode;
pub mod oracle;
pub mod raster;
pub mod registry;
pub mod search;

pub use oracle::{
    CandidatePos, QueryContext, SampleRange, TerrainCategory, TileConfig, WorldOracle, SEA_LEVEL,
};
pub use raster::TerrainRaster;
pub use search::FeatureHit;

// Re-export the shared types callers need alongside the query surface.
pub use seedatlas_common::{Dimension, FeatureType, McVersion, QueryError, QueryResult, Rect};
