//! The bundled world generator: a [`WorldOracle`] backend.
//!
//! Binds once per invocation to a (seed, version, dimension) triple and
//! serves terrain sampling, candidate placement, and viability checks
//! from self-contained deterministic state. Dropping the generator
//! releases everything it owns.

use crate::placement;
use crate::terrain::TerrainFields;
use seedatlas_common::FeatureType;
use seedatlas_query::{
    registry, CandidatePos, QueryContext, SampleRange, TerrainCategory, TileConfig, WorldOracle,
};
use tracing::info;

/// Deterministic generation engine bound to one query context.
#[derive(Debug)]
pub struct WorldGenerator {
    ctx: QueryContext,
    fields: TerrainFields,
}

impl WorldGenerator {
    /// Binds the generator for the given context.
    ///
    /// Binding always succeeds, for any seed and any supported version;
    /// unsupported selectors are remapped to their defaults before a
    /// context is built.
    #[must_use]
    pub fn bind(ctx: QueryContext) -> Self {
        let fields = TerrainFields::new(ctx.seed, ctx.version, ctx.dimension);
        info!(
            seed = ctx.seed,
            version = %ctx.version,
            dimension = %ctx.dimension,
            "world generator bound"
        );
        Self { ctx, fields }
    }

    /// The context this generator is bound to.
    #[must_use]
    pub const fn context(&self) -> &QueryContext {
        &self.ctx
    }

    /// Classifies a single world point.
    #[must_use]
    pub fn category_at(&self, x: i32, z: i32) -> TerrainCategory {
        self.fields.category_at(x, z)
    }
}

impl WorldOracle for WorldGenerator {
    fn sample_raster(&self, range: &SampleRange) -> Vec<TerrainCategory> {
        let mut out = Vec::with_capacity(range.len());
        for j in 0..range.sz.max(0) {
            for i in 0..range.sx.max(0) {
                let x = range.x + i * range.scale;
                let z = range.z + j * range.scale;
                out.push(self.fields.category_at(x, z));
            }
        }
        out
    }

    fn tile_config(&self, feature: FeatureType) -> Option<TileConfig> {
        registry::tile_config(feature, self.ctx.version)
    }

    fn candidate_position(
        &self,
        feature: FeatureType,
        tile_x: i32,
        tile_z: i32,
    ) -> Option<CandidatePos> {
        let tiling = self.tile_config(feature)?;
        placement::candidate(feature, self.ctx.seed, tile_x, tile_z, tiling.side)
    }

    fn is_viable(&self, feature: FeatureType, x: i32, z: i32) -> bool {
        placement::viable_category(feature, self.fields.category_at(x, z))
    }
}
