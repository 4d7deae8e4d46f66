//! Command-line argument parsing for Seedatlas.

use clap::{Args, Parser, Subcommand};
use seedatlas_query::{Dimension, McVersion, QueryContext, Rect};

/// Seedatlas command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "seedatlas", about = "Deterministic seed-map queries", version)]
pub struct Cli {
    /// Query to run.
    #[command(subcommand)]
    pub command: Command,
}

/// The two query pipelines.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sample terrain categories over a rectangle.
    Biomes(BiomesArgs),
    /// Search for structure placements inside a rectangle.
    Structures(StructuresArgs),
}

/// Arguments shared by both queries.
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// World seed.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Numeric version identifier (118, 119, 120, 121).
    /// Unknown identifiers fall back to 120.
    #[arg(long, default_value_t = 120)]
    pub version: i32,

    /// West edge of the query rectangle, in blocks.
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub x: i32,

    /// North edge of the query rectangle, in blocks.
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub z: i32,

    /// Dimension selector (overworld, nether, end).
    /// Unknown selectors fall back to overworld.
    #[arg(long, default_value = "overworld")]
    pub dimension: String,
}

impl CommonArgs {
    /// Builds the query context, applying the version and dimension
    /// fallback policies at this boundary.
    #[must_use]
    pub fn context(&self) -> QueryContext {
        QueryContext::new(
            self.seed,
            McVersion::from_id(self.version),
            Dimension::from_name(&self.dimension),
        )
    }
}

/// Arguments for the biome raster query.
#[derive(Args, Debug)]
pub struct BiomesArgs {
    /// Shared query arguments.
    #[command(flatten)]
    pub common: CommonArgs,

    /// World units per output cell side.
    #[arg(long, default_value_t = 1)]
    pub scale: i32,

    /// Output cell count along X.
    #[arg(long, default_value_t = 256)]
    pub sx: i32,

    /// Output cell count along Z.
    #[arg(long, default_value_t = 256)]
    pub sz: i32,
}

impl BiomesArgs {
    /// The query rectangle (sizes are output cell counts).
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.common.x, self.common.z, self.sx, self.sz)
    }
}

/// Arguments for the structure search.
#[derive(Args, Debug)]
pub struct StructuresArgs {
    /// Shared query arguments.
    #[command(flatten)]
    pub common: CommonArgs,

    /// Extent along X, in blocks.
    #[arg(long, default_value_t = 1024)]
    pub sx: i32,

    /// Extent along Z, in blocks.
    #[arg(long, default_value_t = 1024)]
    pub sz: i32,
}

impl StructuresArgs {
    /// The query rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.common.x, self.common.z, self.sx, self.sz)
    }
}
