//! # Seedatlas CLI
//!
//! Thin glue around the query engine: parses arguments, applies the
//! version/dimension fallback policies, binds the bundled generator,
//! runs exactly one query, and prints the JSON-encoded result to
//! stdout. Diagnostics go to stderr so stdout stays clean interchange
//! output.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use seedatlas_query::{encode, raster, search};
use seedatlas_worldgen::WorldGenerator;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Main entry point.
fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("seedatlas=warn".parse()?))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Biomes(args) => {
            let generator = WorldGenerator::bind(args.common.context());
            let sampled = raster::sample(&generator, args.rect(), args.scale)?;
            debug!(cells = sampled.len(), "raster query complete");
            println!("{}", serde_json::to_string(&encode::raster(sampled))?);
        }
        Command::Structures(args) => {
            let ctx = args.common.context();
            let generator = WorldGenerator::bind(ctx);
            let hits = search::search(&generator, ctx.dimension, args.rect())?;
            debug!(hits = hits.len(), "structure search complete");
            println!("{}", serde_json::to_string(&encode::hits(&hits))?);
        }
    }

    Ok(())
}
