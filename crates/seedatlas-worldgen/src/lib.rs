//! # Seedatlas Worldgen
//!
//! The bundled deterministic generation backend. Implements the query
//! layer's oracle interface with self-contained state: layered seeded
//! noise for terrain classification, salted linear-congruential rolls
//! for structure candidates, and terrain-membership viability checks.
//!
//! Queries never depend on this crate's internals; swapping in another
//! oracle implementation changes the worlds, not the query semantics.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod generator;
pub mod placement;
pub mod terrain;

pub use generator::WorldGenerator;
pub use terrain::{categories, TerrainFields};
