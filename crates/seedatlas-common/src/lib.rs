//! # Seedatlas Common
//!
//! Shared types for the Seedatlas query engine:
//! - Coordinate types and conversions (world blocks, chunks, placement tiles)
//! - Query rectangle with half-open bounds
//! - Version and dimension selectors with their documented fallback policies
//! - Feature (structure) type identifiers
//! - Common error types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod coords;
pub mod dimension;
pub mod error;
pub mod feature;
pub mod version;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::coords::*;
    pub use crate::dimension::*;
    pub use crate::error::*;
    pub use crate::feature::*;
    pub use crate::version::*;
}

pub use prelude::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_to_chunk_conversion() {
        let block = BlockPos::new(100, -200);
        let chunk = block.to_chunk();

        assert_eq!(chunk, ChunkPos::new(6, -13));
    }

    #[test]
    fn test_chunk_to_tile_conversion() {
        let chunk = ChunkPos::new(100, -1);
        assert_eq!(chunk.to_tile(32), TilePos::new(3, -1));
    }

    #[test]
    fn test_version_fallback() {
        assert_eq!(McVersion::from_id(118), McVersion::V1_18);
        assert_eq!(McVersion::from_id(121), McVersion::V1_21);
        // Unrecognized identifiers resolve to the default ruleset.
        assert_eq!(McVersion::from_id(0), McVersion::DEFAULT);
        assert_eq!(McVersion::from_id(9999), McVersion::V1_20);
    }

    #[test]
    fn test_dimension_fallback() {
        assert_eq!(Dimension::from_name("nether"), Dimension::Nether);
        assert_eq!(Dimension::from_name("end"), Dimension::End);
        assert_eq!(Dimension::from_name("overworld"), Dimension::Overworld);
        assert_eq!(Dimension::from_name("aether"), Dimension::Overworld);
    }
}
