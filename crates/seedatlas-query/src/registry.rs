//! Static feature registry: dimension eligibility and tiling table.
//!
//! Eligibility and tiling granularity are version- and dimension-aware
//! static data. Tile side lengths belong to the generation engine's
//! placement rules, but the search layer needs them to enumerate the
//! right tiles, so they are tabulated here and backends delegate to this
//! table unless they carry their own.

use crate::oracle::TileConfig;
use seedatlas_common::{Dimension, FeatureType, McVersion};

/// Feature types searched in the overworld, in search order.
static OVERWORLD_TYPES: [FeatureType; 15] = [
    FeatureType::DesertPyramid,
    FeatureType::JungleTemple,
    FeatureType::SwampHut,
    FeatureType::Igloo,
    FeatureType::Village,
    FeatureType::OceanRuin,
    FeatureType::Shipwreck,
    FeatureType::Monument,
    FeatureType::Mansion,
    FeatureType::Outpost,
    FeatureType::RuinedPortal,
    FeatureType::AncientCity,
    FeatureType::Treasure,
    FeatureType::TrailRuins,
    FeatureType::TrialChambers,
];

/// Feature types searched in the nether, in search order.
static NETHER_TYPES: [FeatureType; 3] = [
    FeatureType::Fortress,
    FeatureType::Bastion,
    FeatureType::RuinedPortalN,
];

/// Feature types searched in the end, in search order.
static END_TYPES: [FeatureType; 1] = [FeatureType::EndCity];

/// One row of the tiling table: a feature type, the first version it
/// generates in, and its tile side length in chunks.
struct TileRow {
    feature: FeatureType,
    introduced: McVersion,
    side: i32,
}

/// Tile side lengths follow the engine's placement spacing per type.
/// Types with side 1 place per chunk. Types missing before their
/// `introduced` version have no tiling there and are skipped entirely.
static TILE_TABLE: [TileRow; 20] = [
    TileRow { feature: FeatureType::DesertPyramid, introduced: McVersion::V1_18, side: 32 },
    TileRow { feature: FeatureType::JungleTemple, introduced: McVersion::V1_18, side: 32 },
    TileRow { feature: FeatureType::SwampHut, introduced: McVersion::V1_18, side: 32 },
    TileRow { feature: FeatureType::Igloo, introduced: McVersion::V1_18, side: 32 },
    TileRow { feature: FeatureType::Village, introduced: McVersion::V1_18, side: 34 },
    TileRow { feature: FeatureType::OceanRuin, introduced: McVersion::V1_18, side: 20 },
    TileRow { feature: FeatureType::Shipwreck, introduced: McVersion::V1_18, side: 24 },
    TileRow { feature: FeatureType::Monument, introduced: McVersion::V1_18, side: 32 },
    TileRow { feature: FeatureType::Mansion, introduced: McVersion::V1_18, side: 80 },
    TileRow { feature: FeatureType::Outpost, introduced: McVersion::V1_18, side: 32 },
    TileRow { feature: FeatureType::RuinedPortal, introduced: McVersion::V1_18, side: 40 },
    TileRow { feature: FeatureType::RuinedPortalN, introduced: McVersion::V1_18, side: 25 },
    TileRow { feature: FeatureType::AncientCity, introduced: McVersion::V1_19, side: 24 },
    TileRow { feature: FeatureType::Treasure, introduced: McVersion::V1_18, side: 1 },
    TileRow { feature: FeatureType::Mineshaft, introduced: McVersion::V1_18, side: 1 },
    TileRow { feature: FeatureType::Fortress, introduced: McVersion::V1_18, side: 27 },
    TileRow { feature: FeatureType::Bastion, introduced: McVersion::V1_18, side: 27 },
    TileRow { feature: FeatureType::EndCity, introduced: McVersion::V1_18, side: 20 },
    TileRow { feature: FeatureType::TrailRuins, introduced: McVersion::V1_20, side: 34 },
    TileRow { feature: FeatureType::TrialChambers, introduced: McVersion::V1_21, side: 34 },
];

/// Feature types searched in a dimension, in fixed search order.
///
/// Search results are ordered by this list first; the list order is part
/// of the query layer's output contract.
#[must_use]
pub fn eligible_types(dimension: Dimension) -> &'static [FeatureType] {
    match dimension {
        Dimension::Overworld => &OVERWORLD_TYPES,
        Dimension::Nether => &NETHER_TYPES,
        Dimension::End => &END_TYPES,
    }
}

/// Tiling configuration for a (feature type, version) pair.
///
/// `None` means the type does not generate in that version; the type is
/// silently excluded from searches, which is an ordinary outcome rather
/// than an error.
#[must_use]
pub fn tile_config(feature: FeatureType, version: McVersion) -> Option<TileConfig> {
    TILE_TABLE
        .iter()
        .find(|row| row.feature == feature)
        .filter(|row| version >= row.introduced)
        .map(|row| TileConfig::new(row.side))
}
