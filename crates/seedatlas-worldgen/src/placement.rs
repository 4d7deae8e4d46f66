//! Deterministic structure placement and viability rules.
//!
//! Candidate positions come from a salted linear-congruential generator
//! keyed by (world seed, tile coordinates, feature salt): every tile
//! rolls its candidate independently, so enumeration order never affects
//! the outcome. Viability is a terrain-category membership check at the
//! candidate position.

use crate::terrain::categories as cat;
use seedatlas_common::{FeatureType, CHUNK_SIZE};
use seedatlas_query::{CandidatePos, TerrainCategory};

const LCG_MULT: u64 = 0x5DEE_CE66D;
const LCG_ADD: u64 = 0xB;
const LCG_MASK: u64 = (1 << 48) - 1;

const TILE_X_SALT: u64 = 341_873_128_712;
const TILE_Z_SALT: u64 = 132_897_987_541;

/// Spawn chance, in percent, for per-chunk feature types (tile side 1).
const CHUNK_FEATURE_CHANCE: i32 = 2;

/// A 48-bit linear-congruential generator seeded per placement tile.
#[derive(Debug, Clone)]
pub struct TileRandom {
    state: u64,
}

impl TileRandom {
    /// Seeds the generator for one (seed, tile, feature-salt) triple.
    #[must_use]
    pub fn for_tile(seed: u64, tile_x: i32, tile_z: i32, salt: u64) -> Self {
        let mixed = seed
            .wrapping_add((tile_x as i64 as u64).wrapping_mul(TILE_X_SALT))
            .wrapping_add((tile_z as i64 as u64).wrapping_mul(TILE_Z_SALT))
            .wrapping_add(salt);
        Self {
            state: (mixed ^ LCG_MULT) & LCG_MASK,
        }
    }

    fn next_bits(&mut self, bits: u32) -> u32 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULT)
            .wrapping_add(LCG_ADD)
            & LCG_MASK;
        (self.state >> (48 - bits)) as u32
    }

    /// Uniform integer in `[0, bound)` via multiply-shift.
    #[must_use]
    pub fn next_int(&mut self, bound: i32) -> i32 {
        debug_assert!(bound > 0);
        ((u64::from(self.next_bits(31)) * bound as u64) >> 31) as i32
    }
}

/// Per-type placement salt, decorrelating the tiling grids of feature
/// types that share a tile side.
const fn salt(feature: FeatureType) -> u64 {
    match feature {
        FeatureType::DesertPyramid => 14_357_617,
        FeatureType::Igloo => 14_357_618,
        FeatureType::JungleTemple => 14_357_619,
        FeatureType::SwampHut => 14_357_620,
        FeatureType::OceanRuin => 14_357_621,
        FeatureType::Village => 10_387_312,
        FeatureType::Monument => 10_387_313,
        FeatureType::Mansion => 10_387_319,
        FeatureType::Treasure => 10_387_320,
        FeatureType::Shipwreck => 165_745_295,
        FeatureType::Outpost => 165_745_296,
        FeatureType::RuinedPortal | FeatureType::RuinedPortalN => 34_222_645,
        FeatureType::AncientCity => 20_083_232,
        FeatureType::Mineshaft => 0,
        FeatureType::Fortress | FeatureType::Bastion => 30_084_232,
        FeatureType::EndCity => 10_387_314,
        FeatureType::TrailRuins => 83_469_867,
        FeatureType::TrialChambers => 94_251_327,
    }
}

/// The at-most-one candidate for a feature type in a placement tile of
/// `side` chunks.
///
/// Region-tiled types always produce a candidate (viability prunes
/// later); per-chunk types (side 1) gate on a spawn roll first, so their
/// density stays far below one per chunk.
#[must_use]
pub fn candidate(
    feature: FeatureType,
    seed: u64,
    tile_x: i32,
    tile_z: i32,
    side: i32,
) -> Option<CandidatePos> {
    let mut rng = TileRandom::for_tile(seed, tile_x, tile_z, salt(feature));
    if side == 1 && rng.next_int(100) >= CHUNK_FEATURE_CHANCE {
        return None;
    }
    let off_x = rng.next_int(side);
    let off_z = rng.next_int(side);
    Some(CandidatePos::new(
        (tile_x * side + off_x) * CHUNK_SIZE,
        (tile_z * side + off_z) * CHUNK_SIZE,
    ))
}

/// Whether a terrain category satisfies a feature type's placement
/// preconditions.
#[must_use]
pub fn viable_category(feature: FeatureType, category: TerrainCategory) -> bool {
    match feature {
        FeatureType::DesertPyramid => matches!(category, cat::DESERT | cat::BADLANDS),
        FeatureType::JungleTemple => category == cat::JUNGLE,
        FeatureType::SwampHut => matches!(category, cat::SWAMP | cat::MANGROVE_SWAMP),
        FeatureType::Igloo => category == cat::SNOWY_TUNDRA,
        FeatureType::Village => matches!(
            category,
            cat::PLAINS | cat::DESERT | cat::SAVANNA | cat::TAIGA | cat::SNOWY_TUNDRA | cat::MEADOW
        ),
        FeatureType::OceanRuin => matches!(category, cat::OCEAN | cat::DEEP_OCEAN),
        FeatureType::Shipwreck => matches!(category, cat::OCEAN | cat::DEEP_OCEAN | cat::BEACH),
        FeatureType::Monument => category == cat::DEEP_OCEAN,
        FeatureType::Mansion => matches!(category, cat::DARK_FOREST | cat::PALE_GARDEN),
        FeatureType::Outpost => !matches!(
            category,
            cat::OCEAN | cat::DEEP_OCEAN | cat::RIVER | cat::BEACH
        ),
        FeatureType::Treasure => category == cat::BEACH,
        FeatureType::TrailRuins => matches!(category, cat::TAIGA | cat::JUNGLE | cat::FOREST),
        FeatureType::EndCity => matches!(category, cat::END_HIGHLANDS | cat::END_MIDLANDS),
        FeatureType::Bastion => category != cat::BASALT_DELTAS,
        // Underground or omnipresent types place on any terrain.
        FeatureType::RuinedPortal
        | FeatureType::RuinedPortalN
        | FeatureType::AncientCity
        | FeatureType::Mineshaft
        | FeatureType::Fortress
        | FeatureType::TrialChambers => true,
    }
}
