//! Terrain classification from layered seeded noise.
//!
//! Each dimension classifies the horizontal plane into opaque category
//! identifiers from a handful of low-frequency climate fields. The
//! identifiers follow the conventional biome numbering so rasters read
//! naturally next to maps produced by other generators.

use noise::{Fbm, MultiFractal, NoiseFn, Perlin};
use seedatlas_common::{Dimension, McVersion};
use seedatlas_query::TerrainCategory;

/// Terrain category identifiers emitted by the bundled generator.
pub mod categories {
    use seedatlas_query::TerrainCategory;

    /// Ocean.
    pub const OCEAN: TerrainCategory = 0;
    /// Plains.
    pub const PLAINS: TerrainCategory = 1;
    /// Desert.
    pub const DESERT: TerrainCategory = 2;
    /// Forest.
    pub const FOREST: TerrainCategory = 4;
    /// Taiga.
    pub const TAIGA: TerrainCategory = 5;
    /// Swamp.
    pub const SWAMP: TerrainCategory = 6;
    /// River.
    pub const RIVER: TerrainCategory = 7;
    /// Nether wastes.
    pub const NETHER_WASTES: TerrainCategory = 8;
    /// The end's central island.
    pub const THE_END: TerrainCategory = 9;
    /// Snowy tundra.
    pub const SNOWY_TUNDRA: TerrainCategory = 12;
    /// Beach.
    pub const BEACH: TerrainCategory = 16;
    /// Jungle.
    pub const JUNGLE: TerrainCategory = 21;
    /// Deep ocean.
    pub const DEEP_OCEAN: TerrainCategory = 24;
    /// Dark forest.
    pub const DARK_FOREST: TerrainCategory = 29;
    /// Savanna.
    pub const SAVANNA: TerrainCategory = 35;
    /// Badlands.
    pub const BADLANDS: TerrainCategory = 37;
    /// Small end islands.
    pub const SMALL_END_ISLANDS: TerrainCategory = 40;
    /// End midlands.
    pub const END_MIDLANDS: TerrainCategory = 41;
    /// End highlands.
    pub const END_HIGHLANDS: TerrainCategory = 42;
    /// End barrens.
    pub const END_BARRENS: TerrainCategory = 43;
    /// Soul sand valley.
    pub const SOUL_SAND_VALLEY: TerrainCategory = 170;
    /// Crimson forest.
    pub const CRIMSON_FOREST: TerrainCategory = 171;
    /// Warped forest.
    pub const WARPED_FOREST: TerrainCategory = 172;
    /// Basalt deltas.
    pub const BASALT_DELTAS: TerrainCategory = 173;
    /// Meadow.
    pub const MEADOW: TerrainCategory = 177;
    /// Stony peaks.
    pub const STONY_PEAKS: TerrainCategory = 182;
    /// Mangrove swamp (1.19+).
    pub const MANGROVE_SWAMP: TerrainCategory = 184;
    /// Cherry grove (1.20+).
    pub const CHERRY_GROVE: TerrainCategory = 185;
    /// Pale garden (1.21+).
    pub const PALE_GARDEN: TerrainCategory = 186;
}

use self::categories as cat;

/// Derives a 32-bit noise seed from the world seed and a field salt.
fn field_seed(seed: u64, salt: u64) -> u32 {
    let mut s = seed ^ salt.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    s ^= s >> 33;
    s = s.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
    s ^= s >> 33;
    (s & 0xFFFF_FFFF) as u32
}

/// Climate fields for one bound (seed, version, dimension).
///
/// Several independent seeded noise fields are combined through fixed
/// thresholds into a category id, with per-field seed offsets so the
/// fields decorrelate.
pub struct TerrainFields {
    continents: Fbm<Perlin>,
    temperature: Fbm<Perlin>,
    humidity: Fbm<Perlin>,
    ridges: Fbm<Perlin>,
    version: McVersion,
    dimension: Dimension,
}

impl std::fmt::Debug for TerrainFields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerrainFields")
            .field("version", &self.version)
            .field("dimension", &self.dimension)
            .finish_non_exhaustive()
    }
}

impl TerrainFields {
    /// Builds the climate fields for a seed, version, and dimension.
    #[must_use]
    pub fn new(seed: u64, version: McVersion, dimension: Dimension) -> Self {
        // Each dimension gets decorrelated fields from the same seed.
        let dim_salt = (dimension as u64 + 1).wrapping_mul(0xA076_1D64_78BD_642F);
        let salted = seed ^ dim_salt;
        Self {
            continents: Fbm::<Perlin>::new(field_seed(salted, 1))
                .set_octaves(4)
                .set_frequency(0.0008),
            temperature: Fbm::<Perlin>::new(field_seed(salted, 2))
                .set_octaves(3)
                .set_frequency(0.0005),
            humidity: Fbm::<Perlin>::new(field_seed(salted, 3))
                .set_octaves(3)
                .set_frequency(0.0006),
            ridges: Fbm::<Perlin>::new(field_seed(salted, 4))
                .set_octaves(4)
                .set_frequency(0.002),
            version,
            dimension,
        }
    }

    /// Classifies the world point (x, z).
    #[must_use]
    pub fn category_at(&self, x: i32, z: i32) -> TerrainCategory {
        match self.dimension {
            Dimension::Overworld => self.overworld_category(x, z),
            Dimension::Nether => self.nether_category(x, z),
            Dimension::End => self.end_category(x, z),
        }
    }

    fn overworld_category(&self, x: i32, z: i32) -> TerrainCategory {
        let p = [f64::from(x), f64::from(z)];
        let c = self.continents.get(p);
        let t = self.temperature.get(p);
        let h = self.humidity.get(p);
        let r = self.ridges.get(p);

        if c < -0.45 {
            return cat::DEEP_OCEAN;
        }
        if c < -0.22 {
            return cat::OCEAN;
        }
        if c < -0.18 {
            return cat::BEACH;
        }
        if r.abs() < 0.035 {
            return cat::RIVER;
        }
        if r > 0.55 {
            if self.version >= McVersion::V1_20 && h > 0.35 {
                return cat::CHERRY_GROVE;
            }
            return cat::STONY_PEAKS;
        }
        if r > 0.4 {
            return cat::MEADOW;
        }

        if t < -0.4 {
            return cat::SNOWY_TUNDRA;
        }
        if t < -0.15 {
            return cat::TAIGA;
        }
        if t > 0.45 {
            // Hot band.
            return if h < -0.3 {
                if r < -0.4 {
                    cat::BADLANDS
                } else {
                    cat::DESERT
                }
            } else if h < 0.0 {
                cat::SAVANNA
            } else if h < 0.35 {
                cat::JUNGLE
            } else if self.version >= McVersion::V1_19 {
                cat::MANGROVE_SWAMP
            } else {
                cat::SWAMP
            };
        }

        // Temperate band.
        if h < -0.35 {
            cat::PLAINS
        } else if h < 0.2 {
            cat::FOREST
        } else if h < 0.45 {
            if self.version >= McVersion::V1_21 && h > 0.42 {
                cat::PALE_GARDEN
            } else {
                cat::DARK_FOREST
            }
        } else {
            cat::SWAMP
        }
    }

    fn nether_category(&self, x: i32, z: i32) -> TerrainCategory {
        let p = [f64::from(x), f64::from(z)];
        let t = self.temperature.get(p);
        let h = self.humidity.get(p);
        let r = self.ridges.get(p);

        if r > 0.5 {
            cat::BASALT_DELTAS
        } else if t < -0.3 {
            cat::SOUL_SAND_VALLEY
        } else if h > 0.3 {
            if t > 0.2 {
                cat::CRIMSON_FOREST
            } else {
                cat::WARPED_FOREST
            }
        } else {
            cat::NETHER_WASTES
        }
    }

    fn end_category(&self, x: i32, z: i32) -> TerrainCategory {
        // The central island is fixed terrain; outer terrain follows the
        // continental field.
        let d2 = f64::from(x) * f64::from(x) + f64::from(z) * f64::from(z);
        if d2 < 1000.0 * 1000.0 {
            return cat::THE_END;
        }
        let n = self.continents.get([f64::from(x), f64::from(z)]);
        if n > 0.25 {
            cat::END_HIGHLANDS
        } else if n > -0.1 {
            cat::END_MIDLANDS
        } else if n > -0.4 {
            cat::END_BARRENS
        } else {
            cat::SMALL_END_ISLANDS
        }
    }
}
