//! Structure search: feature placements inside a rectangle.
//!
//! For each feature type eligible in the queried dimension, the search
//! enumerates the placement tiles covering the rectangle (plus one tile
//! of margin on every side), asks the oracle for the candidate position
//! in each tile, keeps candidates strictly inside the rectangle's
//! half-open bounds, and re-checks viability before reporting a hit.

use std::collections::HashSet;

use crate::oracle::WorldOracle;
use crate::registry;
use seedatlas_common::{Dimension, FeatureType, QueryError, QueryResult, Rect, CHUNK_SIZE};
use tracing::debug;

/// Maximum area, in world cells, a single structure search may cover.
///
/// Mirrors the limit the serving layer enforced before invoking the
/// generator.
pub const MAX_SEARCH_AREA: i64 = 400_000_001;

/// A discovered feature instance.
///
/// Produced only by [`search`]; coordinates always lie strictly inside
/// the queried rectangle's half-open bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeatureHit {
    /// The feature type found.
    pub feature: FeatureType,
    /// X coordinate in block units.
    pub x: i32,
    /// Z coordinate in block units.
    pub z: i32,
}

/// Searches `rect` for placements of every feature type eligible in
/// `dimension`.
///
/// Hits are ordered by the registry's search order, then by tile row,
/// then by tile column; callers must not rely on spatial sort order
/// across types. Feature types without a tiling configuration under the
/// bound version are skipped, as are tiles without a candidate,
/// candidates outside the rectangle, and candidates that fail the
/// viability check. An empty rectangle returns no hits.
pub fn search<O: WorldOracle>(
    oracle: &O,
    dimension: Dimension,
    rect: Rect,
) -> QueryResult<Vec<FeatureHit>> {
    if rect.is_empty() {
        return Ok(Vec::new());
    }

    let area = rect.area();
    if area > MAX_SEARCH_AREA {
        return Err(QueryError::RegionTooLarge {
            cells: area,
            limit: MAX_SEARCH_AREA,
        });
    }

    // Half-open chunk bounds of the query rectangle.
    let x0c = rect.x.div_euclid(CHUNK_SIZE);
    let z0c = rect.z.div_euclid(CHUNK_SIZE);
    let x1c = rect.x1().div_euclid(CHUNK_SIZE);
    let z1c = rect.z1().div_euclid(CHUNK_SIZE);

    let mut hits = Vec::new();
    let mut seen: HashSet<FeatureHit> = HashSet::new();

    for &feature in registry::eligible_types(dimension) {
        let Some(tiling) = oracle.tile_config(feature) else {
            continue;
        };
        if tiling.side <= 0 {
            continue;
        }

        // Tile bounds, widened by one tile on every side: a candidate may
        // sit anywhere inside its tile, so a tile only brushing the
        // rectangle's neighborhood still has to be examined. The margin
        // never widens the result set; the containment filter below runs
        // against the original rectangle.
        let rx0 = x0c.div_euclid(tiling.side) - 1;
        let rx1 = x1c.div_euclid(tiling.side) + 1;
        let rz0 = z0c.div_euclid(tiling.side) - 1;
        let rz1 = z1c.div_euclid(tiling.side) + 1;

        let found_before = hits.len();
        for rz in rz0..=rz1 {
            for rx in rx0..=rx1 {
                let Some(pos) = oracle.candidate_position(feature, rx, rz) else {
                    continue;
                };
                if !rect.contains(pos.x, pos.z) {
                    continue;
                }
                if !oracle.is_viable(feature, pos.x, pos.z) {
                    continue;
                }
                let hit = FeatureHit {
                    feature,
                    x: pos.x,
                    z: pos.z,
                };
                if seen.insert(hit) {
                    hits.push(hit);
                }
            }
        }
        debug!(
            feature = %feature,
            rx0,
            rx1,
            rz0,
            rz1,
            found = hits.len() - found_before,
            "searched placement tiles"
        );
    }

    Ok(hits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::{CandidatePos, SampleRange, TerrainCategory, TileConfig};
    use std::collections::HashMap;

    /// Configurable stub oracle: explicit candidates keyed by
    /// (feature, tile), one tile side for every type, optional
    /// viability rejections by position.
    #[derive(Default)]
    struct StubOracle {
        tile_side: i32,
        candidates: HashMap<(FeatureType, i32, i32), CandidatePos>,
        rejects: HashSet<(i32, i32)>,
    }

    impl StubOracle {
        fn with_side(tile_side: i32) -> Self {
            Self {
                tile_side,
                ..Self::default()
            }
        }

        /// Places a candidate in a tile at a chunk offset from the tile's
        /// north-west corner.
        fn place(&mut self, feature: FeatureType, tile_x: i32, tile_z: i32, off_x: i32, off_z: i32) {
            let x = (tile_x * self.tile_side + off_x) * CHUNK_SIZE;
            let z = (tile_z * self.tile_side + off_z) * CHUNK_SIZE;
            self.candidates
                .insert((feature, tile_x, tile_z), CandidatePos::new(x, z));
        }
    }

    impl WorldOracle for StubOracle {
        fn sample_raster(&self, range: &SampleRange) -> Vec<TerrainCategory> {
            vec![0; range.len()]
        }

        fn tile_config(&self, _feature: FeatureType) -> Option<TileConfig> {
            (self.tile_side > 0).then(|| TileConfig::new(self.tile_side))
        }

        fn candidate_position(
            &self,
            feature: FeatureType,
            tile_x: i32,
            tile_z: i32,
        ) -> Option<CandidatePos> {
            self.candidates.get(&(feature, tile_x, tile_z)).copied()
        }

        fn is_viable(&self, _feature: FeatureType, x: i32, z: i32) -> bool {
            !self.rejects.contains(&(x, z))
        }
    }

    #[test]
    fn test_single_village_scenario() {
        let mut oracle = StubOracle::with_side(32);
        oracle.place(FeatureType::Village, 0, 0, 5, 5);

        let hits = search(&oracle, Dimension::Overworld, Rect::new(0, 0, 512, 512))
            .expect("search");

        assert_eq!(
            hits,
            vec![FeatureHit {
                feature: FeatureType::Village,
                x: 80,
                z: 80,
            }]
        );
    }

    #[test]
    fn test_half_open_containment() {
        let mut oracle = StubOracle::with_side(32);
        oracle.place(FeatureType::Village, 0, 0, 5, 5); // world (80, 80)

        // The exclusive edge at 80 excludes the candidate...
        let hits = search(&oracle, Dimension::Overworld, Rect::new(0, 0, 80, 80)).expect("search");
        assert!(hits.is_empty());

        // ...while the inclusive edge at 80 admits it.
        let hits =
            search(&oracle, Dimension::Overworld, Rect::new(80, 80, 16, 16)).expect("search");
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_empty_rect_returns_no_hits() {
        let mut oracle = StubOracle::with_side(32);
        oracle.place(FeatureType::Village, 0, 0, 5, 5);

        for rect in [Rect::new(0, 0, 0, 512), Rect::new(0, 0, 512, 0)] {
            assert!(search(&oracle, Dimension::Overworld, rect)
                .expect("search")
                .is_empty());
        }
    }

    #[test]
    fn test_viability_rejection_discards_candidate() {
        let mut oracle = StubOracle::with_side(32);
        oracle.place(FeatureType::Village, 0, 0, 5, 5);
        oracle.rejects.insert((80, 80));

        let hits = search(&oracle, Dimension::Overworld, Rect::new(0, 0, 512, 512))
            .expect("search");
        assert!(hits.is_empty());
    }

    #[test]
    fn test_margin_finds_candidates_near_tile_edges() {
        // Tile side 32 chunks = 512 world units. A rectangle starting
        // mid-tile must still see candidates between its west edge and
        // the tile boundary, for offsets up to the full tile side.
        for off in 16..32 {
            let mut oracle = StubOracle::with_side(32);
            oracle.place(FeatureType::Village, 0, 0, off, off);

            let rect = Rect::new(256, 256, 512, 512);
            let hits = search(&oracle, Dimension::Overworld, rect).expect("search");
            assert_eq!(hits.len(), 1, "offset {off} chunks lost");
            assert!(rect.contains(hits[0].x, hits[0].z));
        }
        // Offsets west of the rectangle fall outside and stay excluded.
        for off in 0..16 {
            let mut oracle = StubOracle::with_side(32);
            oracle.place(FeatureType::Village, 0, 0, off, off);
            let hits = search(&oracle, Dimension::Overworld, Rect::new(256, 256, 512, 512))
                .expect("search");
            assert!(hits.is_empty(), "offset {off} chunks wrongly included");
        }
    }

    #[test]
    fn test_negative_coordinates() {
        let mut oracle = StubOracle::with_side(32);
        // Tile (-1, -1), offset (31, 31): world (-16, -16).
        oracle.place(FeatureType::Village, -1, -1, 31, 31);

        let hits = search(&oracle, Dimension::Overworld, Rect::new(-512, -512, 512, 512))
            .expect("search");
        assert_eq!(hits.len(), 1);
        assert_eq!((hits[0].x, hits[0].z), (-16, -16));
    }

    #[test]
    fn test_dimension_filtering() {
        let mut oracle = StubOracle::with_side(32);
        oracle.place(FeatureType::Village, 0, 0, 2, 2);
        oracle.place(FeatureType::Fortress, 0, 0, 3, 3);
        oracle.place(FeatureType::EndCity, 0, 0, 4, 4);

        let rect = Rect::new(0, 0, 512, 512);
        for dimension in [Dimension::Overworld, Dimension::Nether, Dimension::End] {
            let hits = search(&oracle, dimension, rect).expect("search");
            assert_eq!(hits.len(), 1);
            for hit in &hits {
                assert!(registry::eligible_types(dimension).contains(&hit.feature));
            }
        }
    }

    #[test]
    fn test_ordering_by_type_then_tile_row_major() {
        let mut oracle = StubOracle::with_side(32);
        // Village is searched before Monument in the overworld order.
        oracle.place(FeatureType::Monument, 0, 0, 1, 1); // world (16, 16)
        oracle.place(FeatureType::Village, 0, 0, 2, 2); // world (32, 32)
        oracle.place(FeatureType::Village, 1, 0, 0, 0); // world (512, 0)
        oracle.place(FeatureType::Village, 0, 1, 0, 0); // world (0, 512)

        let hits = search(&oracle, Dimension::Overworld, Rect::new(0, 0, 2048, 2048))
            .expect("search");

        let summary: Vec<(FeatureType, i32, i32)> =
            hits.iter().map(|h| (h.feature, h.x, h.z)).collect();
        assert_eq!(
            summary,
            vec![
                // All villages first, tiles row-major, regardless of the
                // hits' spatial order.
                (FeatureType::Village, 32, 32),
                (FeatureType::Village, 512, 0),
                (FeatureType::Village, 0, 512),
                (FeatureType::Monument, 16, 16),
            ]
        );
    }

    #[test]
    fn test_deduplication() {
        let mut oracle = StubOracle::with_side(32);
        oracle.place(FeatureType::Village, 0, 0, 5, 5);
        // A second tile reporting the identical world position must not
        // produce a second hit.
        oracle
            .candidates
            .insert((FeatureType::Village, 1, 0), CandidatePos::new(80, 80));

        let hits = search(&oracle, Dimension::Overworld, Rect::new(0, 0, 2048, 2048))
            .expect("search");
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_missing_tile_config_skips_type() {
        // tile_side 0 makes the stub report no tiling for any type.
        let mut oracle = StubOracle::with_side(0);
        oracle
            .candidates
            .insert((FeatureType::Village, 0, 0), CandidatePos::new(80, 80));

        let hits = search(&oracle, Dimension::Overworld, Rect::new(0, 0, 512, 512))
            .expect("search");
        assert!(hits.is_empty());
    }

    #[test]
    fn test_area_limit_enforced() {
        let oracle = StubOracle::with_side(32);
        // 20_000 × 20_000 = 400_000_000 stays under the limit.
        assert!(search(&oracle, Dimension::Overworld, Rect::new(0, 0, 20_000, 20_000)).is_ok());
        let err = search(&oracle, Dimension::Overworld, Rect::new(0, 0, 20_001, 20_000))
            .expect_err("too large");
        assert!(matches!(err, QueryError::RegionTooLarge { .. }));
    }

    #[test]
    fn test_determinism() {
        let mut oracle = StubOracle::with_side(32);
        oracle.place(FeatureType::Village, 0, 0, 5, 5);
        oracle.place(FeatureType::Monument, 1, 1, 7, 3);
        oracle.place(FeatureType::Shipwreck, -1, 2, 30, 12);

        let rect = Rect::new(-1024, -1024, 4096, 4096);
        let first = search(&oracle, Dimension::Overworld, rect).expect("search");
        let second = search(&oracle, Dimension::Overworld, rect).expect("search");
        assert_eq!(first, second);
    }

    /// Stub with a deterministic candidate in every tile, used to check
    /// completeness against brute-force enumeration.
    struct GridStub {
        side: i32,
    }

    impl GridStub {
        fn candidate(&self, tile_x: i32, tile_z: i32) -> CandidatePos {
            let off_x = (tile_x * 7 + 3).rem_euclid(self.side);
            let off_z = (tile_z * 5 + 2).rem_euclid(self.side);
            CandidatePos::new(
                (tile_x * self.side + off_x) * CHUNK_SIZE,
                (tile_z * self.side + off_z) * CHUNK_SIZE,
            )
        }
    }

    impl WorldOracle for GridStub {
        fn sample_raster(&self, range: &SampleRange) -> Vec<TerrainCategory> {
            vec![0; range.len()]
        }

        fn tile_config(&self, feature: FeatureType) -> Option<TileConfig> {
            (feature == FeatureType::Village).then(|| TileConfig::new(self.side))
        }

        fn candidate_position(
            &self,
            feature: FeatureType,
            tile_x: i32,
            tile_z: i32,
        ) -> Option<CandidatePos> {
            (feature == FeatureType::Village).then(|| self.candidate(tile_x, tile_z))
        }

        fn is_viable(&self, _feature: FeatureType, _x: i32, _z: i32) -> bool {
            true
        }
    }

    /// Brute-force reference: every candidate whose position falls in
    /// the rectangle, from a tile window comfortably wider than the
    /// rectangle itself.
    fn brute_force_hits(stub: &GridStub, rect: Rect) -> HashSet<(i32, i32)> {
        let mut expected = HashSet::new();
        let tx0 = rect.x.div_euclid(CHUNK_SIZE * stub.side) - 2;
        let tx1 = rect.x1().div_euclid(CHUNK_SIZE * stub.side) + 2;
        let tz0 = rect.z.div_euclid(CHUNK_SIZE * stub.side) - 2;
        let tz1 = rect.z1().div_euclid(CHUNK_SIZE * stub.side) + 2;
        for tz in tz0..=tz1 {
            for tx in tx0..=tx1 {
                let pos = stub.candidate(tx, tz);
                if rect.contains(pos.x, pos.z) {
                    expected.insert((pos.x, pos.z));
                }
            }
        }
        expected
    }

    proptest::proptest! {
        #[test]
        fn prop_hits_contained_and_complete(
            x in -10_000i32..10_000,
            z in -10_000i32..10_000,
            sx in 0i32..600,
            sz in 0i32..600,
        ) {
            let stub = GridStub { side: 32 };
            let rect = Rect::new(x, z, sx, sz);
            let hits = search(&stub, Dimension::Overworld, rect).expect("search");

            for hit in &hits {
                proptest::prop_assert!(rect.contains(hit.x, hit.z));
            }

            let got: HashSet<(i32, i32)> = hits.iter().map(|h| (h.x, h.z)).collect();
            proptest::prop_assert_eq!(got, brute_force_hits(&stub, rect));
        }

        #[test]
        fn prop_search_deterministic(
            x in -5_000i32..5_000,
            z in -5_000i32..5_000,
            sx in 0i32..400,
            sz in 0i32..400,
        ) {
            let stub = GridStub { side: 24 };
            let rect = Rect::new(x, z, sx, sz);
            let first = search(&stub, Dimension::Overworld, rect).expect("search");
            let second = search(&stub, Dimension::Overworld, rect).expect("search");
            proptest::prop_assert_eq!(first, second);
        }
    }
}
