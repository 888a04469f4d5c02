//! Property-based tests for scoring and ranking.
//!
//! # Invariants tested
//!
//! - **Score bounds:** every score lies in `0.0..=1.0`.
//! - **Single-candidate maximum:** a lone candidate scores the sum of the
//!   weights of the categories it has POIs in.
//! - **Deterministic ranking:** output is sorted and re-ranking is a no-op.
//! - **Geo filter exclusion:** regions without a centroid never appear when
//!   a centre is supplied.

use proptest::prelude::*;
use suburb_core::test_support::region;
use suburb_core::{
    Category, PerCategory, PoiCounts, PreferenceVector, Region, ValidatedRequest,
};
use suburb_scorer::{RelativeScorer, compare, rank, score_candidates};

fn counts_strategy() -> impl Strategy<Value = PoiCounts> {
    proptest::array::uniform5(0_u32..50).prop_map(
        |[recreation, community, transport, education, utility]| PoiCounts {
            recreation,
            community,
            transport,
            education,
            utility,
        },
    )
}

fn preferences_strategy() -> impl Strategy<Value = PreferenceVector> {
    proptest::array::uniform5(0.0_f64..10.0).prop_filter_map(
        "weights are non-negative",
        |[recreation, community, transport, education, utility]| {
            PreferenceVector::new(PerCategory {
                recreation,
                community,
                transport,
                education,
                utility,
            })
            .ok()
        },
    )
}

/// Regions near the Sydney CBD, every third one without a centroid.
fn regions_strategy() -> impl Strategy<Value = Vec<Region>> {
    proptest::collection::vec((counts_strategy(), -0.2_f64..0.2, -0.2_f64..0.2), 0..12).prop_map(
        |entries| {
            entries
                .into_iter()
                .enumerate()
                .map(|(index, (counts, d_lat, d_lon))| {
                    let centroid = (!index.is_multiple_of(3)).then(|| offset(d_lat, d_lon));
                    region(&format!("Region {index:02}"), counts, centroid)
                })
                .collect()
        },
    )
}

#[expect(clippy::float_arithmetic, reason = "offsets jitter a fixed centre")]
fn offset(d_lat: f64, d_lon: f64) -> (f64, f64) {
    (-33.8688 + d_lat, 151.2093 + d_lon)
}

fn request(preferences: PreferenceVector) -> ValidatedRequest {
    ValidatedRequest {
        preferences,
        geo: None,
        min_total_pois: None,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: scores are always within `0.0..=1.0`.
    #[test]
    fn scores_are_bounded(regions in regions_strategy(), preferences in preferences_strategy()) {
        let weights = preferences.normalize();
        let ranked = score_candidates(&regions, &weights, &request(preferences), &RelativeScorer);
        prop_assert_eq!(ranked.len(), regions.len());
        for scored in &ranked {
            prop_assert!((0.0..=1.0).contains(&scored.score), "score {}", scored.score);
        }
    }

    /// Property: a lone candidate scores the weights of its non-empty
    /// categories.
    #[test]
    #[expect(clippy::float_arithmetic, reason = "property compares sums")]
    fn single_candidate_scores_present_weights(
        counts in counts_strategy(),
        preferences in preferences_strategy(),
    ) {
        let regions = vec![region("Only", counts, None)];
        let weights = preferences.normalize();
        let ranked = score_candidates(&regions, &weights, &request(preferences), &RelativeScorer);
        let expected: f64 = Category::ALL
            .iter()
            .filter(|category| counts.get(**category) > 0)
            .map(|category| weights.get(*category))
            .sum();
        let score = ranked.first().map(|scored| scored.score);
        prop_assert!(score.is_some_and(|actual| (actual - expected).abs() < 1e-9));
    }

    /// Property: ranking is sorted and stable under re-ranking.
    #[test]
    fn ranking_is_deterministic(regions in regions_strategy(), preferences in preferences_strategy()) {
        let weights = preferences.normalize();
        let ranked = score_candidates(&regions, &weights, &request(preferences), &RelativeScorer);
        let sorted = ranked.windows(2).all(|pair| match pair {
            [a, b] => compare(a, b).is_le(),
            _ => true,
        });
        prop_assert!(sorted);
        let reranked = rank(ranked.iter().rev().cloned().collect());
        prop_assert_eq!(reranked, ranked);
    }

    /// Property: regions without a centroid are excluded by a distance filter.
    #[test]
    fn unlocated_regions_are_excluded(
        regions in regions_strategy(),
        preferences in preferences_strategy(),
        radius in 0.0_f64..50.0,
    ) {
        let location = Some(geo::Coord { x: 151.2093, y: -33.8688 });
        let validated = ValidatedRequest::new(preferences, location, Some(radius))
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let weights = preferences.normalize();
        let ranked = score_candidates(&regions, &weights, &validated, &RelativeScorer);
        prop_assert!(ranked.iter().all(|scored| scored.region.centroid().is_some()));
        prop_assert!(ranked
            .iter()
            .all(|scored| scored.distance_km.is_some_and(|distance| distance <= radius)));
    }
}
