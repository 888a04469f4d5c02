//! Deterministic ordering of scored regions.

use std::cmp::Ordering;

use suburb_core::ScoredRegion;

/// Order two scored regions.
///
/// Higher scores come first. Equal scores are broken by total POIs
/// (more first) and then by name (alphabetical), so identical input always
/// yields identical output.
#[must_use]
pub fn compare(a: &ScoredRegion, b: &ScoredRegion) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.region.total_pois().cmp(&a.region.total_pois()))
        .then_with(|| a.region.name().cmp(b.region.name()))
}

/// Sort `scored` into recommendation order.
///
/// The full ordering is returned; slicing to a top-N is left to the caller.
/// An empty input yields an empty output.
#[must_use]
pub fn rank(mut scored: Vec<ScoredRegion>) -> Vec<ScoredRegion> {
    scored.sort_by(compare);
    scored
}
