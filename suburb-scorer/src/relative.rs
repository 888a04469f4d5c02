//! Relative scoring against the candidate pool.

use suburb_core::{Category, CategoryMaxima, NormalizedWeights, Region, RegionScorer};

/// Scores a region by how close it comes to the best candidate in each
/// category.
///
/// Each category count is divided by the largest count of that category in
/// the candidate set and multiplied by the category weight. Scores are
/// therefore relative: the same region can score differently when the
/// distance filter changes which regions it is compared with.
///
/// # Examples
/// ```
/// use suburb_core::{CategoryMaxima, NormalizedWeights, PoiCounts, Region, RegionScorer};
/// use suburb_scorer::RelativeScorer;
///
/// let region = Region::new("Ryde", PoiCounts { transport: 3, ..PoiCounts::default() }, None)?;
/// let maxima = CategoryMaxima::from_regions([&region]);
/// let weights = NormalizedWeights::default_distribution();
/// // Only transport has POIs, so the score is the transport weight.
/// assert_eq!(RelativeScorer.score(&region, &weights, &maxima), 0.25);
/// # Ok::<(), suburb_core::RegionError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct RelativeScorer;

impl RegionScorer for RelativeScorer {
    fn score(&self, region: &Region, weights: &NormalizedWeights, maxima: &CategoryMaxima) -> f64 {
        Self::sanitise(score_region(region, weights, maxima))
    }
}

/// Weighted sum of the region's counts relative to `maxima`.
///
/// The result lies in `0.0..=1.0` up to rounding; [`RelativeScorer`] clamps
/// it.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "scores are weighted sums of relative counts"
)]
pub fn score_region(region: &Region, weights: &NormalizedWeights, maxima: &CategoryMaxima) -> f64 {
    Category::ALL
        .iter()
        .map(|category| weights.get(*category) * maxima.relative_count(region, *category))
        .sum()
}
