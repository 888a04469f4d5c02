//! Score regions against normalised weights.
//!
//! The `RegionScorer` trait assigns a relevance score to a
//! [`Region`](crate::Region) given [`NormalizedWeights`](crate::NormalizedWeights)
//! and the per-category maxima of the candidate set it is compared against.

use crate::{Category, NormalizedWeights, PerCategory, Region};

/// Largest count per category across a candidate set.
///
/// Computed once per request, before any region is scored, so that every
/// region is measured against the same pool.
///
/// # Examples
/// ```
/// use suburb_core::{Category, CategoryMaxima, PoiCounts, Region};
///
/// let a = Region::new("A", PoiCounts { recreation: 10, ..PoiCounts::default() }, None)?;
/// let b = Region::new("B", PoiCounts { recreation: 5, community: 10, ..PoiCounts::default() }, None)?;
/// let maxima = CategoryMaxima::from_regions([&a, &b]);
/// assert_eq!(maxima.get(Category::Recreation), 10);
/// assert_eq!(maxima.get(Category::Community), 10);
/// assert_eq!(maxima.get(Category::Utility), 0);
/// # Ok::<(), suburb_core::RegionError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryMaxima(PerCategory<u32>);

impl CategoryMaxima {
    /// Compute the maxima over `regions`.
    pub fn from_regions<'a>(regions: impl IntoIterator<Item = &'a Region>) -> Self {
        let mut maxima = PerCategory::<u32>::default();
        for region in regions {
            for (category, count) in region.poi_counts().iter() {
                let slot = maxima.get_mut(category);
                *slot = (*slot).max(count);
            }
        }
        Self(maxima)
    }

    /// Maximum count for `category`.
    #[must_use]
    pub const fn get(&self, category: Category) -> u32 {
        self.0.get(category)
    }

    /// The region's count for `category` divided by the maximum, or `0.0`
    /// when no candidate has any POI of that category.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "counts are scaled into 0.0..=1.0 against the pool maximum"
    )]
    pub fn relative_count(&self, region: &Region, category: Category) -> f64 {
        let max = self.get(category);
        if max == 0 {
            return 0.0;
        }
        f64::from(region.poi_counts().get(category)) / f64::from(max)
    }
}

/// Calculate a relevance score for a region.
///
/// Higher scores indicate a better match between the region's amenities and
/// the caller's weights. Implementations must be thread-safe (`Send` +
/// `Sync`) so one scorer can serve concurrent requests.
///
/// Implementations must:
/// - Produce finite (`f64::is_finite`) scores.
/// - Return values within `0.0..=1.0`.
///
/// Use [`RegionScorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use suburb_core::{CategoryMaxima, NormalizedWeights, PoiCounts, Region, RegionScorer};
///
/// struct UnitScorer;
///
/// impl RegionScorer for UnitScorer {
///     fn score(&self, _: &Region, _: &NormalizedWeights, _: &CategoryMaxima) -> f64 {
///         1.0
///     }
/// }
///
/// let region = Region::new("Ryde", PoiCounts::default(), None)?;
/// let weights = NormalizedWeights::default_distribution();
/// let maxima = CategoryMaxima::from_regions([&region]);
/// assert_eq!(UnitScorer.score(&region, &weights, &maxima), 1.0);
/// # Ok::<(), suburb_core::RegionError>(())
/// ```
pub trait RegionScorer: Send + Sync {
    /// Return a score for `region` relative to the candidate pool described
    /// by `maxima`.
    fn score(&self, region: &Region, weights: &NormalizedWeights, maxima: &CategoryMaxima) -> f64;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, 1.0)
    }
}
