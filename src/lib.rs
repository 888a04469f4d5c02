//! Facade crate for the suburb finder.
//!
//! Re-exports the domain types from `suburb-core` and the default scoring
//! pipeline from `suburb-scorer`, so embedders depend on a single crate.
//!
//! ```
//! use suburb_core::test_support::{MemoryCatalog, region};
//! use suburb_finder::{PoiCounts, RecommendRequest, Recommender};
//!
//! let catalog = MemoryCatalog::with_regions(vec![
//!     region("Inner West", PoiCounts { recreation: 8, ..PoiCounts::default() }, None),
//!     region("Hills", PoiCounts { recreation: 2, ..PoiCounts::default() }, None),
//! ]);
//! let request = RecommendRequest { recreation: 1.0, ..RecommendRequest::default() };
//! let ranked = Recommender::new(catalog).recommend(&request)?;
//! assert_eq!(ranked.first().map(|scored| scored.region.name()), Some("Inner West"));
//! # Ok::<(), suburb_finder::RecommendError>(())
//! ```

#![forbid(unsafe_code)]

pub use suburb_core::{
    Candidate, CatalogError, CatalogSnapshot, CatalogSummary, Category, CategoryMaxima,
    CoordinateError, DEFAULT_RADIUS_KM, DEFAULT_WEIGHTS, GeoFilter, Interpretation,
    InterpretedRecommendations, InterpreterError, NormalizedWeights, PerCategory, PoiCounts,
    PreferenceError, PreferenceInterpreter, PreferenceVector, RecommendError, RecommendRequest,
    Recommendation, Region, RegionCatalog, RegionError, RegionScorer, RequestValidationError,
    ScoredRegion, SharedCatalog, ValidatedRequest,
};
pub use suburb_scorer::{KeywordInterpreter, Recommender, RelativeScorer};

#[cfg(feature = "test-support")]
pub use suburb_core::test_support;
