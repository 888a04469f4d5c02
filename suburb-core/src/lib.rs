//! Core domain types for the suburb finder.
//!
//! Regions carry point-of-interest counts in five fixed categories. Callers
//! express preferences over those categories; the types here validate that
//! input, normalise it, and define the seams (`RegionCatalog`,
//! `PreferenceInterpreter`, `RegionScorer`) that the scoring crate plugs
//! into. Constructors return `Result` so invalid input is rejected at the
//! boundary.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod category;
pub mod geo_filter;
pub mod interpreter;
pub mod recommend;
pub mod region;
pub mod scorer;
pub mod weights;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use catalog::{CatalogError, CatalogSnapshot, CatalogSummary, RegionCatalog, SharedCatalog};
pub use category::{Category, PerCategory, UnknownCategory};
pub use geo_filter::{
    Candidate, CoordinateError, DEFAULT_RADIUS_KM, EARTH_RADIUS_KM, GeoFilter, coord_from_lat_lon,
    filter_regions, haversine_km, validate_radius,
};
pub use interpreter::{Interpretation, InterpreterError, PreferenceInterpreter};
pub use recommend::{
    InterpretedRecommendations, RecommendError, RecommendRequest, Recommendation,
    RequestValidationError, ScoredRegion, ValidatedRequest,
};
pub use region::{PoiCounts, Region, RegionError};
pub use scorer::{CategoryMaxima, RegionScorer};
pub use weights::{DEFAULT_WEIGHTS, NormalizedWeights, PreferenceError, PreferenceVector};
