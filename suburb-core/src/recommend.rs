//! Request and response types for the recommendation pipeline.
//!
//! A [`RecommendRequest`] arrives from the boundary with raw numbers. It is
//! validated into a [`ValidatedRequest`] before any catalogue or scoring work
//! happens. Scored output is carried as [`ScoredRegion`] and flattened into
//! [`Recommendation`] for display.

use geo::Coord;
use thiserror::Error;

use crate::{
    CatalogError, CoordinateError, GeoFilter, Interpretation, InterpreterError, NormalizedWeights,
    PerCategory, PoiCounts, PreferenceError, PreferenceVector, Region, validate_radius,
};

/// Direct scoring request.
///
/// Every category weight is required; unknown fields are rejected when
/// deserialising.
///
/// # Examples
/// ```
/// use suburb_core::RecommendRequest;
///
/// let request = RecommendRequest {
///     recreation: 2.0,
///     community: 1.0,
///     transport: 1.0,
///     ..RecommendRequest::default()
/// };
/// let validated = request.validate()?;
/// assert!(validated.geo.is_none());
/// # Ok::<(), suburb_core::RequestValidationError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(deny_unknown_fields)
)]
pub struct RecommendRequest {
    /// Raw recreation weight.
    pub recreation: f64,
    /// Raw community weight.
    pub community: f64,
    /// Raw transport weight.
    pub transport: f64,
    /// Raw education weight.
    pub education: f64,
    /// Raw utility weight.
    pub utility: f64,
    /// Latitude of the search centre.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub latitude: Option<f64>,
    /// Longitude of the search centre.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub longitude: Option<f64>,
    /// Search radius in kilometres.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub radius_km: Option<f64>,
    /// Drop regions with fewer POIs than this before scoring.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub min_total_pois: Option<u64>,
}

impl RecommendRequest {
    /// Raw weights as a per-category struct.
    #[must_use]
    pub const fn raw_weights(&self) -> PerCategory<f64> {
        PerCategory {
            recreation: self.recreation,
            community: self.community,
            transport: self.transport,
            education: self.education,
            utility: self.utility,
        }
    }

    /// Check weights, coordinates and radius.
    ///
    /// # Errors
    /// Returns [`RequestValidationError`] for negative or non-finite weights,
    /// out-of-range coordinates, a latitude without a longitude (or the
    /// reverse), or an invalid radius.
    pub fn validate(&self) -> Result<ValidatedRequest, RequestValidationError> {
        let preferences = PreferenceVector::new(self.raw_weights())?;
        let location = match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coord {
                x: longitude,
                y: latitude,
            }),
            (Some(_), None) | (None, Some(_)) => {
                return Err(RequestValidationError::PartialLocation);
            }
            (None, None) => None,
        };
        let mut validated = ValidatedRequest::new(preferences, location, self.radius_km)?;
        validated.min_total_pois = self.min_total_pois;
        Ok(validated)
    }
}

/// A request that passed boundary validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedRequest {
    /// Raw, non-negative preference weights.
    pub preferences: PreferenceVector,
    /// Geographic restriction, if a centre was given.
    pub geo: Option<GeoFilter>,
    /// Minimum POI total a region needs to be considered.
    pub min_total_pois: Option<u64>,
}

impl ValidatedRequest {
    /// Combine validated preferences with an optional location.
    ///
    /// A radius without a centre is checked but has no effect.
    ///
    /// # Errors
    /// Returns [`RequestValidationError::Coordinate`] for an invalid centre
    /// or radius.
    pub fn new(
        preferences: PreferenceVector,
        location: Option<Coord<f64>>,
        radius_km: Option<f64>,
    ) -> Result<Self, RequestValidationError> {
        let geo = match location {
            Some(center) => Some(GeoFilter::new(center, radius_km)?),
            None => {
                radius_km.map(validate_radius).transpose()?;
                None
            }
        };
        Ok(Self {
            preferences,
            geo,
            min_total_pois: None,
        })
    }

    /// Validate the output of a [`PreferenceInterpreter`](crate::PreferenceInterpreter).
    ///
    /// A bad location or radius here is the interpreter's fault, not the
    /// caller's, so it is reported as an interpreter error.
    ///
    /// # Errors
    /// Returns [`InterpreterError::InvalidOutput`] when the interpreter
    /// produced an unusable location or radius.
    pub fn from_interpretation(interpretation: Interpretation) -> Result<Self, InterpreterError> {
        Self::new(
            interpretation.preferences,
            interpretation.location,
            interpretation.radius_km,
        )
        .map_err(|error| InterpreterError::InvalidOutput {
            reason: error.to_string(),
        })
    }
}

/// Reasons a request is rejected before any computation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestValidationError {
    /// A weight was negative or not finite.
    #[error(transparent)]
    Preference(#[from] PreferenceError),
    /// A coordinate or radius was malformed.
    #[error(transparent)]
    Coordinate(#[from] CoordinateError),
    /// Only one of latitude and longitude was supplied.
    #[error("latitude and longitude must be supplied together")]
    PartialLocation,
    /// The free-text query was blank.
    #[error("query must not be empty")]
    EmptyQuery,
}

/// Failures of a recommendation request.
///
/// An empty candidate set is not an error; it yields an empty list.
#[derive(Debug, Error)]
pub enum RecommendError {
    /// The request was rejected during validation.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] RequestValidationError),
    /// The preference interpreter failed; no fallback weights are used.
    #[error("preference interpretation failed: {0}")]
    InterpreterFailure(#[source] InterpreterError),
    /// The region catalogue could not be read.
    #[error("region catalogue unavailable: {0}")]
    CatalogUnavailable(#[source] CatalogError),
}

impl From<InterpreterError> for RecommendError {
    fn from(error: InterpreterError) -> Self {
        Self::InterpreterFailure(error)
    }
}

impl From<CatalogError> for RecommendError {
    fn from(error: CatalogError) -> Self {
        Self::CatalogUnavailable(error)
    }
}

/// A region with its score for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRegion {
    /// The scored region.
    pub region: Region,
    /// Relevance in `0.0..=1.0`.
    pub score: f64,
    /// Distance from the search centre, when one was supplied.
    pub distance_km: Option<f64>,
}

/// Display form of a [`ScoredRegion`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recommendation {
    /// Region name.
    pub suburb_name: String,
    /// Relevance in `0.0..=1.0`.
    pub score: f64,
    /// POI counts per category.
    pub poi_counts: PoiCounts,
    /// Sum of `poi_counts`.
    pub total_pois: u64,
    /// Centroid latitude.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub latitude: Option<f64>,
    /// Centroid longitude.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub longitude: Option<f64>,
    /// Distance from the search centre in kilometres.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub distance_km: Option<f64>,
}

impl From<&ScoredRegion> for Recommendation {
    fn from(scored: &ScoredRegion) -> Self {
        let centroid = scored.region.centroid();
        Self {
            suburb_name: scored.region.name().to_owned(),
            score: scored.score,
            poi_counts: *scored.region.poi_counts(),
            total_pois: scored.region.total_pois(),
            latitude: centroid.map(|coord| coord.y),
            longitude: centroid.map(|coord| coord.x),
            distance_km: scored.distance_km,
        }
    }
}

/// Result of the free-text path: the weights that were applied and the
/// ranked regions.
#[derive(Debug, Clone, PartialEq)]
pub struct InterpretedRecommendations {
    /// Normalised weights derived from the query.
    pub interpreted_preferences: NormalizedWeights,
    /// Regions in rank order.
    pub recommendations: Vec<ScoredRegion>,
}
