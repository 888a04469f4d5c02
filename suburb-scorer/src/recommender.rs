//! Request pipeline: validate, snapshot, filter, score, rank.

use log::{debug, warn};
use suburb_core::{
    CategoryMaxima, InterpretedRecommendations, NormalizedWeights, PreferenceInterpreter,
    RecommendError, RecommendRequest, Region, RegionCatalog, RegionScorer,
    RequestValidationError, ScoredRegion, ValidatedRequest, filter_regions,
};

use crate::{RelativeScorer, rank};

/// Produces ranked recommendations from a catalogue.
///
/// Every request reads exactly one snapshot from the catalogue and works
/// from it alone. The recommender holds no mutable state, so one instance
/// can serve concurrent requests.
#[derive(Debug, Default, Clone)]
pub struct Recommender<C, S = RelativeScorer> {
    catalog: C,
    scorer: S,
}

impl<C: RegionCatalog> Recommender<C> {
    /// Create a recommender using [`RelativeScorer`].
    #[must_use]
    pub const fn new(catalog: C) -> Self {
        Self {
            catalog,
            scorer: RelativeScorer,
        }
    }
}

impl<C: RegionCatalog, S: RegionScorer> Recommender<C, S> {
    /// Create a recommender with a custom scorer.
    #[must_use]
    pub const fn with_scorer(catalog: C, scorer: S) -> Self {
        Self { catalog, scorer }
    }

    /// Borrow the catalogue.
    #[must_use]
    pub const fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Validate `request` and return every candidate in rank order.
    ///
    /// # Errors
    /// - [`RecommendError::InvalidInput`] when validation fails; the
    ///   catalogue is not read.
    /// - [`RecommendError::CatalogUnavailable`] when the snapshot cannot be
    ///   taken.
    pub fn recommend(&self, request: &RecommendRequest) -> Result<Vec<ScoredRegion>, RecommendError> {
        let validated = request.validate().inspect_err(|error| {
            warn!("rejected recommendation request: {error}");
        })?;
        self.recommend_validated(&validated)
    }

    /// Rank candidates for an already validated request.
    ///
    /// # Errors
    /// Returns [`RecommendError::CatalogUnavailable`] when the snapshot
    /// cannot be taken.
    pub fn recommend_validated(
        &self,
        request: &ValidatedRequest,
    ) -> Result<Vec<ScoredRegion>, RecommendError> {
        let weights = request.preferences.normalize();
        let snapshot = self.catalog.snapshot().inspect_err(|error| {
            warn!("region catalogue unavailable: {error}");
        })?;
        Ok(score_candidates(
            snapshot.regions(),
            &weights,
            request,
            &self.scorer,
        ))
    }

    /// Interpret `query` and rank candidates for the result.
    ///
    /// The interpreter's preferences are normalised exactly like direct
    /// input. A query that expresses no preference falls back to the default
    /// weights; an interpreter failure does not.
    ///
    /// # Errors
    /// - [`RecommendError::InvalidInput`] for a blank query.
    /// - [`RecommendError::InterpreterFailure`] when the interpreter fails
    ///   or returns an unusable location or radius; nothing is scored.
    /// - [`RecommendError::CatalogUnavailable`] when the snapshot cannot be
    ///   taken.
    pub fn recommend_from_query(
        &self,
        interpreter: &dyn PreferenceInterpreter,
        query: &str,
    ) -> Result<InterpretedRecommendations, RecommendError> {
        if query.trim().is_empty() {
            warn!("rejected empty preference query");
            return Err(RequestValidationError::EmptyQuery.into());
        }
        let interpretation = interpreter.interpret(query).inspect_err(|error| {
            warn!("preference interpreter failed: {error}");
        })?;
        let validated =
            ValidatedRequest::from_interpretation(interpretation).inspect_err(|error| {
                warn!("preference interpreter output rejected: {error}");
            })?;
        let interpreted_preferences = validated.preferences.normalize();
        debug!("interpreted query as {interpreted_preferences:?}");
        let recommendations = self.recommend_validated(&validated)?;
        Ok(InterpretedRecommendations {
            interpreted_preferences,
            recommendations,
        })
    }
}

/// Filter, score and rank `regions` for one request.
///
/// Category maxima are computed once over the surviving candidates before
/// any region is scored. An empty candidate set yields an empty list.
pub fn score_candidates<S: RegionScorer + ?Sized>(
    regions: &[Region],
    weights: &NormalizedWeights,
    request: &ValidatedRequest,
    scorer: &S,
) -> Vec<ScoredRegion> {
    let candidates: Vec<_> = filter_regions(regions, request.geo.as_ref())
        .into_iter()
        .filter(|candidate| {
            request
                .min_total_pois
                .is_none_or(|min| candidate.region.total_pois() >= min)
        })
        .collect();
    debug!(
        "scoring {} of {} regions",
        candidates.len(),
        regions.len()
    );
    let maxima = CategoryMaxima::from_regions(candidates.iter().map(|candidate| candidate.region));
    let scored = candidates
        .into_iter()
        .map(|candidate| ScoredRegion {
            region: candidate.region.clone(),
            score: scorer.score(candidate.region, weights, &maxima),
            distance_km: candidate.distance_km,
        })
        .collect();
    rank(scored)
}
