//! Preference vectors and their normalised weights.
//!
//! A [`PreferenceVector`] holds non-negative weights on any scale. Calling
//! [`PreferenceVector::normalize`] rescales them into [`NormalizedWeights`]
//! that sum to one, or falls back to [`DEFAULT_WEIGHTS`] when the caller
//! expressed no preference at all.

use thiserror::Error;

use crate::{Category, PerCategory};

/// Distribution used when a preference vector carries no signal.
pub const DEFAULT_WEIGHTS: PerCategory<f64> = PerCategory {
    recreation: 0.25,
    community: 0.25,
    transport: 0.25,
    education: 0.15,
    utility: 0.10,
};

/// Errors returned by [`PreferenceVector::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PreferenceError {
    /// A weight was below zero.
    #[error("{category} weight {value} must not be negative")]
    Negative {
        /// Offending category.
        category: Category,
        /// Raw weight supplied.
        value: f64,
    },
    /// A weight was NaN or infinite.
    #[error("{category} weight must be a finite number")]
    NonFinite {
        /// Offending category.
        category: Category,
    },
}

/// Raw, validated preference weights on an arbitrary scale.
///
/// # Examples
/// ```
/// use suburb_core::{Category, PerCategory, PreferenceVector};
///
/// let raw = PerCategory { recreation: 3.0, transport: 1.0, ..PerCategory::default() };
/// let weights = PreferenceVector::new(raw)?.normalize();
/// assert_eq!(weights.get(Category::Recreation), 0.75);
/// assert_eq!(weights.get(Category::Transport), 0.25);
/// # Ok::<(), suburb_core::PreferenceError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PerCategory<f64>", into = "PerCategory<f64>")
)]
pub struct PreferenceVector(PerCategory<f64>);

impl PreferenceVector {
    /// Validate raw weights.
    ///
    /// Negative weights are rejected rather than clamped so that a caller
    /// mistake never silently changes the ranking.
    ///
    /// # Errors
    /// Returns [`PreferenceError`] for the first negative or non-finite
    /// weight in [`Category::ALL`] order.
    pub fn new(raw: PerCategory<f64>) -> Result<Self, PreferenceError> {
        for (category, value) in raw.iter() {
            if !value.is_finite() {
                return Err(PreferenceError::NonFinite { category });
            }
            if value < 0.0 {
                return Err(PreferenceError::Negative { category, value });
            }
        }
        Ok(Self(raw))
    }

    /// A vector expressing no preference.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Return the raw weight for `category`.
    #[must_use]
    pub const fn get(&self, category: Category) -> f64 {
        self.0.get(category)
    }

    /// Rescale the weights so they sum to one.
    ///
    /// A vector whose weights are all zero yields [`DEFAULT_WEIGHTS`]
    /// exactly.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "normalisation divides each weight by the total"
    )]
    pub fn normalize(&self) -> NormalizedWeights {
        let total = sum(&self.0);
        if total.is_finite() && total > 0.0 {
            return NormalizedWeights(self.0.map(|value| value / total));
        }
        let peak = self.0.iter().map(|(_, value)| value).fold(0.0_f64, f64::max);
        if peak <= 0.0 {
            return NormalizedWeights::default_distribution();
        }
        // Individually finite weights can still overflow when summed.
        let scaled = self.0.map(|value| value / peak);
        let scaled_total = sum(&scaled);
        NormalizedWeights(scaled.map(|value| value / scaled_total))
    }
}

impl TryFrom<PerCategory<f64>> for PreferenceVector {
    type Error = PreferenceError;

    fn try_from(raw: PerCategory<f64>) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<PreferenceVector> for PerCategory<f64> {
    fn from(vector: PreferenceVector) -> Self {
        vector.0
    }
}

/// Weights that sum to one, one per category.
///
/// Only produced by [`PreferenceVector::normalize`] or
/// [`NormalizedWeights::default_distribution`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct NormalizedWeights(PerCategory<f64>);

impl NormalizedWeights {
    /// The fixed distribution used when no preference is expressed.
    #[must_use]
    pub const fn default_distribution() -> Self {
        Self(DEFAULT_WEIGHTS)
    }

    /// Weight for `category`.
    #[must_use]
    pub const fn get(&self, category: Category) -> f64 {
        self.0.get(category)
    }

    /// Borrow the weights.
    #[must_use]
    pub const fn as_per_category(&self) -> &PerCategory<f64> {
        &self.0
    }

    /// Sum of the weights; one within floating-point tolerance.
    #[must_use]
    pub fn sum(&self) -> f64 {
        sum(&self.0)
    }

    /// Reinterpret the weights as a raw preference vector.
    #[must_use]
    pub const fn to_preferences(&self) -> PreferenceVector {
        PreferenceVector(self.0)
    }
}

#[expect(clippy::float_arithmetic, reason = "weights are summed")]
fn sum(values: &PerCategory<f64>) -> f64 {
    values.iter().map(|(_, value)| value).sum()
}
