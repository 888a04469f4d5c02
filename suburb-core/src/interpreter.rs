//! Contract for turning free text into preferences.
//!
//! The engine does not understand language itself. A
//! [`PreferenceInterpreter`] maps a query to a raw [`PreferenceVector`] and,
//! optionally, a search location. Its output goes through the same
//! normalisation as direct input.

use geo::Coord;
use thiserror::Error;

use crate::PreferenceVector;

/// Preferences extracted from a free-text query.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Interpretation {
    /// Raw preference weights. All zeros means no preference was expressed.
    pub preferences: PreferenceVector,
    /// Optional search centre (`x = longitude`, `y = latitude`).
    pub location: Option<Coord<f64>>,
    /// Optional search radius in kilometres.
    pub radius_km: Option<f64>,
}

impl Interpretation {
    /// An interpretation carrying preferences but no location.
    #[must_use]
    pub const fn from_preferences(preferences: PreferenceVector) -> Self {
        Self {
            preferences,
            location: None,
            radius_km: None,
        }
    }
}

/// Failures of an interpreter.
///
/// These are distinct from an interpretation that expresses no preference
/// and are never replaced by default weights.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpreterError {
    /// The interpreter could not be reached or is not configured.
    #[error("preference interpreter unavailable: {reason}")]
    Unavailable {
        /// Human-readable cause.
        reason: String,
    },
    /// The interpreter answered with output that could not be used.
    #[error("preference interpreter returned unusable output: {reason}")]
    InvalidOutput {
        /// Human-readable cause.
        reason: String,
    },
}

/// Map a free-text query to preferences.
///
/// Implementations must be `Send + Sync` so they can be shared by concurrent
/// requests.
///
/// # Examples
///
/// ```rust
/// use suburb_core::{Interpretation, InterpreterError, PreferenceInterpreter, PreferenceVector};
///
/// struct Indifferent;
///
/// impl PreferenceInterpreter for Indifferent {
///     fn interpret(&self, _query: &str) -> Result<Interpretation, InterpreterError> {
///         Ok(Interpretation::from_preferences(PreferenceVector::zero()))
///     }
/// }
///
/// let interpretation = Indifferent.interpret("anywhere")?;
/// assert!(interpretation.location.is_none());
/// # Ok::<(), InterpreterError>(())
/// ```
pub trait PreferenceInterpreter: Send + Sync {
    /// Interpret `query`.
    ///
    /// # Errors
    /// Returns [`InterpreterError`] when the interpreter is unavailable or
    /// its output is unusable.
    fn interpret(&self, query: &str) -> Result<Interpretation, InterpreterError>;
}
