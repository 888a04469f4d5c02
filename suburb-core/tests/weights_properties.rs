//! Property-based tests for preference normalisation.
//!
//! # Invariants tested
//!
//! - **Sum invariant:** normalised weights sum to one for any non-negative
//!   input with a positive total.
//! - **Idempotence:** normalising weights that already sum to one returns
//!   them unchanged.
//! - **Non-negativity:** no normalised weight is ever negative.

use proptest::prelude::*;
use suburb_core::{Category, PerCategory, PreferenceVector};

fn raw_weights() -> impl Strategy<Value = PerCategory<f64>> {
    proptest::array::uniform5(0.0_f64..1_000.0).prop_map(
        |[recreation, community, transport, education, utility]| PerCategory {
            recreation,
            community,
            transport,
            education,
            utility,
        },
    )
}

fn positive_total() -> impl Strategy<Value = PerCategory<f64>> {
    raw_weights().prop_filter("total must be positive", |raw| {
        raw.iter().any(|(_, value)| value > 0.0)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: normalised weights sum to one within 1e-9.
    #[test]
    #[expect(clippy::float_arithmetic, reason = "property compares sums")]
    fn normalised_weights_sum_to_one(raw in positive_total()) {
        let preferences = PreferenceVector::new(raw).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let weights = preferences.normalize();
        prop_assert!((weights.sum() - 1.0).abs() < 1e-9, "sum was {}", weights.sum());
    }

    /// Property: normalisation is idempotent.
    #[test]
    #[expect(clippy::float_arithmetic, reason = "property compares weights")]
    fn normalisation_is_idempotent(raw in raw_weights()) {
        let preferences = PreferenceVector::new(raw).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let once = preferences.normalize();
        let twice = once.to_preferences().normalize();
        for category in Category::ALL {
            prop_assert!((once.get(category) - twice.get(category)).abs() < 1e-9);
        }
    }

    /// Property: normalised weights are never negative.
    #[test]
    fn normalised_weights_are_non_negative(raw in raw_weights()) {
        let preferences = PreferenceVector::new(raw).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let weights = preferences.normalize();
        prop_assert!(Category::ALL.iter().all(|category| weights.get(*category) >= 0.0));
    }
}
