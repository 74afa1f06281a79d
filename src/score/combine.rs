//! Positive-evidence certainty-factor combination.
//!
//! `combine(a, b) = a + b * (1 - a)`: monotone non-decreasing in each input
//! and saturating toward 1. For non-negative inputs (all inputs here are)
//! the rule is associative and commutative, so the fold order over a
//! category's symptom CFs does not matter.

use super::normalize::clamp01;

/// Merge two certainty factors in [0,1].
pub fn combine(a: f64, b: f64) -> f64 {
    clamp01(a + b * (1.0 - a))
}

/// Fold an ordered set of symptom CFs into one category CF.
/// Empty input yields 0.
pub fn combine_all(cfs: impl IntoIterator<Item = f64>) -> f64 {
    clamp01(cfs.into_iter().fold(0.0, |acc, cf| acc + cf * (1.0 - acc)))
}
