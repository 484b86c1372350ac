//! Evaluation oracle contract.

use crate::error::Result;

/// Opaque scoring function for candidate subsets.
///
/// The search engine treats the score as its only signal: no determinism or
/// monotonicity is assumed, and the empty subset and the full universe are
/// both legal inputs, any number of times. A returned error aborts the
/// in-progress search.
pub trait EvaluationOracle: Send + Sync {
    /// Score a subset of zero-based feature indices. Higher is better.
    fn evaluate(&self, subset: &[usize]) -> Result<f64>;
}
