//! Fixture-backed deterministic oracle.

use std::collections::HashMap;

use selection_spi::{EvaluationOracle, Result, SelectionError};

/// Lookup-table oracle for deterministic tests and benches.
///
/// Keys are stored sorted, so the insertion order of a subset does not
/// matter. An unknown subset is an evaluation failure, which exercises the
/// fatal-abort path of the engine.
#[derive(Debug, Clone, Default)]
pub struct FixtureOracle {
    scores: HashMap<Vec<usize>, f64>,
}

impl FixtureOracle {
    pub fn new() -> Self {
        Self {
            scores: HashMap::new(),
        }
    }

    /// Build from `(subset, score)` pairs.
    pub fn from_table<I>(table: I) -> Self
    where
        I: IntoIterator<Item = (Vec<usize>, f64)>,
    {
        let mut oracle = Self::new();
        for (subset, score) in table {
            oracle.insert(subset, score);
        }
        oracle
    }

    /// Register the score for a subset.
    pub fn insert(&mut self, subset: Vec<usize>, score: f64) {
        self.scores.insert(Self::key(&subset), score);
    }

    /// Number of registered subsets.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    fn key(subset: &[usize]) -> Vec<usize> {
        let mut key = subset.to_vec();
        key.sort_unstable();
        key
    }
}

impl EvaluationOracle for FixtureOracle {
    fn evaluate(&self, subset: &[usize]) -> Result<f64> {
        self.scores
            .get(&Self::key(subset))
            .copied()
            .ok_or_else(|| {
                SelectionError::EvaluationFailed(format!(
                    "no fixture score for subset {:?}",
                    subset
                ))
            })
    }
}
