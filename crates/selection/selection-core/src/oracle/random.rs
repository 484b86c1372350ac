//! Placeholder randomized oracle.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::prelude::*;

use selection_spi::{EvaluationOracle, Result};

/// Placeholder oracle: uniform pseudo-random score in `[0, 1000]`, rounded to
/// one decimal.
///
/// Stands in for a real accuracy estimator while exercising the search
/// machinery. Unseeded, every call samples fresh. Seeded, the score is a pure
/// function of the seed and the (order-insensitive) subset, so repeated runs
/// reproduce and `evaluate` stays thread-safe without interior mutability.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomOracle {
    seed: Option<u64>,
}

impl RandomOracle {
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Deterministic variant: the same seed and subset always score the same.
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    fn sample(&self, subset: &[usize]) -> f64 {
        let raw = match self.seed {
            Some(seed) => {
                let mut canonical = subset.to_vec();
                canonical.sort_unstable();
                let mut hasher = DefaultHasher::new();
                seed.hash(&mut hasher);
                canonical.hash(&mut hasher);
                StdRng::seed_from_u64(hasher.finish()).gen::<f64>() * 1000.0
            }
            None => thread_rng().gen::<f64>() * 1000.0,
        };
        (raw * 10.0).round() / 10.0
    }
}

impl EvaluationOracle for RandomOracle {
    fn evaluate(&self, subset: &[usize]) -> Result<f64> {
        Ok(self.sample(subset))
    }
}
