//! Selection Consumer API
//!
//! Configuration types and DTOs for feature search consumers.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use selection_spi::{
    CandidateGenerator, EvaluationOracle, FeatureSet, Result, RoundOutcome, SearchDirection,
    SearchObserver, SearchOutcome, SelectionError,
};

/// Configuration for one greedy search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Direction to walk the subset lattice.
    pub direction: SearchDirection,
    /// Score each round's candidates on the rayon thread pool. Observable
    /// output is identical to sequential scoring.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            direction: SearchDirection::Forward,
            parallel: false,
        }
    }
}

impl SearchConfig {
    /// Forward selection: start empty, add one feature per round.
    pub fn forward() -> Self {
        Self {
            direction: SearchDirection::Forward,
            ..Self::default()
        }
    }

    /// Backward elimination: start full, remove one feature per round.
    pub fn backward() -> Self {
        Self {
            direction: SearchDirection::Backward,
            ..Self::default()
        }
    }

    /// Enable or disable parallel candidate scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
