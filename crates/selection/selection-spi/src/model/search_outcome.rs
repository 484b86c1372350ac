//! Search result models.

use serde::{Deserialize, Serialize};

use crate::model::FeatureSet;

/// One completed round of a greedy search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Round number, starting at 1.
    pub round: usize,
    /// Highest-scoring candidate of the round.
    pub winner: FeatureSet,
}

/// Complete result of one search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// The starting subset and its score (round 0). Never participates in
    /// best-ever tracking.
    pub baseline: FeatureSet,
    /// Round winners in order; exactly `num_features` entries.
    pub rounds: Vec<RoundOutcome>,
    /// Highest-scoring round winner across the whole run.
    pub best: FeatureSet,
    /// First round whose winner scored strictly below the best-ever at that
    /// point, if any. The warning latch: fires at most once per run.
    pub degradation_round: Option<usize>,
    /// Total oracle calls (baseline plus every candidate).
    pub evaluations: usize,
}

impl SearchOutcome {
    /// Number of completed rounds.
    pub fn num_rounds(&self) -> usize {
        self.rounds.len()
    }

    /// Round winners in round order.
    pub fn round_winners(&self) -> impl Iterator<Item = &FeatureSet> {
        self.rounds.iter().map(|r| &r.winner)
    }

    /// Whether quality degraded at some point during the search.
    pub fn degraded(&self) -> bool {
        self.degradation_round.is_some()
    }
}
