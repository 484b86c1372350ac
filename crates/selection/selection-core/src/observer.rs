//! Built-in search observers.

use selection_spi::{FeatureSet, RoundOutcome, SearchObserver};

/// Observer that ignores every event. For callers that only want the
/// returned `SearchOutcome`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl SearchObserver for SilentObserver {}

/// Observer that records every event, in order, for post-hoc inspection.
#[derive(Debug, Clone, Default)]
pub struct CollectingObserver {
    pub baseline: Option<FeatureSet>,
    pub rounds: Vec<RoundOutcome>,
    pub degradations: Vec<usize>,
}

impl CollectingObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchObserver for CollectingObserver {
    fn on_baseline(&mut self, baseline: &FeatureSet) {
        self.baseline = Some(baseline.clone());
    }

    fn on_round(&mut self, outcome: &RoundOutcome) {
        self.rounds.push(outcome.clone());
    }

    fn on_degradation(&mut self, round: usize) {
        self.degradations.push(round);
    }
}
