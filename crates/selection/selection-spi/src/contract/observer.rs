//! Search observer contract.

use crate::model::{FeatureSet, RoundOutcome};

/// Receives progress while a search runs.
///
/// The engine reports the round-0 baseline, every round winner, and the
/// one-shot degradation event in the order they occur. All methods default to
/// no-ops so implementations override only what they render.
pub trait SearchObserver {
    /// The starting subset has been scored.
    fn on_baseline(&mut self, _baseline: &FeatureSet) {}

    /// A round finished; `outcome.winner` carries into the next round.
    fn on_round(&mut self, _outcome: &RoundOutcome) {}

    /// First round whose winner scored below the best-ever. Reported at most
    /// once per run, before the round itself is reported.
    fn on_degradation(&mut self, _round: usize) {}
}
