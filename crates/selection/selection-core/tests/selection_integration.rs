//! Integration tests for selection-core
//!
//! Exercises the engine, generators, oracles, and observers together through
//! the crate's public API.

use selection_core::{
    EvaluationOracle, FeatureSet, RandomOracle, Result, RoundOutcome, SearchConfig, SearchEngine,
    SearchObserver, SilentObserver,
};

// ============================================================================
// Round Structure Properties
// ============================================================================

/// Deterministic oracle with no table: scores a subset by a fixed weight per
/// feature, minus a small penalty per extra feature.
struct WeightedOracle {
    weights: Vec<f64>,
}

impl WeightedOracle {
    fn new(weights: Vec<f64>) -> Self {
        Self { weights }
    }
}

impl EvaluationOracle for WeightedOracle {
    fn evaluate(&self, subset: &[usize]) -> Result<f64> {
        let gain: f64 = subset.iter().map(|&f| self.weights[f]).sum();
        Ok(gain - subset.len() as f64 * 0.5)
    }
}

#[test]
fn forward_search_runs_exactly_n_rounds() {
    for n in 1..=8 {
        let weights: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let outcome = SearchEngine::forward()
            .run(n, &WeightedOracle::new(weights), &mut SilentObserver)
            .unwrap();
        assert_eq!(outcome.num_rounds(), n);
    }
}

#[test]
fn backward_search_runs_exactly_n_rounds() {
    for n in 1..=8 {
        let weights: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let outcome = SearchEngine::backward()
            .run(n, &WeightedOracle::new(weights), &mut SilentObserver)
            .unwrap();
        assert_eq!(outcome.num_rounds(), n);
    }
}

#[test]
fn round_winner_arity_matches_direction() {
    let weights = vec![3.0, 1.0, 4.0, 1.5, 5.0];

    let forward = SearchEngine::forward()
        .run(5, &WeightedOracle::new(weights.clone()), &mut SilentObserver)
        .unwrap();
    for (k, winner) in forward.round_winners().enumerate() {
        assert_eq!(winner.len(), k + 1);
    }

    let backward = SearchEngine::backward()
        .run(5, &WeightedOracle::new(weights), &mut SilentObserver)
        .unwrap();
    for (k, winner) in backward.round_winners().enumerate() {
        assert_eq!(winner.len(), 5 - (k + 1));
    }
}

#[test]
fn best_is_maximum_over_round_winners() {
    let outcome = SearchEngine::forward()
        .run(
            6,
            &WeightedOracle::new(vec![2.0, -1.0, 3.0, 0.2, -0.5, 1.0]),
            &mut SilentObserver,
        )
        .unwrap();

    let max_winner = outcome
        .round_winners()
        .map(|w| w.score)
        .fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(outcome.best.score, max_winner);
}

#[test]
fn evaluation_count_is_baseline_plus_candidates() {
    // Forward over n features scores n + (n-1) + ... + 1 candidates.
    let n = 7;
    let weights: Vec<f64> = (0..n).map(|i| i as f64 * 0.1).collect();
    let outcome = SearchEngine::forward()
        .run(n, &WeightedOracle::new(weights), &mut SilentObserver)
        .unwrap();
    assert_eq!(outcome.evaluations, 1 + n * (n + 1) / 2);
}

// ============================================================================
// Degradation Reporting Order
// ============================================================================

#[derive(Default)]
struct EventLog {
    events: Vec<String>,
}

impl SearchObserver for EventLog {
    fn on_baseline(&mut self, baseline: &FeatureSet) {
        self.events.push(format!("baseline:{}", baseline.score));
    }

    fn on_round(&mut self, outcome: &RoundOutcome) {
        self.events.push(format!("round:{}", outcome.round));
    }

    fn on_degradation(&mut self, round: usize) {
        self.events.push(format!("degradation:{}", round));
    }
}

#[test]
fn degradation_is_reported_before_its_round() {
    // Negative weights make every feature after the first a loss.
    let mut log = EventLog::default();
    SearchEngine::forward()
        .run(
            3,
            &WeightedOracle::new(vec![10.0, -5.0, -6.0]),
            &mut log,
        )
        .unwrap();

    let degradation_pos = log
        .events
        .iter()
        .position(|e| e.starts_with("degradation:"))
        .expect("degradation must fire");
    assert_eq!(log.events[degradation_pos], "degradation:2");
    assert_eq!(log.events[degradation_pos + 1], "round:2");
    // Exactly one degradation event despite two degrading rounds.
    let count = log
        .events
        .iter()
        .filter(|e| e.starts_with("degradation:"))
        .count();
    assert_eq!(count, 1);
}

// ============================================================================
// Seeded Random Oracle Reproducibility
// ============================================================================

#[test]
fn seeded_random_searches_reproduce() {
    let first = SearchEngine::forward()
        .run(6, &RandomOracle::seeded(1234), &mut SilentObserver)
        .unwrap();
    let second = SearchEngine::forward()
        .run(6, &RandomOracle::seeded(1234), &mut SilentObserver)
        .unwrap();

    assert_eq!(first.best.features, second.best.features);
    assert_eq!(first.best.score, second.best.score);
    assert_eq!(first.degradation_round, second.degradation_round);
}

#[test]
fn parallel_seeded_search_matches_sequential() {
    let oracle = RandomOracle::seeded(99);

    let sequential = SearchEngine::new(SearchConfig::backward())
        .run(8, &oracle, &mut SilentObserver)
        .unwrap();
    let parallel = SearchEngine::new(SearchConfig::backward().with_parallel(true))
        .run(8, &oracle, &mut SilentObserver)
        .unwrap();

    let seq: Vec<_> = sequential.round_winners().map(|w| w.features.clone()).collect();
    let par: Vec<_> = parallel.round_winners().map(|w| w.features.clone()).collect();
    assert_eq!(seq, par);
    assert_eq!(sequential.degradation_round, parallel.degradation_round);
}
