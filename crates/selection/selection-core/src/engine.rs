//! Greedy round-based subset search engine.

use rayon::prelude::*;

use selection_api::SearchConfig;
use selection_spi::{
    CandidateGenerator, EvaluationOracle, FeatureSet, Result, RoundOutcome, SearchObserver,
    SearchOutcome, SelectionError,
};

use crate::candidates::create_generator;

/// Greedy best-first subset search over a fixed feature universe.
///
/// One engine serves both directions: the round loop is identical, only the
/// candidate strategy differs. The search always runs exactly `num_features`
/// rounds, past any degradation, since a later round may still recover a
/// better subset under a stochastic oracle.
pub struct SearchEngine {
    config: SearchConfig,
    generator: Box<dyn CandidateGenerator>,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        let generator = create_generator(config.direction);
        Self { config, generator }
    }

    /// Engine configured for forward selection.
    pub fn forward() -> Self {
        Self::new(SearchConfig::forward())
    }

    /// Engine configured for backward elimination.
    pub fn backward() -> Self {
        Self::new(SearchConfig::backward())
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run the search to completion.
    ///
    /// Reports the baseline, each round winner, and the one-shot degradation
    /// event through `observer` as they happen; the returned outcome carries
    /// the same information for post-hoc consumption.
    pub fn run(
        &self,
        num_features: usize,
        oracle: &dyn EvaluationOracle,
        observer: &mut dyn SearchObserver,
    ) -> Result<SearchOutcome> {
        if num_features == 0 {
            return Err(SelectionError::NoFeatures {
                required: 1,
                got: 0,
            });
        }

        let initial = self.generator.initial_subset(num_features);
        let baseline = FeatureSet::new(oracle.evaluate(&initial)?, initial);
        let mut evaluations = 1usize;
        observer.on_baseline(&baseline);

        let mut selected = baseline.features.clone();
        let mut best: Option<FeatureSet> = None;
        let mut degradation_round: Option<usize> = None;
        let mut rounds = Vec::with_capacity(num_features);

        for round in 1..=num_features {
            let candidates = self.generator.round_candidates(&selected, num_features);
            let scored = self.score_candidates(candidates, oracle)?;
            evaluations += scored.len();

            // Running maximum; strict comparison keeps the first-encountered
            // candidate on ties, and candidate order is ascending by touched
            // feature index.
            let winner = scored
                .into_iter()
                .reduce(|leader, candidate| if candidate > leader { candidate } else { leader })
                .ok_or(SelectionError::NoCandidates { round })?;

            match &best {
                None => best = Some(winner.clone()),
                Some(current) if winner > *current => best = Some(winner.clone()),
                Some(current) => {
                    if winner < *current && degradation_round.is_none() {
                        degradation_round = Some(round);
                        observer.on_degradation(round);
                    }
                }
            }

            let outcome = RoundOutcome { round, winner };
            observer.on_round(&outcome);
            selected = outcome.winner.features.clone();
            rounds.push(outcome);
        }

        let best = best.ok_or(SelectionError::NoCandidates { round: num_features })?;

        Ok(SearchOutcome {
            baseline,
            rounds,
            best,
            degradation_round,
            evaluations,
        })
    }

    fn score_candidates(
        &self,
        candidates: Vec<Vec<usize>>,
        oracle: &dyn EvaluationOracle,
    ) -> Result<Vec<FeatureSet>> {
        if self.config.parallel {
            candidates
                .into_par_iter()
                .map(|subset| Ok(FeatureSet::new(oracle.evaluate(&subset)?, subset)))
                .collect()
        } else {
            candidates
                .into_iter()
                .map(|subset| Ok(FeatureSet::new(oracle.evaluate(&subset)?, subset)))
                .collect()
        }
    }
}
