//! Candidate generator implementations.

use selection_spi::{CandidateGenerator, SearchDirection};

/// Forward selection: grow the subset by one untouched feature per round.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardGenerator;

impl ForwardGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl CandidateGenerator for ForwardGenerator {
    fn initial_subset(&self, _num_features: usize) -> Vec<usize> {
        Vec::new()
    }

    fn round_candidates(&self, selected: &[usize], num_features: usize) -> Vec<Vec<usize>> {
        (0..num_features)
            .filter(|feature| !selected.contains(feature))
            .map(|feature| {
                let mut candidate = selected.to_vec();
                candidate.push(feature);
                candidate
            })
            .collect()
    }

    fn direction(&self) -> SearchDirection {
        SearchDirection::Forward
    }
}

/// Backward elimination: shrink the subset by one retained feature per round.
#[derive(Debug, Clone, Copy, Default)]
pub struct BackwardGenerator;

impl BackwardGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl CandidateGenerator for BackwardGenerator {
    fn initial_subset(&self, num_features: usize) -> Vec<usize> {
        (0..num_features).collect()
    }

    fn round_candidates(&self, selected: &[usize], num_features: usize) -> Vec<Vec<usize>> {
        (0..num_features)
            .filter(|feature| selected.contains(feature))
            .map(|feature| {
                selected
                    .iter()
                    .copied()
                    .filter(|&kept| kept != feature)
                    .collect()
            })
            .collect()
    }

    fn direction(&self) -> SearchDirection {
        SearchDirection::Backward
    }
}

/// Create the generator for a direction.
pub fn create_generator(direction: SearchDirection) -> Box<dyn CandidateGenerator> {
    match direction {
        SearchDirection::Forward => Box::new(ForwardGenerator::new()),
        SearchDirection::Backward => Box::new(BackwardGenerator::new()),
    }
}
