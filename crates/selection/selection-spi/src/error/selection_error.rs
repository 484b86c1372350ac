//! Selection error types.

use thiserror::Error;

/// Errors that can occur while running a feature search.
#[derive(Debug, Clone, Error)]
pub enum SelectionError {
    /// The feature universe is too small to search.
    #[error("Insufficient features: need at least {required}, got {got}")]
    NoFeatures { required: usize, got: usize },

    /// Invalid search configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The evaluation oracle failed. Fatal: aborts the whole search, since a
    /// missing candidate score breaks round-winner selection.
    #[error("Evaluation failed: {0}")]
    EvaluationFailed(String),

    /// A round produced no candidate subsets.
    #[error("No candidates produced in round {round}")]
    NoCandidates { round: usize },
}
