//! Selection Service Provider Interface
//!
//! Defines the extension points of the greedy feature search stack:
//! - Evaluation oracles (subset scoring)
//! - Candidate generation strategies (search direction)
//! - Search observers (round-by-round reporting)

pub mod contract;
pub mod direction;
pub mod error;
pub mod model;

// Re-export all public items at the crate root for convenient consumption
pub use contract::{CandidateGenerator, EvaluationOracle, SearchObserver};
pub use direction::SearchDirection;
pub use error::SelectionError;
pub use model::{FeatureSet, RoundOutcome, SearchOutcome};

/// Result type for selection operations.
pub type Result<T> = std::result::Result<T, SelectionError>;
