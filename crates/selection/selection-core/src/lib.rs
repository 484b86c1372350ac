//! Selection Core
//!
//! **WARNING: This is an internal crate. Do not depend on it directly.**
//! **Use `selection-facade` instead for a stable public API.**
//!
//! Implementation of the greedy round-based feature subset search.

pub mod candidates;
pub mod engine;
pub mod observer;
pub mod oracle;

// Re-export SPI types
pub use selection_spi::{
    CandidateGenerator, EvaluationOracle, FeatureSet, Result, RoundOutcome, SearchDirection,
    SearchObserver, SearchOutcome, SelectionError,
};

// Re-export API types
pub use selection_api::SearchConfig;

// Re-export generator implementations
pub use candidates::{create_generator, BackwardGenerator, ForwardGenerator};

// Re-export the engine
pub use engine::SearchEngine;

// Re-export observer implementations
pub use observer::{CollectingObserver, SilentObserver};

// Re-export oracle implementations
pub use oracle::{FixtureOracle, RandomOracle};
