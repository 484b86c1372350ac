//! Selection Facade
//!
//! High-level API for greedy feature subset search. Re-exports all public
//! types from the selection stack for convenient usage.
//!
//! # Example
//!
//! ```
//! use selection_facade::prelude::*;
//!
//! let oracle = RandomOracle::seeded(7);
//! let engine = SearchEngine::forward();
//! let outcome = engine.run(4, &oracle, &mut SilentObserver)?;
//! println!("Best subset: {}", outcome.best);
//! # Ok::<(), SelectionError>(())
//! ```

// Re-export everything from core (which includes API and SPI)
pub use selection_core::*;

/// Prelude module for convenient imports
pub mod prelude {
    // Traits
    pub use selection_spi::{CandidateGenerator, EvaluationOracle, SearchObserver};

    // Core types
    pub use selection_api::SearchConfig;
    pub use selection_spi::{
        FeatureSet, Result, RoundOutcome, SearchDirection, SearchOutcome, SelectionError,
    };

    // Implementations
    pub use selection_core::{
        create_generator, BackwardGenerator, CollectingObserver, FixtureOracle, ForwardGenerator,
        RandomOracle, SearchEngine, SilentObserver,
    };
}
