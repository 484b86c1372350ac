//! Extension-point traits for the selection stack.

mod generator;
mod observer;
mod oracle;

pub use generator::CandidateGenerator;
pub use observer::SearchObserver;
pub use oracle::EvaluationOracle;
