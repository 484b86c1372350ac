//! Error types for the selection stack.

mod selection_error;

pub use selection_error::SelectionError;

/// Result type for selection operations.
pub type Result<T> = std::result::Result<T, SelectionError>;
