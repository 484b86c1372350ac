//! Dataset loading for feature search
//!
//! Parses the classic whitespace-delimited numeric format: one instance per
//! line, the class label first, feature values after it.

mod parser;

pub use parser::{Dataset, DatasetError, Instance, Result};
