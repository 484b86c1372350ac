//! Search direction over the subset lattice.

use serde::{Deserialize, Serialize};

/// Which end of the subset lattice the greedy search walks from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SearchDirection {
    /// Start from the empty subset and add one feature per round.
    #[default]
    Forward,
    /// Start from the full universe and remove one feature per round.
    Backward,
}

impl SearchDirection {
    /// Whether this direction grows the subset.
    pub fn is_forward(&self) -> bool {
        matches!(self, SearchDirection::Forward)
    }
}

impl std::fmt::Display for SearchDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchDirection::Forward => write!(f, "forward selection"),
            SearchDirection::Backward => write!(f, "backward elimination"),
        }
    }
}
