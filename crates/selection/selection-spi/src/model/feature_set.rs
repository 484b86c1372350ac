//! Scored feature subset.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A subset of feature indices together with its oracle score.
///
/// Indices are zero-based internally and kept in the order features were
/// added or retained; `display_indices` shifts them to the one-based form
/// used in all user-facing output. Ordering compares `score` alone; ties
/// compare equal regardless of the subsets involved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureSet {
    /// Quality value the oracle assigned to this subset. Higher is better.
    pub score: f64,
    /// Selected feature indices, zero-based.
    pub features: Vec<usize>,
}

impl FeatureSet {
    pub fn new(score: f64, features: Vec<usize>) -> Self {
        Self { score, features }
    }

    /// The empty subset with the given score.
    pub fn empty(score: f64) -> Self {
        Self {
            score,
            features: Vec::new(),
        }
    }

    /// Number of selected features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Whether the subset contains the given zero-based feature index.
    pub fn contains(&self, feature: usize) -> bool {
        self.features.contains(&feature)
    }

    /// One-based indices for display, in stored order.
    pub fn display_indices(&self) -> Vec<usize> {
        self.features.iter().map(|f| f + 1).collect()
    }
}

impl PartialEq for FeatureSet {
    fn eq(&self, other: &Self) -> bool {
        self.score.total_cmp(&other.score) == Ordering::Equal
    }
}

impl Eq for FeatureSet {}

impl PartialOrd for FeatureSet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FeatureSet {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score.total_cmp(&other.score)
    }
}

impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indices = self
            .display_indices()
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "Feature set {{{}}} with accuracy: {}", indices, self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_indices_are_one_based() {
        let set = FeatureSet::new(50.0, vec![0, 2, 5]);
        assert_eq!(set.display_indices(), vec![1, 3, 6]);
    }

    #[test]
    fn test_display_format() {
        let set = FeatureSet::new(52.3, vec![1, 0, 4]);
        assert_eq!(set.to_string(), "Feature set {2,1,5} with accuracy: 52.3");
    }

    #[test]
    fn test_display_empty_subset() {
        let set = FeatureSet::empty(10.0);
        assert_eq!(set.to_string(), "Feature set {} with accuracy: 10");
    }

    #[test]
    fn test_display_is_idempotent() {
        let set = FeatureSet::new(65.0, vec![1, 2]);
        assert_eq!(set.to_string(), set.to_string());
    }

    #[test]
    fn test_ordering_by_score_only() {
        let small = FeatureSet::new(10.0, vec![0, 1, 2]);
        let large = FeatureSet::new(90.0, vec![3]);
        assert!(large > small);
        assert_eq!(large.max(small).features, vec![3]);
    }

    #[test]
    fn test_equal_scores_compare_equal() {
        let a = FeatureSet::new(42.0, vec![0]);
        let b = FeatureSet::new(42.0, vec![1, 2]);
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn test_negative_scores_order_correctly() {
        let worse = FeatureSet::new(-5.0, vec![0]);
        let better = FeatureSet::new(-1.0, vec![1]);
        assert!(better > worse);
    }

    #[test]
    fn test_contains_and_len() {
        let set = FeatureSet::new(0.0, vec![3, 1]);
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert!(set.contains(3));
        assert!(!set.contains(0));
    }
}
