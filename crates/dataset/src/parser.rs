//! Dataset model and text parser.

use std::fs;
use std::path::Path;

use thiserror::Error;

/// Dataset errors.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Reading the input file failed
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// No instances could be parsed
    #[error("Dataset contains no instances")]
    Empty,

    /// The first instance carries no feature columns
    #[error("Dataset instances have no feature columns")]
    NoFeatures,
}

/// Result type for dataset operations.
pub type Result<T> = std::result::Result<T, DatasetError>;

/// One labeled record: class label plus its feature values.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    /// Class label (first token on the line).
    pub label: f64,
    /// Feature values in column order.
    pub features: Vec<f64>,
}

/// A parsed dataset with a fixed feature arity.
///
/// The search core consumes only `num_features` and `len`; the full values
/// are retained for oracles that score subsets against real instances. The
/// arity is taken from the first instance and assumed constant.
#[derive(Debug, Clone)]
pub struct Dataset {
    instances: Vec<Instance>,
    num_features: usize,
}

impl Dataset {
    /// Build a dataset from parsed instances.
    ///
    /// Rejects an empty instance list and a zero-column first instance, so a
    /// constructed dataset always yields a usable feature universe.
    pub fn new(instances: Vec<Instance>) -> Result<Self> {
        let first = instances.first().ok_or(DatasetError::Empty)?;
        if first.features.is_empty() {
            return Err(DatasetError::NoFeatures);
        }
        let num_features = first.features.len();
        Ok(Self {
            instances,
            num_features,
        })
    }

    /// Parse dataset text.
    ///
    /// One instance per line, whitespace-separated numeric tokens, label
    /// first. Parsing stops at the first blank line or line whose leading
    /// token is not a number; a feature token that fails to parse ends that
    /// line's feature list.
    pub fn parse(input: &str) -> Result<Self> {
        let mut instances = Vec::new();

        for line in input.lines() {
            let mut tokens = line.split_whitespace();
            let label = match tokens.next().and_then(|t| t.parse::<f64>().ok()) {
                Some(label) => label,
                None => break,
            };
            let features: Vec<f64> = tokens.map_while(|t| t.parse::<f64>().ok()).collect();
            instances.push(Instance { label, features });
        }

        Self::new(instances)
    }

    /// Load and parse a dataset file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Number of instances.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Feature arity (count of feature columns in the first instance).
    pub fn num_features(&self) -> usize {
        self.num_features
    }

    /// All parsed instances.
    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    /// Class labels in instance order.
    pub fn labels(&self) -> Vec<f64> {
        self.instances.iter().map(|i| i.label).collect()
    }

    /// Values of one feature column across all instances that have it.
    pub fn feature_column(&self, index: usize) -> Vec<f64> {
        self.instances
            .iter()
            .filter_map(|i| i.features.get(index).copied())
            .collect()
    }
}
