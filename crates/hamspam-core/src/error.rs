use std::path::PathBuf;

use thiserror::Error;

use crate::types::Label;

/// Errors that can occur while building, training or evaluating a classifier.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// An input file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The training corpus has no line with a `ham` or `spam` label.
    #[error("training corpus contains no labeled examples")]
    EmptyTrainingSet,

    /// The evaluation set has no line with at least two tab-separated fields.
    #[error("evaluation set contains no valid lines")]
    EmptyEvaluationSet,

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A trained probability is not strictly positive and finite.
    #[error("model invariant violated: P({token:?}|{label}) = {probability}")]
    ModelInvariant {
        /// The attribute whose probability is broken.
        token: String,
        /// The label it was estimated for.
        label: Label,
        /// The offending value.
        probability: f64,
    },
}

impl ClassifierError {
    /// Returns `true` for errors caused by empty or unusable input data.
    #[must_use]
    pub fn is_data_error(&self) -> bool {
        matches!(self, Self::EmptyTrainingSet | Self::EmptyEvaluationSet)
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for classifier operations.
pub type Result<T> = std::result::Result<T, ClassifierError>;
