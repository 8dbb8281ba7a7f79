//! Error types for classifier loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating the pre-trained artifacts.
///
/// All of these indicate a deployment defect (missing or corrupt export);
/// none are retryable, and the service should refuse to start on any of
/// them.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// An artifact file could not be read.
    #[error("failed to read artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An artifact file was not valid JSON of the expected schema.
    #[error("failed to parse artifact {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The classifier was trained against a different label set.
    #[error("classifier expects {expected} labels, artifact has {actual}")]
    LabelCardinality { expected: usize, actual: usize },

    /// Coefficient rows disagree on the feature width.
    #[error("coefficient row {row} has {actual} columns, expected {expected}")]
    RaggedCoefficients {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// The vectorizer vocabulary does not match the classifier's width.
    #[error("vectorizer has {vocabulary} features but coefficient rows have {width} columns")]
    FeatureWidthMismatch { vocabulary: usize, width: usize },

    /// A vocabulary entry points outside the coefficient rows.
    #[error("vocabulary token {token:?} maps to column {column}, outside feature width {width}")]
    VocabularyOutOfRange {
        token: String,
        column: usize,
        width: usize,
    },
}
