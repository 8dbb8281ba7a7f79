//! JSON schemas for the exported training artifacts.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ClassifierError;

/// The fitted vectorizer's vocabulary: token to feature column.
#[derive(Debug, Clone, Deserialize)]
pub struct VectorizerArtifact {
    /// Token to column index, as fitted on the training corpus.
    pub vocabulary: HashMap<String, usize>,

    /// Whether the vectorizer lowercased input before tokenizing.
    #[serde(default = "default_lowercase")]
    pub lowercase: bool,
}

/// The fitted linear classifier: one coefficient row and one intercept per
/// label, in training-index order.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierArtifact {
    pub coefficients: Vec<Vec<f32>>,
    pub intercepts: Vec<f32>,
}

fn default_lowercase() -> bool {
    true
}

impl VectorizerArtifact {
    /// Read and parse a vectorizer export.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ClassifierError> {
        read_json(path.as_ref())
    }
}

impl ClassifierArtifact {
    /// Read and parse a classifier export.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ClassifierError> {
        read_json(path.as_ref())
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ClassifierError> {
    let contents = fs::read_to_string(path).map_err(|source| ClassifierError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ClassifierError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vectorizer_lowercase_defaults_true() {
        let artifact: VectorizerArtifact =
            serde_json::from_str(r#"{"vocabulary": {"hello": 0}}"#).unwrap();
        assert!(artifact.lowercase);
        assert_eq!(artifact.vocabulary["hello"], 0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = VectorizerArtifact::from_file("/nonexistent/count_vectorizer.json");
        assert!(matches!(result, Err(ClassifierError::Io { .. })));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logistic_model.json");
        std::fs::write(&path, "{not json").unwrap();

        let result = ClassifierArtifact::from_file(&path);
        assert!(matches!(result, Err(ClassifierError::Json { .. })));
    }
}
