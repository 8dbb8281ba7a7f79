//! Tone inference over the loaded artifacts.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use tone_core::ToneLabel;
use tracing::info;

use crate::artifacts::{ClassifierArtifact, VectorizerArtifact};
use crate::error::ClassifierError;

/// The pre-trained vectorizer + classifier pair.
///
/// Immutable after construction and safe to share across request handlers;
/// [`classify`](ToneClassifier::classify) takes `&self` and performs no IO.
pub struct ToneClassifier {
    vocabulary: HashMap<String, usize>,
    lowercase: bool,
    coefficients: Vec<Vec<f32>>,
    intercepts: Vec<f32>,
}

impl ToneClassifier {
    /// Load both artifacts from disk and validate them.
    pub fn load(
        vectorizer_path: impl AsRef<Path>,
        classifier_path: impl AsRef<Path>,
    ) -> Result<Self, ClassifierError> {
        let vectorizer = VectorizerArtifact::from_file(vectorizer_path)?;
        let classifier = ClassifierArtifact::from_file(classifier_path)?;
        let loaded = Self::from_artifacts(vectorizer, classifier)?;
        info!(
            features = loaded.feature_count(),
            labels = ToneLabel::COUNT,
            "tone classifier loaded"
        );
        Ok(loaded)
    }

    /// Build a classifier from already-parsed artifacts.
    ///
    /// Validates that the classifier was trained against exactly
    /// [`ToneLabel::COUNT`] labels, that coefficient rows agree on a single
    /// feature width, and that every vocabulary column lands inside that
    /// width. After this, an out-of-range prediction is unrepresentable.
    pub fn from_artifacts(
        vectorizer: VectorizerArtifact,
        classifier: ClassifierArtifact,
    ) -> Result<Self, ClassifierError> {
        if classifier.intercepts.len() != ToneLabel::COUNT {
            return Err(ClassifierError::LabelCardinality {
                expected: ToneLabel::COUNT,
                actual: classifier.intercepts.len(),
            });
        }
        if classifier.coefficients.len() != ToneLabel::COUNT {
            return Err(ClassifierError::LabelCardinality {
                expected: ToneLabel::COUNT,
                actual: classifier.coefficients.len(),
            });
        }

        let width = classifier.coefficients[0].len();
        for (row, coefficients) in classifier.coefficients.iter().enumerate() {
            if coefficients.len() != width {
                return Err(ClassifierError::RaggedCoefficients {
                    row,
                    expected: width,
                    actual: coefficients.len(),
                });
            }
        }

        if vectorizer.vocabulary.len() != width {
            return Err(ClassifierError::FeatureWidthMismatch {
                vocabulary: vectorizer.vocabulary.len(),
                width,
            });
        }
        for (token, &column) in &vectorizer.vocabulary {
            if column >= width {
                return Err(ClassifierError::VocabularyOutOfRange {
                    token: token.clone(),
                    column,
                    width,
                });
            }
        }

        Ok(Self {
            vocabulary: vectorizer.vocabulary,
            lowercase: vectorizer.lowercase,
            coefficients: classifier.coefficients,
            intercepts: classifier.intercepts,
        })
    }

    /// Number of feature columns the model was trained with.
    pub fn feature_count(&self) -> usize {
        self.coefficients[0].len()
    }

    /// Classify a non-empty utterance into a tone label.
    ///
    /// Pure and deterministic: token counts over the fixed vocabulary, one
    /// dot product per label, argmax with ties resolved to the lowest
    /// training index. Out-of-vocabulary tokens contribute nothing.
    pub fn classify(&self, text: &str) -> ToneLabel {
        let counts = self.term_counts(text);

        let mut best = ToneLabel::ALL[0];
        let mut best_score = f32::NEG_INFINITY;
        for (label, (row, intercept)) in ToneLabel::ALL
            .iter()
            .zip(self.coefficients.iter().zip(&self.intercepts))
        {
            let mut score = *intercept;
            for (&column, &count) in &counts {
                score += row[column] * count;
            }
            // strict > keeps the lowest index on exact ties
            if score > best_score {
                best_score = score;
                best = *label;
            }
        }
        best
    }

    /// Sparse term counts over the vocabulary.
    ///
    /// BTreeMap keeps the summation order stable between calls, so repeated
    /// classification of the same text accumulates floats identically.
    fn term_counts(&self, text: &str) -> BTreeMap<usize, f32> {
        let source: Cow<'_, str> = if self.lowercase {
            Cow::Owned(text.to_lowercase())
        } else {
            Cow::Borrowed(text)
        };

        let mut counts = BTreeMap::new();
        for token in word_tokens(&source) {
            if let Some(&column) = self.vocabulary.get(token) {
                *counts.entry(column).or_insert(0.0) += 1.0;
            }
        }
        counts
    }
}

/// Tokenize the way the training vectorizer did: tokens are runs of word
/// characters at least two characters long, everything else separates.
fn word_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|token| token.chars().count() >= 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A tiny 3-feature model: "love" pushes Appreciative, "hate" pushes
    /// Angry, intercepts slightly favor Informative when nothing matches.
    fn test_classifier() -> ToneClassifier {
        let vocabulary: HashMap<String, usize> = [
            ("love".to_string(), 0),
            ("hate".to_string(), 1),
            ("ok".to_string(), 2),
        ]
        .into_iter()
        .collect();

        let mut coefficients = vec![vec![0.0; 3]; ToneLabel::COUNT];
        coefficients[1][0] = 2.0; // Appreciative <- "love"
        coefficients[18][1] = 2.0; // Angry <- "hate"

        let mut intercepts = vec![0.0; ToneLabel::COUNT];
        intercepts[5] = 0.5; // Informative wins on empty evidence

        ToneClassifier::from_artifacts(
            VectorizerArtifact {
                vocabulary,
                lowercase: true,
            },
            ClassifierArtifact {
                coefficients,
                intercepts,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_classify_picks_highest_scoring_label() {
        let classifier = test_classifier();
        assert_eq!(classifier.classify("I love this!"), ToneLabel::Appreciative);
        assert_eq!(classifier.classify("I hate mondays"), ToneLabel::Angry);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let classifier = test_classifier();
        let first = classifier.classify("love hate love ok");
        for _ in 0..20 {
            assert_eq!(classifier.classify("love hate love ok"), first);
        }
    }

    #[test]
    fn test_out_of_vocabulary_falls_back_to_intercepts() {
        let classifier = test_classifier();
        assert_eq!(
            classifier.classify("zzz completely unseen words"),
            ToneLabel::Informative
        );
    }

    #[test]
    fn test_lowercase_applied_before_lookup() {
        let classifier = test_classifier();
        assert_eq!(classifier.classify("LOVE IT"), ToneLabel::Appreciative);
    }

    #[test]
    fn test_single_character_tokens_ignored() {
        let classifier = test_classifier();
        // "I" never reaches the vocabulary; only intercepts score.
        assert_eq!(classifier.classify("I I I"), ToneLabel::Informative);
    }

    #[test]
    fn test_tie_resolves_to_lowest_index() {
        let vocabulary: HashMap<String, usize> = [("word".to_string(), 0)].into_iter().collect();
        let coefficients = vec![vec![0.0; 1]; ToneLabel::COUNT];
        let intercepts = vec![0.0; ToneLabel::COUNT];

        let classifier = ToneClassifier::from_artifacts(
            VectorizerArtifact {
                vocabulary,
                lowercase: true,
            },
            ClassifierArtifact {
                coefficients,
                intercepts,
            },
        )
        .unwrap();

        // every label scores 0.0; index 0 must win
        assert_eq!(classifier.classify("word"), ToneLabel::AppreciativePeriod);
    }

    #[test]
    fn test_rejects_wrong_label_cardinality() {
        let result = ToneClassifier::from_artifacts(
            VectorizerArtifact {
                vocabulary: HashMap::new(),
                lowercase: true,
            },
            ClassifierArtifact {
                coefficients: vec![vec![0.0]; 7],
                intercepts: vec![0.0; 7],
            },
        );
        assert!(matches!(
            result,
            Err(ClassifierError::LabelCardinality {
                expected: ToneLabel::COUNT,
                actual: 7
            })
        ));
    }

    #[test]
    fn test_rejects_ragged_coefficients() {
        let vocabulary: HashMap<String, usize> = [("word".to_string(), 0)].into_iter().collect();
        let mut coefficients = vec![vec![0.0; 1]; ToneLabel::COUNT];
        coefficients[3] = vec![0.0, 0.0];

        let result = ToneClassifier::from_artifacts(
            VectorizerArtifact {
                vocabulary,
                lowercase: true,
            },
            ClassifierArtifact {
                coefficients,
                intercepts: vec![0.0; ToneLabel::COUNT],
            },
        );
        assert!(matches!(
            result,
            Err(ClassifierError::RaggedCoefficients { row: 3, .. })
        ));
    }

    #[test]
    fn test_rejects_vocabulary_wider_than_model() {
        let vocabulary: HashMap<String, usize> = [
            ("one".to_string(), 0),
            ("two".to_string(), 1),
        ]
        .into_iter()
        .collect();

        let result = ToneClassifier::from_artifacts(
            VectorizerArtifact {
                vocabulary,
                lowercase: true,
            },
            ClassifierArtifact {
                coefficients: vec![vec![0.0; 1]; ToneLabel::COUNT],
                intercepts: vec![0.0; ToneLabel::COUNT],
            },
        );
        assert!(matches!(
            result,
            Err(ClassifierError::FeatureWidthMismatch {
                vocabulary: 2,
                width: 1
            })
        ));
    }

    #[test]
    fn test_rejects_out_of_range_vocabulary_column() {
        let vocabulary: HashMap<String, usize> = [
            ("one".to_string(), 0),
            ("two".to_string(), 5),
        ]
        .into_iter()
        .collect();

        let result = ToneClassifier::from_artifacts(
            VectorizerArtifact {
                vocabulary,
                lowercase: true,
            },
            ClassifierArtifact {
                coefficients: vec![vec![0.0; 2]; ToneLabel::COUNT],
                intercepts: vec![0.0; ToneLabel::COUNT],
            },
        );
        assert!(matches!(
            result,
            Err(ClassifierError::VocabularyOutOfRange { column: 5, .. })
        ));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let vectorizer_path = dir.path().join("count_vectorizer.json");
        let classifier_path = dir.path().join("logistic_model.json");

        std::fs::write(
            &vectorizer_path,
            r#"{"vocabulary": {"love": 0}, "lowercase": true}"#,
        )
        .unwrap();

        let mut coefficients = vec![vec![0.0_f32; 1]; ToneLabel::COUNT];
        coefficients[1][0] = 1.0;
        let artifact = serde_json::json!({
            "coefficients": coefficients,
            "intercepts": vec![0.0_f32; ToneLabel::COUNT],
        });
        std::fs::write(&classifier_path, artifact.to_string()).unwrap();

        let classifier = ToneClassifier::load(&vectorizer_path, &classifier_path).unwrap();
        assert_eq!(classifier.feature_count(), 1);
        assert_eq!(classifier.classify("love love"), ToneLabel::Appreciative);
    }
}
