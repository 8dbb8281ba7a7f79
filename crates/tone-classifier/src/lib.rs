//! Pre-trained tone classification.
//!
//! Wraps the two artifacts exported by the training run - a vectorizer
//! vocabulary and a linear classifier's weights - behind a single
//! [`ToneClassifier`] that maps raw text to a [`tone_core::ToneLabel`].
//!
//! Artifacts are JSON exports of the fitted objects:
//!
//! ```json
//! // vectorizer: token -> feature column
//! { "vocabulary": { "hello": 0, "world": 1 }, "lowercase": true }
//!
//! // classifier: one coefficient row and one intercept per label
//! { "coefficients": [[0.1, -0.2], ...], "intercepts": [0.0, ...] }
//! ```
//!
//! Both files are read once at startup; everything is validated against the
//! label cardinality up front so inference itself cannot fail.

mod artifacts;
mod classifier;
mod error;

pub use artifacts::{ClassifierArtifact, VectorizerArtifact};
pub use classifier::ToneClassifier;
pub use error::ClassifierError;
