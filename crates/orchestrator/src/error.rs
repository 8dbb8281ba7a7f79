//! Error types for orchestrator startup.

use thiserror::Error;
use tone_classifier::ClassifierError;
use tone_core::ConfigError;

/// Errors that can occur while constructing the orchestrator.
///
/// Request processing itself is total; only startup can fail, and a
/// failure here means the deployment is defective (missing artifacts or
/// credentials), so the service should not come up.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// The pre-trained artifacts were missing or corrupt.
    #[error("classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    /// The generation client could not be configured.
    #[error("generator error: {0}")]
    Generator(#[from] ConfigError),
}
