//! Error types shared across the service crates.

use thiserror::Error;

/// Errors from a single outbound generation call.
///
/// Every variant is recoverable per request: the orchestrator maps each of
/// them to a fixed user-facing message instead of propagating it raw.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed: connect failure, transport failure,
    /// or the per-request timeout elapsed.
    #[error("request failed: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("API error ({status}): {body}")]
    Http { status: u16, body: String },

    /// The service answered 2xx but the payload did not carry the expected
    /// shape.
    #[error("unexpected response shape: {0}")]
    Parse(String),
}

/// A component could not be configured or constructed.
#[derive(Debug, Error)]
#[error("configuration error: {0}")]
pub struct ConfigError(pub String);
