//! GeminiBrain: a [`tone_core::Generator`] backed by the Gemini
//! `generateContent` API.
//!
//! One outbound POST per invocation, bounded by a configurable timeout,
//! with every failure mode mapped to a typed [`tone_core::ApiError`]. No
//! retries are performed; a single attempt per call.

mod api_types;
mod brain;
mod config;

pub use api_types::{Candidate, Content, GenerateContentRequest, GenerateContentResponse, Part};
pub use brain::GeminiBrain;
pub use config::{GeminiConfig, GeminiConfigBuilder, DEFAULT_TIMEOUT_SECS};
