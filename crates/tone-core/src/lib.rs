//! Core trait and types for the tone-reply service.
//!
//! This crate provides the shared vocabulary for the service crates:
//!
//! - [`ToneLabel`] - The closed set of tone labels the classifier can emit
//! - [`Generator`] - The trait implemented by generative-text backends
//! - [`ApiError`] / [`ConfigError`] - Error types for outbound calls and setup
//! - [`tone_prompt`] - Builder for the tone-conditioned prompt
//!
//! # Example
//!
//! ```rust
//! use tone_core::{ApiError, Generator, async_trait};
//!
//! struct CannedGenerator;
//!
//! #[async_trait]
//! impl Generator for CannedGenerator {
//!     async fn generate(&self, _prompt: &str) -> Result<String, ApiError> {
//!         Ok("Hello!".to_string())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "CannedGenerator"
//!     }
//! }
//! ```

mod error;
mod label;
mod prompt;
mod trait_def;

pub use error::{ApiError, ConfigError};
pub use label::ToneLabel;
pub use prompt::tone_prompt;
pub use trait_def::Generator;

// Re-export async_trait for convenience
pub use async_trait::async_trait;
