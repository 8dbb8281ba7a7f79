//! GeminiBrain implementation using the Gemini generateContent API.

use reqwest::Client;
use tone_core::{async_trait, ApiError, ConfigError, Generator};
use tracing::{debug, info, warn};

use crate::api_types::{ApiErrorResponse, GenerateContentRequest, GenerateContentResponse};
use crate::config::GeminiConfig;

/// A generator backed by Google's Gemini `generateContent` API.
///
/// Stateless between calls: one outbound POST per invocation, bounded by
/// the configured timeout, no retries.
pub struct GeminiBrain {
    client: Client,
    config: GeminiConfig,
}

impl GeminiBrain {
    /// Create a new GeminiBrain with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ConfigError(format!("failed to create HTTP client: {e}")))?;

        info!(
            model = %config.model,
            timeout_secs = config.timeout.as_secs(),
            "GeminiBrain initialized"
        );

        Ok(Self { client, config })
    }

    /// Create a GeminiBrain from environment variables.
    ///
    /// See [`GeminiConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(GeminiConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn endpoint_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_url, self.config.model
        )
    }

    /// Make one generateContent request.
    async fn generate_content(&self, prompt: &str) -> Result<GenerateContentResponse, ApiError> {
        let url = self.endpoint_url();
        let request = GenerateContentRequest::from_prompt(prompt);

        debug!(%url, "sending generateContent request");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .header("Content-Type", "application/json")
            .timeout(self.config.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ApiError::Network(format!(
                        "request timed out after {}s",
                        self.config.timeout.as_secs()
                    ))
                } else {
                    ApiError::Network(e.to_string())
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            // Prefer the structured error message when the body carries one
            let body = match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(parsed) => parsed.error.message,
                Err(_) => body,
            };

            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("failed to read response body: {e}")))?;

        serde_json::from_str(&body)
            .map_err(|e| ApiError::Parse(format!("invalid generateContent payload: {e}")))
    }
}

#[async_trait]
impl Generator for GeminiBrain {
    async fn generate(&self, prompt: &str) -> Result<String, ApiError> {
        let completion = self.generate_content(prompt).await?;

        let text = completion.first_text().ok_or_else(|| {
            warn!("generateContent payload missing candidates[0].content.parts[0].text");
            ApiError::Parse("response missing candidates[0].content.parts[0].text".to_string())
        })?;

        debug!(chars = text.len(), "received generated text");

        Ok(text.to_string())
    }

    fn name(&self) -> &str {
        "GeminiBrain"
    }
}
