//! Main orchestrator that coordinates a single conversational turn.

use std::env;
use std::sync::Arc;

use gemini_brain::GeminiBrain;
use serde::Serialize;
use tone_classifier::ToneClassifier;
use tone_core::{tone_prompt, ApiError, Generator};
use tracing::{debug, warn};

use crate::error::OrchestratorError;

/// Canned reply for empty or whitespace-only input.
pub const EMPTY_INPUT_REPLY: &str = "I didn't catch that. Could you please repeat?";

/// Tone reported alongside the canned empty-input reply.
pub const EMPTY_INPUT_TONE: &str = "Informative";

/// Reply when the service answered but the payload carried no generated text.
pub const UNPARSABLE_REPLY: &str = "Sorry, I couldn't process that request properly.";

/// Default artifact paths, relative to the working directory.
const DEFAULT_VECTORIZER_PATH: &str = "count_vectorizer.json";
const DEFAULT_CLASSIFIER_PATH: &str = "logistic_model.json";

/// The reply for one conversational turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatReply {
    pub response: String,
    pub tone: String,
}

/// Coordinates one turn: classify the tone, ask the generator to answer in
/// it, and map every outcome to a well-formed [`ChatReply`].
///
/// The classifier is shared and immutable; the orchestrator holds no other
/// state, so concurrent calls to [`process`](ConversationOrchestrator::process)
/// are independent.
pub struct ConversationOrchestrator<G: Generator> {
    classifier: Arc<ToneClassifier>,
    generator: G,
}

impl<G: Generator> ConversationOrchestrator<G> {
    /// Create a new orchestrator with the given components.
    pub fn new(classifier: Arc<ToneClassifier>, generator: G) -> Self {
        Self {
            classifier,
            generator,
        }
    }

    /// Process one utterance.
    ///
    /// Never fails at this boundary: empty input short-circuits to a canned
    /// reply, and every generation failure is translated into a degraded
    /// but well-formed reply with the already-computed tone preserved.
    pub async fn process(&self, user_text: &str) -> ChatReply {
        if user_text.trim().is_empty() {
            debug!("empty input, skipping classification and generation");
            return ChatReply {
                response: EMPTY_INPUT_REPLY.to_string(),
                tone: EMPTY_INPUT_TONE.to_string(),
            };
        }

        // Tone is bound before any network call so degraded replies keep it.
        let tone = self.classifier.classify(user_text);
        debug!(tone = tone.as_str(), "classified utterance");

        let prompt = tone_prompt(tone, user_text);
        let response = match self.generator.generate(&prompt).await {
            Ok(text) => text,
            Err(err @ ApiError::Parse(_)) => {
                warn!(
                    generator = self.generator.name(),
                    error = %err,
                    "generation payload unusable"
                );
                UNPARSABLE_REPLY.to_string()
            }
            Err(err) => {
                warn!(
                    generator = self.generator.name(),
                    error = %err,
                    "generation failed"
                );
                format!("Sorry, I encountered an error: {err}")
            }
        };

        ChatReply {
            response,
            tone: tone.as_str().to_string(),
        }
    }
}

impl ConversationOrchestrator<GeminiBrain> {
    /// Create an orchestrator from environment variables.
    ///
    /// Reads `TONE_VECTORIZER_PATH` and `TONE_CLASSIFIER_PATH` (defaulting
    /// to the exported artifact names in the working directory) plus the
    /// `GEMINI_*` variables consumed by [`GeminiBrain::from_env`].
    pub fn from_env() -> Result<Self, OrchestratorError> {
        let vectorizer_path =
            env::var("TONE_VECTORIZER_PATH").unwrap_or_else(|_| DEFAULT_VECTORIZER_PATH.to_string());
        let classifier_path =
            env::var("TONE_CLASSIFIER_PATH").unwrap_or_else(|_| DEFAULT_CLASSIFIER_PATH.to_string());

        let classifier = ToneClassifier::load(&vectorizer_path, &classifier_path)?;
        let generator = GeminiBrain::from_env()?;

        Ok(Self::new(Arc::new(classifier), generator))
    }
}
