//! Single-turn conversation orchestration.
//!
//! Composes the tone classifier and a [`tone_core::Generator`] into one
//! total operation: text in, tone-annotated reply out. Every failure below
//! this boundary is mapped to a stable reply shape; nothing escapes raw.

mod error;
mod orchestrator;

pub use error::OrchestratorError;
pub use orchestrator::{
    ChatReply, ConversationOrchestrator, EMPTY_INPUT_REPLY, EMPTY_INPUT_TONE, UNPARSABLE_REPLY,
};
