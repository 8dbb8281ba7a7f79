//! The Generator trait definition.

use async_trait::async_trait;

use crate::error::ApiError;

/// A trait for turning a prompt into generated text.
///
/// Implementations range from test doubles to real API clients. The trait
/// is object-safe and can be used with `Box<dyn Generator>`.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Generate a reply for the given prompt.
    ///
    /// One attempt per invocation; retries, if ever wanted, belong to the
    /// caller.
    async fn generate(&self, prompt: &str) -> Result<String, ApiError>;

    /// Get a human-readable name for this generator implementation.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoGenerator;

    #[async_trait]
    impl Generator for EchoGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, ApiError> {
            Ok(prompt.to_string())
        }

        fn name(&self) -> &str {
            "EchoGenerator"
        }
    }

    #[tokio::test]
    async fn test_object_safety() {
        let generator: Box<dyn Generator> = Box::new(EchoGenerator);
        let reply = generator.generate("hello").await.unwrap();
        assert_eq!(reply, "hello");
        assert_eq!(generator.name(), "EchoGenerator");
    }
}
