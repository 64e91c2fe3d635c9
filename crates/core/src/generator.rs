//! Generator trait — the abstraction over generative model backends.
//!
//! A Generator accepts an ordered prompt bundle (text blocks plus at most
//! one image payload) and returns generated text. The engine calls
//! `generate()` without knowing which backend is configured.

use async_trait::async_trait;

use crate::error::GenerationError;
use crate::prompt::PromptBundle;

/// The core Generator trait.
///
/// Implemented by the Gemini client in `lessonlens-providers` and by mock
/// generators in tests.
#[async_trait]
pub trait Generator: Send + Sync {
    /// A human-readable name for this backend (e.g., "gemini").
    fn name(&self) -> &str;

    /// Send the prompt bundle and return the generated answer text.
    async fn generate(
        &self,
        bundle: &PromptBundle,
    ) -> std::result::Result<String, GenerationError>;
}

impl std::fmt::Debug for dyn Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator").field("name", &self.name()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoGenerator;

    #[async_trait]
    impl Generator for EchoGenerator {
        fn name(&self) -> &str {
            "echo"
        }

        async fn generate(
            &self,
            bundle: &PromptBundle,
        ) -> std::result::Result<String, GenerationError> {
            Ok(format!("{} parts", bundle.len()))
        }
    }

    #[tokio::test]
    async fn trait_object_dispatch() {
        let generator: Box<dyn Generator> = Box::new(EchoGenerator);
        let mut bundle = PromptBundle::new();
        bundle.push_text("hello");
        assert_eq!(generator.name(), "echo");
        assert_eq!(generator.generate(&bundle).await.unwrap(), "1 parts");
    }
}
