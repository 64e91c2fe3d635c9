//! Generative model backends for LessonLens.
//!
//! Currently a single backend: Google's Gemini `generateContent` API, which
//! accepts interleaved text and inline image parts — a natural fit for the
//! prompt bundle's ordering contract.

pub mod gemini;

use std::sync::Arc;

use lessonlens_config::AppConfig;
use lessonlens_core::{GenerationError, Generator};

pub use gemini::GeminiProvider;

/// Build the configured generator.
///
/// Fails with `NotConfigured` when no API key is available — callers should
/// surface this at startup rather than on the first request.
pub fn build_from_config(config: &AppConfig) -> Result<Arc<dyn Generator>, GenerationError> {
    let api_key = config.api_key.clone().ok_or_else(|| {
        GenerationError::NotConfigured(
            "No API key configured — set api_key in config.toml or the GOOGLE_API_KEY environment variable".into(),
        )
    })?;

    Ok(Arc::new(GeminiProvider::new(api_key, &config.model)))
}
