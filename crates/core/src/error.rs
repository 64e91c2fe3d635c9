//! Error types for the LessonLens domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use thiserror::Error;

/// The top-level error type for all LessonLens operations.
#[derive(Debug, Error)]
pub enum Error {
    /// No manifest exists for the requested lesson. Surfaced immediately,
    /// no further processing happens.
    #[error("Lesson not found: {lesson_id}")]
    LessonNotFound { lesson_id: String },

    // --- Knowledge base errors ---
    #[error("Knowledge error: {0}")]
    Knowledge(#[from] KnowledgeError),

    // --- Media errors ---
    #[error("Media error: {0}")]
    Media(#[from] MediaError),

    // --- Generation errors ---
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("No manifest found for lesson '{0}'")]
    NotFound(String),

    #[error("Failed to read manifest at {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("Failed to parse manifest at {path}: {reason}")]
    Parse { path: String, reason: String },
}

/// Media resolution failures. Every variant is recovered locally — a failed
/// media lookup degrades the answer to text-only, it never fails the request.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Media file not found: {0}")]
    NotFound(String),

    #[error("Unsupported media extension: {0}")]
    UnsupportedExtension(String),

    #[error("Failed to probe video {path}: {reason}")]
    ProbeFailed { path: String, reason: String },

    #[error("Failed to extract frame from {path}: {reason}")]
    ExtractionFailed { path: String, reason: String },

    #[error("Failed to read media file {path}: {reason}")]
    Read { path: String, reason: String },
}

#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Rate limited by model API, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid model response: {0}")]
    InvalidResponse(String),

    #[error("Generator not configured: {0}")]
    NotConfigured(String),
}
