//! # LessonLens Core
//!
//! Domain types, traits, and error definitions for the LessonLens lesson
//! tutor backend. This crate has **zero framework dependencies** — it defines
//! the domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! The generative model is abstracted behind the [`Generator`] trait here.
//! Implementations live in their respective crates. This enables:
//! - Swapping model backends via configuration
//! - Easy testing with mock/stub implementations
//! - Clean dependency graph (all crates depend inward on core)

pub mod error;
pub mod generator;
pub mod lesson;
pub mod media;
pub mod mode;
pub mod prompt;

// Re-export key types at crate root for ergonomics
pub use error::{Error, GenerationError, KnowledgeError, MediaError, Result};
pub use generator::Generator;
pub use lesson::{KnowledgeBase, LessonSummary, Module};
pub use media::{ImagePayload, MediaDescriptor, MediaKind, ResolvedMedia};
pub use mode::QueryMode;
pub use prompt::{PromptBundle, PromptPart};
