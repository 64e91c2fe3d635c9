//! Retrieval and context assembly engine for LessonLens.
//!
//! The decision core of the system: given a question and a lesson id it
//! loads the lesson's knowledge base, classifies the query, selects the
//! best-matching module for specific questions, assembles a mode-dependent
//! prompt with at most one media payload, and delegates answer synthesis to
//! the configured [`Generator`].
//!
//! # Flow
//!
//! 1. Load the lesson manifest (missing manifest short-circuits the request)
//! 2. Classify the query: general/overview vs. specific
//! 3. Specific queries run through the relevance scorer
//! 4. Assemble context text + optional media from the outcome
//! 5. Build the prompt bundle, insert the media payload at its fixed slot
//! 6. Call the generator and return the answer with the media descriptor

pub mod assembler;
pub mod classifier;
pub mod prompt_builder;
pub mod scorer;

use std::path::PathBuf;
use std::sync::Arc;

use lessonlens_core::{
    Error, Generator, KnowledgeError, MediaDescriptor, QueryMode, Result,
};
use tracing::{debug, info};

pub use assembler::{AssembledContext, FALLBACK_PREAMBLE};
pub use classifier::QueryClass;

/// The answer returned to the serving layer.
#[derive(Debug, Clone)]
pub struct Answer {
    /// Generated answer text.
    pub answer: String,
    /// Media for the client to display alongside the answer, if any.
    pub media: Option<MediaDescriptor>,
    /// Echo of the lesson this answer was grounded in.
    pub lesson_id: String,
}

/// Answers lesson questions by retrieval, context assembly, and delegation
/// to a generative model.
///
/// Stateless across requests: the knowledge base is loaded fresh each call.
pub struct AnswerEngine {
    generator: Arc<dyn Generator>,
    content_dir: PathBuf,
}

impl AnswerEngine {
    pub fn new(generator: Arc<dyn Generator>, content_dir: impl Into<PathBuf>) -> Self {
        Self {
            generator,
            content_dir: content_dir.into(),
        }
    }

    /// Answer a question about a lesson.
    pub async fn answer(
        &self,
        question: &str,
        lesson_id: &str,
        mode: QueryMode,
    ) -> Result<Answer> {
        let kb = lessonlens_knowledge::load(&self.content_dir, lesson_id)
            .await
            .map_err(|e| match e {
                KnowledgeError::NotFound(_) => Error::LessonNotFound {
                    lesson_id: lesson_id.to_string(),
                },
                other => Error::Knowledge(other),
            })?;

        let lesson_dir = lessonlens_knowledge::lesson_dir(&self.content_dir, lesson_id);

        let query_class = classifier::classify(question);
        let best_match = match query_class {
            QueryClass::Specific => scorer::select_module(question, &kb.modules),
            QueryClass::General => None,
        };

        debug!(
            lesson_id,
            ?query_class,
            matched_topic = best_match.map(|m| m.topic.as_str()),
            "Query routed"
        );

        let assembled = assembler::assemble(query_class, &kb, best_match, &lesson_dir).await;

        let mut bundle = prompt_builder::build(mode, &kb.title, &assembled.context_text, question);
        if let Some(payload) = assembled.payload {
            bundle.insert_media(payload);
        }

        info!(
            lesson_id,
            mode = %mode,
            parts = bundle.len(),
            has_media = bundle.has_media(),
            generator = self.generator.name(),
            "Generating answer"
        );

        let answer = self.generator.generate(&bundle).await?;

        Ok(Answer {
            answer,
            media: assembled.media,
            lesson_id: lesson_id.to_string(),
        })
    }
}
