//! Context assembly — build the text context and pick at most one media
//! item, branching on the classifier/scorer outcome.
//!
//! Three mutually exclusive branches:
//! - general: lesson summary plus every module's topic line, no media
//! - specific with a match: the matched module's text, plus its media
//! - specific without a match: best-effort fallback over all lesson text,
//!   no media

use std::path::Path;

use lessonlens_core::{ImagePayload, KnowledgeBase, MediaDescriptor, Module};
use tracing::debug;

use crate::classifier::QueryClass;

/// Fixed preamble for the best-effort fallback context.
pub const FALLBACK_PREAMBLE: &str =
    "No single module matched the query. Here is all available text for the lesson:\n";

const TOPIC_LIST_HEADER: &str = "\n\nThis lesson includes the following topics:\n";

/// The assembled context for one request.
#[derive(Debug, Clone)]
pub struct AssembledContext {
    /// Text handed to the prompt builder.
    pub context_text: String,
    /// Descriptor returned to the client for display, if media was resolved.
    pub media: Option<MediaDescriptor>,
    /// Decoded still image for the prompt, if one could be produced.
    pub payload: Option<ImagePayload>,
}

impl AssembledContext {
    fn text_only(context_text: String) -> Self {
        Self {
            context_text,
            media: None,
            payload: None,
        }
    }
}

/// Assemble the context for a classified query.
///
/// `best_match` is the scorer's outcome and is only meaningful for specific
/// queries; the general branch ignores it.
pub async fn assemble(
    query_class: QueryClass,
    kb: &KnowledgeBase,
    best_match: Option<&Module>,
    lesson_dir: &Path,
) -> AssembledContext {
    match (query_class, best_match) {
        (QueryClass::General, _) => {
            let mut text = kb.summary.clone();
            text.push_str(TOPIC_LIST_HEADER);
            text.push_str(&topic_lines(kb));
            AssembledContext::text_only(text)
        }
        (QueryClass::Specific, Some(module)) => {
            let resolved = lessonlens_media::resolve(lesson_dir, module).await;
            debug!(
                topic = %module.topic,
                has_media = resolved.is_some(),
                "Assembled context from matched module"
            );

            match resolved {
                Some(resolved) => AssembledContext {
                    context_text: module.text_content.clone(),
                    media: Some(resolved.descriptor),
                    payload: resolved.payload,
                },
                None => AssembledContext::text_only(module.text_content.clone()),
            }
        }
        (QueryClass::Specific, None) => {
            let mut text = String::from(FALLBACK_PREAMBLE);
            text.push_str(&kb.summary);
            text.push('\n');
            text.push_str(&topic_lines(kb));
            AssembledContext::text_only(text)
        }
    }
}

/// One `- {topic}: {text_content}` line per module, in lesson order.
fn topic_lines(kb: &KnowledgeBase) -> String {
    let mut lines = String::new();
    for module in &kb.modules {
        lines.push_str(&format!("- {}: {}\n", module.topic, module.text_content));
    }
    lines
}
