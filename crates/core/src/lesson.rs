//! Lesson knowledge base domain types.
//!
//! A lesson lives in its own directory under the content root and is
//! described by a `manifest.json`: a title, a lesson-wide summary, and an
//! ordered list of modules. The knowledge base is loaded fresh per request
//! and owned by the request scope — no caching across requests.

use serde::{Deserialize, Serialize};

/// A lesson's structured knowledge base, as loaded from its manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBase {
    /// Lesson title, shown to the model in the persona.
    #[serde(default = "untitled")]
    pub title: String,

    /// Lesson-wide summary used for general/overview questions.
    #[serde(default)]
    pub summary: String,

    /// Ordered topical units. Order is preserved from the manifest and used
    /// by the relevance scorer: the earliest max-scoring module wins ties.
    #[serde(default)]
    pub modules: Vec<Module>,
}

fn untitled() -> String {
    "Untitled Lesson".into()
}

/// A single topical unit of a lesson.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    /// Short topic label (weighted 2x by the relevance scorer).
    #[serde(default)]
    pub topic: String,

    /// Free-text explanatory content.
    #[serde(default)]
    pub text_content: String,

    /// Media filenames relative to the lesson directory. May be empty.
    #[serde(default)]
    pub related_media: Vec<String>,
}

impl Module {
    /// The single media file considered for this module.
    ///
    /// Only the first entry counts — one media item per answer, any further
    /// entries are ignored.
    pub fn primary_media(&self) -> Option<&str> {
        self.related_media.first().map(String::as_str)
    }
}

/// A lesson's id and title, for the lesson listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonSummary {
    /// Directory name under the content root.
    pub id: String,
    /// Title from the manifest, or "Untitled Lesson".
    pub title: String,
}
