//! Lesson manifest loading for LessonLens.
//!
//! Each lesson is a directory under the content root containing a
//! `manifest.json` (title, summary, modules) plus its media files. The
//! manifest is read fresh per request; lessons are small and static, so
//! there is no cross-request cache.

use std::path::{Path, PathBuf};

use lessonlens_core::{KnowledgeBase, KnowledgeError, LessonSummary};
use tracing::{debug, warn};

const MANIFEST_FILE: &str = "manifest.json";

/// The directory a lesson's manifest and media live in.
pub fn lesson_dir(content_dir: &Path, lesson_id: &str) -> PathBuf {
    content_dir.join(lesson_id)
}

/// Load a lesson's knowledge base from its manifest.
///
/// A missing manifest is `KnowledgeError::NotFound`, which the engine maps
/// to the lesson-not-found response. Read and parse failures are distinct
/// variants.
pub async fn load(content_dir: &Path, lesson_id: &str) -> Result<KnowledgeBase, KnowledgeError> {
    let manifest_path = lesson_dir(content_dir, lesson_id).join(MANIFEST_FILE);

    if !manifest_path.exists() {
        return Err(KnowledgeError::NotFound(lesson_id.to_string()));
    }

    let content = tokio::fs::read_to_string(&manifest_path)
        .await
        .map_err(|e| KnowledgeError::Read {
            path: manifest_path.display().to_string(),
            reason: e.to_string(),
        })?;

    let kb: KnowledgeBase =
        serde_json::from_str(&content).map_err(|e| KnowledgeError::Parse {
            path: manifest_path.display().to_string(),
            reason: e.to_string(),
        })?;

    debug!(
        lesson_id,
        modules = kb.modules.len(),
        "Knowledge base loaded"
    );

    Ok(kb)
}

/// List all lessons under the content root.
///
/// A lesson is any child directory with a readable manifest. Directories
/// with a broken manifest are skipped with a warning rather than failing
/// the whole listing.
pub async fn list_lessons(content_dir: &Path) -> Result<Vec<LessonSummary>, KnowledgeError> {
    let mut entries =
        tokio::fs::read_dir(content_dir)
            .await
            .map_err(|e| KnowledgeError::Read {
                path: content_dir.display().to_string(),
                reason: e.to_string(),
            })?;

    let mut lessons = Vec::new();

    while let Some(entry) = entries.next_entry().await.map_err(|e| KnowledgeError::Read {
        path: content_dir.display().to_string(),
        reason: e.to_string(),
    })? {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let Some(id) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        match load(content_dir, id).await {
            Ok(kb) => lessons.push(LessonSummary {
                id: id.to_string(),
                title: kb.title,
            }),
            Err(KnowledgeError::NotFound(_)) => {} // not a lesson directory
            Err(e) => warn!(lesson_id = id, error = %e, "Skipping lesson with broken manifest"),
        }
    }

    lessons.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(lessons)
}
