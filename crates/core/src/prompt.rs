//! The prompt bundle — an ordered sequence of heterogeneous prompt parts.
//!
//! Part ordering is a hard contract with the model API: the
//! persona/instructions text is always first, the single media payload (if
//! any) comes immediately after it, and the remaining text blocks follow.
//! The "at most one media part, at index 1" invariant is enforced here
//! rather than left to callers.

use crate::media::ImagePayload;

/// One element of a prompt: a text block or a still-image payload.
#[derive(Debug, Clone)]
pub enum PromptPart {
    Text(String),
    Media(ImagePayload),
}

/// An ordered instruction sequence for the generative model.
#[derive(Debug, Clone, Default)]
pub struct PromptBundle {
    parts: Vec<PromptPart>,
}

impl PromptBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text block.
    pub fn push_text(&mut self, text: impl Into<String>) {
        self.parts.push(PromptPart::Text(text.into()));
    }

    /// Insert the single media payload immediately after the first part.
    ///
    /// Returns `false` without modifying the bundle when a media part is
    /// already present — a prompt carries at most one media item.
    pub fn insert_media(&mut self, payload: ImagePayload) -> bool {
        if self.has_media() {
            return false;
        }
        let index = self.parts.len().min(1);
        self.parts.insert(index, PromptPart::Media(payload));
        true
    }

    pub fn has_media(&self) -> bool {
        self.parts
            .iter()
            .any(|p| matches!(p, PromptPart::Media(_)))
    }

    /// The media payload, if one was attached.
    pub fn media(&self) -> Option<&ImagePayload> {
        self.parts.iter().find_map(|p| match p {
            PromptPart::Media(payload) => Some(payload),
            PromptPart::Text(_) => None,
        })
    }

    pub fn parts(&self) -> &[PromptPart] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
