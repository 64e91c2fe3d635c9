//! Media value objects.
//!
//! A [`MediaDescriptor`] is what the API returns to clients for display; an
//! [`ImagePayload`] is the decoded still image handed to the generative
//! model. For videos the payload is one representative frame, never the full
//! clip.

use serde::{Deserialize, Serialize};

/// Media classification by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// A reference to a lesson media file, returned to clients for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaDescriptor {
    /// Filename relative to the lesson directory (served under `/content`).
    pub path: String,

    /// Media kind, when the extension is recognized. Unrecognized extensions
    /// still produce a descriptor for display, with no kind.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<MediaKind>,
}

impl MediaDescriptor {
    pub fn new(path: impl Into<String>, kind: Option<MediaKind>) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

/// An in-memory still image attached to a prompt.
#[derive(Clone, PartialEq, Eq)]
pub struct ImagePayload {
    /// MIME type, e.g. `image/png`.
    pub mime_type: String,
    /// Raw encoded image bytes.
    pub data: Vec<u8>,
}

impl ImagePayload {
    pub fn new(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data,
        }
    }
}

// Keep raw bytes out of Debug output.
impl std::fmt::Debug for ImagePayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePayload")
            .field("mime_type", &self.mime_type)
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// The outcome of resolving a module's media reference.
///
/// The descriptor is always present when resolution succeeds; the payload is
/// absent when the file exists but no still image could be produced (unknown
/// extension, frame extraction failure).
#[derive(Debug, Clone)]
pub struct ResolvedMedia {
    pub descriptor: MediaDescriptor,
    pub payload: Option<ImagePayload>,
}
