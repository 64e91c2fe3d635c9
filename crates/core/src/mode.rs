//! Accessibility mode for answer generation.
//!
//! The mode selects the persona given to the generative model. It arrives as
//! an optional string on the request; anything missing or unrecognized falls
//! back to [`QueryMode::Standard`] — a closed enum rather than stringly-typed
//! comparison.

use serde::{Deserialize, Serialize};

/// How the answer should be framed for the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryMode {
    /// Expert tutor synthesizing text and media.
    #[default]
    Standard,
    /// Acts as eyes for a visually impaired user: describes media first.
    VisualAssist,
    /// Short sentences, simple words, no jargon.
    Simplified,
}

impl QueryMode {
    /// Parse a mode from an optional request parameter.
    ///
    /// Missing and unrecognized values both map to `Standard`.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("visual_assist") => Self::VisualAssist,
            Some("simplified") => Self::Simplified,
            _ => Self::Standard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::VisualAssist => "visual_assist",
            Self::Simplified => "simplified",
        }
    }
}

impl std::fmt::Display for QueryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
