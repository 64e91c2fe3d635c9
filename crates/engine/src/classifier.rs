//! Query classification — general/overview requests vs. specific questions.
//!
//! A plain substring test, not tokenized matching: a keyword anywhere in the
//! lower-cased query triggers the general path, even mid-word. This keeps
//! phrases like "give me an overview" and "summarize this" on the summary
//! path without a parser.

/// How a user query should be routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryClass {
    /// Lesson-wide summary/overview request.
    General,
    /// A question about a specific fact, routed through the scorer.
    Specific,
}

const GENERAL_KEYWORDS: &[&str] = &[
    "summary",
    "summarize",
    "lesson about",
    "overview",
    "tell me about this",
    "general idea",
];

/// Classify a query by keyword substring match, case-insensitively.
pub fn classify(query: &str) -> QueryClass {
    let lowered = query.to_lowercase();
    if GENERAL_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        QueryClass::General
    } else {
        QueryClass::Specific
    }
}
