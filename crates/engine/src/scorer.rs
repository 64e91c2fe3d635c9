//! Relevance scoring — pick the lesson module that best matches a query.
//!
//! Set-based word overlap: case-insensitive, whitespace-delimited,
//! duplicates collapse. Topic overlap counts double. The running maximum
//! starts at 0 with strict-greater replacement, so a module must score at
//! least 1 to match and the earliest max-scoring module wins ties.

use std::collections::HashSet;

use lessonlens_core::Module;

/// Tokenize text into a lower-cased word set.
fn word_set(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Score one module against a pre-tokenized query.
///
/// `score = 2 * |query ∩ topic| + |query ∩ content|`
fn score_module(query_words: &HashSet<String>, module: &Module) -> usize {
    let topic_words = word_set(&module.topic);
    let content_words = word_set(&module.text_content);

    2 * query_words.intersection(&topic_words).count()
        + query_words.intersection(&content_words).count()
}

/// Select the best-matching module, or `None` when nothing overlaps.
///
/// `None` is the trigger for the best-effort fallback context: with no
/// confident match there is no principled way to pick a module or its media.
pub fn select_module<'a>(query: &str, modules: &'a [Module]) -> Option<&'a Module> {
    let query_words = word_set(query);

    let mut best_match = None;
    let mut max_score = 0;

    for module in modules {
        let score = score_module(&query_words, module);
        if score > max_score {
            max_score = score;
            best_match = Some(module);
        }
    }

    best_match
}
