//! Prompt building — persona, task rules, context, and question as an
//! ordered bundle of text parts.
//!
//! The persona is a pure function of the query mode. Media insertion is a
//! separate caller step (`PromptBundle::insert_media`), which places the
//! single payload immediately after the persona/instructions part.

use lessonlens_core::{PromptBundle, QueryMode};

/// Grounding rules appended after the persona. Rules 3 and 4 carry exact
/// fallback phrases clients rely on.
const TASK_INSTRUCTIONS: &str = "\n--- TASK ---\n\
Here is the context and the user's question. Follow these rules:\n\
1. Base your answer *strictly* on the provided context text and media.\n\
2. If the user's question IS ANSWERED by the context, answer it directly and thoroughly.\n\
3. **If the user's question is NOT DIRECTLY ANSWERED** by the context, do NOT invent an answer. Instead, you MUST say 'That's not covered in this part of the lesson, but here is some related information:' and then provide the most relevant information from the context.\n\
4. If the provided context is empty or irrelevant, just say 'I'm sorry, I don't have any information on that topic for this lesson.'";

/// The mode-dependent behavioral framing given to the model.
fn persona(mode: QueryMode, lesson_title: &str) -> String {
    match mode {
        QueryMode::VisualAssist => format!(
            "You are a 'Visual Assist' tutor for the lesson '{lesson_title}'. \
             You are speaking to a visually impaired user. Your primary goal is to be their eyes. \
             If media (an image or video frame) is provided, you MUST describe it in rich, vivid detail FIRST, painting a mental picture. \
             After describing the media, answer the user's question based on the media and the text context."
        ),
        QueryMode::Simplified => format!(
            "You are a 'Simplified Text' tutor for the lesson '{lesson_title}'. \
             You are speaking to a user who benefits from simple language (e.g., for Dyslexia). \
             You MUST explain concepts clearly, using short sentences and simple words. Avoid jargon. \
             Answer the user's question using only the provided context."
        ),
        QueryMode::Standard => format!(
            "You are an expert tutor for the lesson '{lesson_title}'. \
             Your answer MUST synthesize information from BOTH the text context and the media (if provided). \
             When you use information from the media, explicitly refer to it \
             (e.g., 'As you can see in the video...' or 'The diagram shows...')."
        ),
    }
}

/// Build the text parts of a prompt: persona+instructions, context block,
/// question block — in that order.
pub fn build(
    mode: QueryMode,
    lesson_title: &str,
    context_text: &str,
    query: &str,
) -> PromptBundle {
    let mut bundle = PromptBundle::new();

    bundle.push_text(format!("{}{TASK_INSTRUCTIONS}", persona(mode, lesson_title)));
    bundle.push_text(format!(
        "\n--- CONTEXT TEXT ---\n{context_text}\n--- END CONTEXT ---"
    ));
    bundle.push_text(format!("\n--- USER'S QUESTION ---\n{query}"));

    bundle
}

#[cfg(test)]
mod tests {
    use super::*;
    use lessonlens_core::{ImagePayload, PromptPart};

    fn part_text(bundle: &PromptBundle, index: usize) -> &str {
        match &bundle.parts()[index] {
            PromptPart::Text(text) => text,
            PromptPart::Media(_) => panic!("expected text at index {index}"),
        }
    }

    #[test]
    fn three_text_parts_in_order() {
        let bundle = build(QueryMode::Standard, "Water Cycle", "ctx", "why rain?");
        assert_eq!(bundle.len(), 3);
        assert!(part_text(&bundle, 0).starts_with("You are an expert tutor"));
        assert!(part_text(&bundle, 1).contains("--- CONTEXT TEXT ---"));
        assert!(part_text(&bundle, 1).contains("ctx"));
        assert!(part_text(&bundle, 2).contains("--- USER'S QUESTION ---"));
        assert!(part_text(&bundle, 2).contains("why rain?"));
    }

    #[test]
    fn persona_varies_by_mode() {
        let visual = build(QueryMode::VisualAssist, "L", "c", "q");
        assert!(part_text(&visual, 0).contains("Visual Assist"));
        assert!(part_text(&visual, 0).contains("vivid detail FIRST"));

        let simple = build(QueryMode::Simplified, "L", "c", "q");
        assert!(part_text(&simple, 0).contains("Simplified Text"));
        assert!(part_text(&simple, 0).contains("short sentences"));

        let standard = build(QueryMode::Standard, "L", "c", "q");
        assert!(part_text(&standard, 0).contains("expert tutor"));
    }

    #[test]
    fn persona_includes_lesson_title() {
        let bundle = build(QueryMode::Standard, "Photosynthesis", "c", "q");
        assert!(part_text(&bundle, 0).contains("'Photosynthesis'"));
    }

    #[test]
    fn instructions_carry_exact_fallback_phrases() {
        let bundle = build(QueryMode::Standard, "L", "c", "q");
        let head = part_text(&bundle, 0);
        assert!(head.contains(
            "That's not covered in this part of the lesson, but here is some related information:"
        ));
        assert!(head.contains(
            "I'm sorry, I don't have any information on that topic for this lesson."
        ));
    }

    #[test]
    fn media_insertion_lands_between_instructions_and_context() {
        let mut bundle = build(QueryMode::Standard, "L", "c", "q");
        bundle.insert_media(ImagePayload::new("image/png", vec![1]));

        assert_eq!(bundle.len(), 4);
        assert!(matches!(bundle.parts()[1], PromptPart::Media(_)));
        assert!(part_text(&bundle, 2).contains("--- CONTEXT TEXT ---"));
    }
}
