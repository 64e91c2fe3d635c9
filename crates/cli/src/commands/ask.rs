//! `lessonlens ask` — Ask a question about a lesson from the terminal.

use lessonlens_config::AppConfig;
use lessonlens_core::QueryMode;
use lessonlens_engine::AnswerEngine;

pub async fn run(
    lesson: &str,
    question: &str,
    mode: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    let generator = lessonlens_providers::build_from_config(&config)?;
    let engine = AnswerEngine::new(generator, &config.content_dir);

    let mode = QueryMode::from_param(mode);
    let answer = engine.answer(question, lesson, mode).await?;

    println!("{}", answer.answer);

    if let Some(media) = answer.media {
        println!();
        println!("📎 Related media: {}/{}", lesson, media.path);
    }

    Ok(())
}
