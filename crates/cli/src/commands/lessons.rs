//! `lessonlens lessons` — List available lessons.

use lessonlens_config::AppConfig;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    let lessons = lessonlens_knowledge::list_lessons(&config.content_dir).await?;

    if lessons.is_empty() {
        println!(
            "No lessons found under {} — each lesson is a directory with a manifest.json",
            config.content_dir.display()
        );
        return Ok(());
    }

    println!("📚 Lessons ({})", config.content_dir.display());
    for lesson in lessons {
        println!("  {} — {}", lesson.id, lesson.title);
    }

    Ok(())
}
