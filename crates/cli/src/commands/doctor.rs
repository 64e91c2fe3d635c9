//! `lessonlens doctor` — Diagnose system health.

use lessonlens_config::AppConfig;
use tokio::process::Command;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("🩺 LessonLens Doctor — System Diagnostics");
    println!("=========================================\n");

    let mut issues = 0;

    // Check config
    let config_path = AppConfig::config_dir().join("config.toml");
    let config = match AppConfig::load() {
        Ok(config) => {
            if config_path.exists() {
                println!("  ✅ Config file valid");
            } else {
                println!("  ℹ️  No config file at {} — using defaults", config_path.display());
            }

            // Check API key
            if config.has_api_key() {
                println!("  ✅ API key configured");
            } else {
                println!("  ⚠️  No API key configured — set api_key in config.toml or GOOGLE_API_KEY");
                issues += 1;
            }
            Some(config)
        }
        Err(e) => {
            println!("  ❌ Config file invalid: {e}");
            issues += 1;
            None
        }
    };

    // Check content directory
    if let Some(config) = &config {
        if config.content_dir.is_dir() {
            match lessonlens_knowledge::list_lessons(&config.content_dir).await {
                Ok(lessons) if lessons.is_empty() => {
                    println!(
                        "  ⚠️  Content directory {} contains no lessons",
                        config.content_dir.display()
                    );
                    issues += 1;
                }
                Ok(lessons) => {
                    println!("  ✅ Content directory holds {} lesson(s)", lessons.len());
                }
                Err(e) => {
                    println!("  ❌ Failed to scan content directory: {e}");
                    issues += 1;
                }
            }
        } else {
            println!(
                "  ❌ Content directory {} does not exist",
                config.content_dir.display()
            );
            issues += 1;
        }
    }

    // Check video tooling — only needed for lessons that reference videos
    for tool in ["ffprobe", "ffmpeg"] {
        match Command::new(tool).arg("-version").output().await {
            Ok(output) if output.status.success() => {
                println!("  ✅ {tool} available");
            }
            _ => {
                println!("  ⚠️  {tool} not found — video frame extraction will be unavailable");
                issues += 1;
            }
        }
    }

    // Summary
    println!();
    if issues == 0 {
        println!("  🎉 All checks passed!");
    } else {
        println!("  ⚠️  {issues} issue(s) found. See above for details.");
    }

    Ok(())
}
