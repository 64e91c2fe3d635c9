//! LessonLens CLI — the main entry point.
//!
//! Commands:
//! - `serve`    — Start the HTTP API server
//! - `lessons`  — List available lessons
//! - `ask`      — Ask a question about a lesson from the terminal
//! - `doctor`   — Diagnose system health

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "lessonlens",
    about = "LessonLens — lesson Q&A engine with multimodal context",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List available lessons
    Lessons,

    /// Ask a question about a lesson
    Ask {
        /// Lesson id (directory name under the content root)
        lesson: String,

        /// The question to ask
        question: String,

        /// Accessibility mode: standard, visual_assist, or simplified
        #[arg(short, long)]
        mode: Option<String>,
    },

    /// Diagnose system health
    Doctor,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Serve { port } => commands::serve::run(port).await?,
        Commands::Lessons => commands::lessons::run().await?,
        Commands::Ask {
            lesson,
            question,
            mode,
        } => commands::ask::run(&lesson, &question, mode.as_deref()).await?,
        Commands::Doctor => commands::doctor::run().await?,
    }

    Ok(())
}
