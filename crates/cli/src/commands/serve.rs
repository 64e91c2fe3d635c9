//! `lessonlens serve` — Start the HTTP API server.

use lessonlens_config::AppConfig;

pub async fn run(port_override: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    config.validate().map_err(|e| format!("Invalid config: {e}"))?;

    if let Some(port) = port_override {
        config.gateway.port = port;
    }

    println!("📚 LessonLens Gateway");
    println!("   Listening: {}:{}", config.gateway.host, config.gateway.port);
    println!("   Content:   {}", config.content_dir.display());
    println!("   Model:     {}", config.model);

    lessonlens_gateway::start(config).await?;

    Ok(())
}
