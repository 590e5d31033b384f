use aquapredict::utils::{logger, validation::Validate};
use aquapredict::{AppConfig, AppState, CliConfig};
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_logger(cli.verbose);

    tracing::info!("Starting aquapredict backend");
    let config = AppConfig::from_env(&cli);
    if cli.verbose {
        tracing::debug!("App config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if config.weather.api_key.is_none() {
        tracing::warn!("WEATHER_API_KEY not set; dashboard will run in fallback mode");
    }
    if config.gemini.api_key.is_none() && config.groq.api_key.is_none() {
        tracing::warn!("No chat provider keys set; chat will answer in offline mode");
    }

    let state = Arc::new(AppState::from_config(config));

    if let Err(e) = aquapredict::serve(state).await {
        tracing::error!("❌ Server error: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    Ok(())
}
