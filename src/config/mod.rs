pub mod cli;

pub use cli::CliConfig;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use std::time::Duration;

const DEFAULT_PORT: u16 = 5000;

/// Explicit configuration for every external collaborator, built once at
/// startup. Business logic never reads the process environment itself.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub default_city: String,
    pub default_region: String,
    pub weather: WeatherConfig,
    pub ml: MlConfig,
    pub gemini: ChatProviderConfig,
    pub groq: ChatProviderConfig,
}

#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct MlConfig {
    pub base_url: String,
    /// Bounded wait for the dashboard's species recommendation.
    pub recommend_timeout: Duration,
    /// Bounded wait for harvest predictions.
    pub predict_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct ChatProviderConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl AppConfig {
    /// Build from the process environment plus CLI flags. Missing provider
    /// keys are allowed; the affected collaborator reports unavailability
    /// and the fallback paths absorb it.
    pub fn from_env(cli: &CliConfig) -> Self {
        let port = cli
            .port
            .or_else(|| env_var("PORT").and_then(|p| p.parse().ok()))
            .unwrap_or(DEFAULT_PORT);

        Self {
            port,
            default_city: env_var("DEFAULT_CITY").unwrap_or_else(|| "Chennai".to_string()),
            default_region: env_var("DEFAULT_REGION")
                .unwrap_or_else(|| "Chennai Coast".to_string()),
            weather: WeatherConfig {
                base_url: env_var("WEATHER_API_URL")
                    .unwrap_or_else(|| "https://api.openweathermap.org".to_string()),
                api_key: env_var("WEATHER_API_KEY"),
                timeout: Duration::from_secs(8),
            },
            ml: MlConfig {
                base_url: env_var("ML_SERVICE_URL")
                    .unwrap_or_else(|| "http://127.0.0.1:8000".to_string()),
                recommend_timeout: Duration::from_millis(3000),
                predict_timeout: Duration::from_secs(8),
            },
            gemini: ChatProviderConfig {
                base_url: env_var("GEMINI_API_URL")
                    .unwrap_or_else(|| "https://generativelanguage.googleapis.com".to_string()),
                api_key: env_var("GEMINI_API_KEY"),
                timeout: Duration::from_secs(12),
            },
            groq: ChatProviderConfig {
                base_url: env_var("GROQ_API_URL")
                    .unwrap_or_else(|| "https://api.groq.com".to_string()),
                api_key: env_var("GROQ_API_KEY"),
                timeout: Duration::from_secs(12),
            },
        }
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_range("port", self.port, 1, 65535)?;
        validate_non_empty_string("default_city", &self.default_city)?;
        validate_non_empty_string("default_region", &self.default_region)?;
        validate_url("weather.base_url", &self.weather.base_url)?;
        validate_url("ml.base_url", &self.ml.base_url)?;
        validate_url("gemini.base_url", &self.gemini.base_url)?;
        validate_url("groq.base_url", &self.groq.base_url)?;
        Ok(())
    }
}
