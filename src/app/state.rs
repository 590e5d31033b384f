use crate::adapters::chat::{GeminiChat, GroqChat};
use crate::adapters::ml::MlPredictClient;
use crate::adapters::weather::OpenWeatherClient;
use crate::config::AppConfig;
use crate::domain::ports::{ChatProvider, HarvestPredictor, WeatherProvider};
use std::sync::Arc;

/// Immutable collaborator handles shared across requests. No mutable state
/// lives here; every request computes and discards its own values.
pub struct AppState {
    pub config: AppConfig,
    pub weather: Arc<dyn WeatherProvider>,
    pub predictor: Arc<dyn HarvestPredictor>,
    /// Tried in order by the chat route; first success wins.
    pub chat_providers: Vec<Arc<dyn ChatProvider>>,
}

impl AppState {
    pub fn from_config(config: AppConfig) -> Self {
        let weather = Arc::new(OpenWeatherClient::new(config.weather.clone()));
        let predictor = Arc::new(MlPredictClient::new(config.ml.clone()));
        let chat_providers: Vec<Arc<dyn ChatProvider>> = vec![
            Arc::new(GeminiChat::new(config.gemini.clone())),
            Arc::new(GroqChat::new(config.groq.clone())),
        ];

        Self {
            config,
            weather,
            predictor,
            chat_providers,
        }
    }
}
