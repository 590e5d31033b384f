use crate::config::WeatherConfig;
use crate::domain::model::SeaConditions;
use crate::domain::ports::WeatherProvider;
use crate::utils::error::{ApiError, Result};
use async_trait::async_trait;
use rand::Rng;
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    main: WeatherMain,
    #[serde(default)]
    wind: WeatherWind,
}

#[derive(Debug, Deserialize)]
struct WeatherMain {
    temp: f64,
}

#[derive(Debug, Default, Deserialize)]
struct WeatherWind {
    #[serde(default)]
    speed: f64,
}

/// OpenWeather-style client. The upstream API has no marine data, so
/// salinity is a fixed estimate and wave height is simulated in the
/// 0.5-2.0 m range.
pub struct OpenWeatherClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherClient {
    pub fn new(config: WeatherConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current(&self, city: &str) -> Result<SeaConditions> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| ApiError::upstream("weather", "no API key configured"))?;

        let url = format!("{}/data/2.5/weather", self.config.base_url);
        tracing::debug!(%city, "Fetching current weather");

        let response = self
            .client
            .get(&url)
            .query(&[("q", city), ("appid", key), ("units", "metric")])
            .timeout(self.config.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::upstream(
                "weather",
                format!("status {}", response.status()),
            ));
        }

        let data: WeatherResponse = response
            .json()
            .await
            .map_err(|e| ApiError::upstream("weather", format!("malformed response: {e}")))?;

        let mut rng = rand::thread_rng();
        Ok(SeaConditions {
            temperature: data.main.temp,
            salinity: 34.0,
            wave_height: rng.gen_range(0.5..2.0),
            wind_speed: data.wind.speed,
        })
    }
}
