use crate::config::MlConfig;
use crate::domain::model::{EnvironmentReading, MlRecommendation};
use crate::domain::ports::HarvestPredictor;
use crate::utils::error::{ApiError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

pub const MODEL_NAME: &str = "fish_predictor_v1";

/// Client for the external ML prediction microservice.
pub struct MlPredictClient {
    client: Client,
    config: MlConfig,
}

impl MlPredictClient {
    pub fn new(config: MlConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl HarvestPredictor for MlPredictClient {
    async fn recommend(&self, env: &EnvironmentReading) -> Result<MlRecommendation> {
        let url = format!("{}/recommendation", self.config.base_url);
        let payload = serde_json::json!({
            "region": env.region,
            "month": env.month,
            "temperature": env.temperature,
            "salinity": env.salinity,
            "oxygen": env.oxygen_estimate(),
        });

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .timeout(self.config.recommend_timeout)
            .send()
            .await
            .map_err(|e| ApiError::upstream("ml-service", e))?;

        if !response.status().is_success() {
            return Err(ApiError::upstream(
                "ml-service",
                format!("status {}", response.status()),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::upstream("ml-service", format!("malformed response: {e}")))
    }

    async fn predict(&self, payload: &Value) -> Result<Value> {
        let url = format!("{}/predict", self.config.base_url);

        let response = self
            .client
            .post(&url)
            .json(payload)
            .timeout(self.config.predict_timeout)
            .send()
            .await
            .map_err(|e| ApiError::upstream("ml-service", e))?;

        if !response.status().is_success() {
            return Err(ApiError::upstream(
                "ml-service",
                format!("status {}", response.status()),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::upstream("ml-service", format!("malformed response: {e}")))
    }
}
