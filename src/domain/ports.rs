use crate::domain::model::{EnvironmentReading, MlRecommendation, SeaConditions};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Weather collaborator. Sea-state fields the upstream API lacks are
/// simulated by the adapter.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, city: &str) -> Result<SeaConditions>;
}

/// ML prediction collaborator. Both operations talk to the same external
/// service; either may fail with `ApiError::Upstream`.
#[async_trait]
pub trait HarvestPredictor: Send + Sync {
    /// Species recommendation for the fusion engine.
    async fn recommend(&self, env: &EnvironmentReading) -> Result<MlRecommendation>;

    /// Raw harvest prediction, passed through to the client unchanged.
    async fn predict(&self, payload: &serde_json::Value) -> Result<serde_json::Value>;
}

/// One chat completion provider. The chat route tries providers in order.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn reply(&self, message: &str) -> Result<String>;
}
