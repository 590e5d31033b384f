use crate::app::state::AppState;
use crate::core::dashboard;
use crate::core::insights;
use crate::core::safety::classify_safety;
use crate::domain::model::{DashboardPayload, EnvironmentReading};
use crate::utils::error::Result;
use axum::extract::State;
use axum::Json;
use chrono::Utc;
use std::sync::Arc;

const BASE_FISH_PRICE: f64 = 120.0;

/// GET /api/dashboard. Never returns 5xx: any assembly failure degrades to
/// the normalized fallback payload.
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardPayload> {
    match assemble(&state).await {
        Ok(payload) => Json(payload),
        Err(e) => {
            tracing::error!(error = %e, "Dashboard assembly failed, serving fallback payload");
            Json(dashboard::fallback_payload())
        }
    }
}

async fn assemble(state: &AppState) -> Result<DashboardPayload> {
    let config = &state.config;
    let conditions = state.weather.current(&config.default_city).await?;

    let month = Utc::now().format("%B").to_string();
    let env = EnvironmentReading::from_conditions(&config.default_region, &month, &conditions);
    let safety = classify_safety(env.wave_height);

    // ML failure is absorbed inside the engine by the rule fallback.
    let recommendation =
        insights::recommend_species(state.predictor.as_ref(), &env, &safety).await;

    tracing::debug!(
        species = %recommendation.species,
        confidence = recommendation.confidence,
        status = safety.status.as_str(),
        "Dashboard fused"
    );

    let trend = dashboard::market_trend(BASE_FISH_PRICE);
    Ok(dashboard::build_dashboard(&env, &recommendation, &safety, trend))
}
