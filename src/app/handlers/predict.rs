use crate::adapters::ml::MODEL_NAME;
use crate::app::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;

const REQUIRED_FIELDS: [&str; 4] = ["region", "vessels", "days", "gear"];

fn field_present(payload: &Value, field: &str) -> bool {
    match &payload[field] {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    }
}

fn validation_error() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": "Invalid input data",
            "required": REQUIRED_FIELDS,
        })),
    )
        .into_response()
}

fn service_unavailable() -> Response {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(json!({"error": "Prediction service temporarily unavailable"})),
    )
        .into_response()
}

/// POST /api/predict/fish. Wraps the prediction-service result with a
/// timestamp and model tag.
pub async fn predict_fish(State(state): State<Arc<AppState>>, Json(body): Json<Value>) -> Response {
    if !field_present(&body, "region") || !field_present(&body, "vessels") {
        return validation_error();
    }

    match state.predictor.predict(&body).await {
        Ok(data) => {
            let confidence = data.get("confidence").cloned().unwrap_or(Value::Null);
            Json(json!({
                "timestamp": Utc::now().to_rfc3339(),
                "confidence": confidence,
                "prediction": data,
                "model": MODEL_NAME,
            }))
            .into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Fish prediction unavailable");
            service_unavailable()
        }
    }
}

/// POST /api/harvest/plan. Same validation as predict_fish, but the
/// prediction-service JSON is passed through un-rewrapped; the consuming
/// client depends on that exact shape.
pub async fn harvest_plan(State(state): State<Arc<AppState>>, Json(body): Json<Value>) -> Response {
    if !field_present(&body, "region") || !field_present(&body, "vessels") {
        return validation_error();
    }

    match state.predictor.predict(&body).await {
        Ok(data) => Json(data).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Harvest plan unavailable");
            service_unavailable()
        }
    }
}
