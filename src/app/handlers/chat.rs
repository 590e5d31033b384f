use crate::app::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;

const OFFLINE_REPLY: &str = "I'm AquaBot (offline mode) — please try again later.";

/// POST /api/chat. Tries each provider in order; if all fail, answers with
/// the canned offline reply rather than an error. Upstream error text never
/// reaches the client.
pub async fn handle_chat(State(state): State<Arc<AppState>>, Json(body): Json<Value>) -> Response {
    let message = match body["message"].as_str().map(str::trim) {
        Some(message) if !message.is_empty() => message.to_string(),
        _ => {
            return (StatusCode::BAD_REQUEST, Json(json!({"error": "Message required"})))
                .into_response()
        }
    };

    for provider in &state.chat_providers {
        match provider.reply(&message).await {
            Ok(reply) => {
                tracing::debug!(provider = provider.name(), "Chat reply served");
                return Json(json!({"reply": reply})).into_response();
            }
            Err(e) => {
                tracing::warn!(provider = provider.name(), error = %e, "Chat provider failed");
            }
        }
    }

    tracing::warn!("All chat providers failed, serving offline reply");
    Json(json!({"reply": OFFLINE_REPLY})).into_response()
}
