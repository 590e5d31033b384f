use crate::app::handlers::{chat, dashboard, predict};
use crate::app::state::AppState;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

async fn health() -> Json<serde_json::Value> {
    Json(json!({"status": "ok", "service": "aquapredict"}))
}

/// Build the full router. Exposed separately from `serve` so tests can
/// drive it without binding a socket.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/chat", post(chat::handle_chat))
        // The dashboard historically lived under the chat router; both
        // paths are served for existing clients.
        .route("/api/dashboard", get(dashboard::get_dashboard))
        .route("/api/chat/dashboard", get(dashboard::get_dashboard))
        .route("/api/predict/fish", post(predict::predict_fish))
        .route("/api/harvest/plan", post(predict::harvest_plan))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(state: Arc<AppState>) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.port));
    let app = build_router(state);

    tracing::info!("AquaPredict backend listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
