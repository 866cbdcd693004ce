use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::state::AppState;

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// Session store statistics
pub async fn stats(State(state): State<AppState>) -> impl IntoResponse {
    let manager = state.game_manager.read().await;
    Json(manager.stats())
}
