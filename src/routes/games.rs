use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{core::GameError, models::GameView, state::AppState};

/// Create a new game session
///
/// # Returns
///
/// 201 Created with the plain session identifier as the body
pub async fn create_game(State(state): State<AppState>) -> impl IntoResponse {
    let mut manager = state.game_manager.write().await;
    let game_id = manager.create_game();

    (StatusCode::CREATED, game_id)
}

/// Fetch the current view of a session
///
/// # Returns
///
/// 200 with the projected view, or 404 for an unknown session
pub async fn get_game(
    Path(game_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<GameView>, GameError> {
    let manager = state.game_manager.read().await;
    let game = manager.get_game(&game_id).ok_or(GameError::NotFound)?;

    Ok(Json(GameView::from_session(game)))
}

/// Delete a session
///
/// Idempotent: answers 204 whether or not the session existed.
pub async fn delete_game(
    Path(game_id): Path<String>,
    State(state): State<AppState>,
) -> StatusCode {
    let mut manager = state.game_manager.write().await;
    if !manager.remove_game(&game_id) {
        tracing::debug!("delete for unknown game {}", game_id);
    }

    StatusCode::NO_CONTENT
}
