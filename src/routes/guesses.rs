use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    core::{GameError, GuessOutcome},
    models::{GameView, GuessRequest},
    state::AppState,
};

/// Submit a single-letter guess against a session
///
/// # Returns
///
/// - 200 with the projected view while the game stays in progress
/// - 200 with a congratulatory message on the winning guess
/// - 422 with a game-over message on the losing guess
/// - 404 / 400 / 409 per [`GameError`] otherwise
pub async fn make_guess(
    Path(game_id): Path<String>,
    State(state): State<AppState>,
    body: Result<Json<GuessRequest>, JsonRejection>,
) -> Result<Response, GameError> {
    let mut manager = state.game_manager.write().await;
    let game = manager.get_game_mut(&game_id).ok_or(GameError::NotFound)?;

    let Json(request) = body.map_err(|_| GameError::InvalidBody)?;
    let letter = request.normalized()?;

    let outcome = game.apply_guess(letter)?;
    tracing::debug!("game {}: guessed '{}' -> {:?}", game_id, letter, outcome);

    Ok(match outcome {
        GuessOutcome::Won => {
            tracing::info!("game {} won", game_id);
            Json(serde_json::json!({
                "message": "Congratulations! You have guessed the word correctly."
            }))
            .into_response()
        }
        GuessOutcome::Lost => {
            tracing::info!("game {} lost", game_id);
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(serde_json::json!({
                    "error": "No more attempts left, game over"
                })),
            )
                .into_response()
        }
        GuessOutcome::InProgress => Json(GameView::from_session(game)).into_response(),
    })
}
