pub mod games;
pub mod guesses;
pub mod health;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use crate::{core::GameError, state::AppState};

/// Build the application router.
///
/// Shared between `main` and the integration tests so both exercise the
/// same route table.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/stats", get(health::stats))
        .route("/games", post(games::create_game))
        .route(
            "/games/:game_id",
            get(games::get_game).delete(games::delete_game),
        )
        .route("/games/:game_id/guesses", post(guesses::make_guess))
        .with_state(state)
}

impl IntoResponse for GameError {
    fn into_response(self) -> Response {
        let status = match self {
            GameError::NotFound => StatusCode::NOT_FOUND,
            GameError::InvalidBody | GameError::InvalidGuess => StatusCode::BAD_REQUEST,
            GameError::AlreadyGuessed | GameError::GameOver => StatusCode::CONFLICT,
        };

        (
            status,
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
