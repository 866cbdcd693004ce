use thiserror::Error;

/// Everything that can go wrong while serving the game API.
///
/// Display messages double as the client-facing error text; the HTTP status
/// mapping lives at the route layer so the core stays framework-free.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Unknown session id
    #[error("game not found")]
    NotFound,
    /// Request body was not JSON with a `letter` field
    #[error("guess body must be JSON with a letter field")]
    InvalidBody,
    /// Guess was not exactly one alphabetic character
    #[error("Guess must be supplied with 1 letter")]
    InvalidGuess,
    /// Letter was guessed earlier in the same session
    #[error("letter already guessed")]
    AlreadyGuessed,
    /// Guess submitted against a won or lost session
    #[error("game is already over")]
    GameOver,
}
