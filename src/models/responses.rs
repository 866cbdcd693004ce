use serde::{Deserialize, Serialize};

use crate::core::{GameSession, GameStatus};

/// Client-visible view of a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameView {
    /// Letters guessed so far, lowercase, in first-guess order
    pub guesses_so_far: Vec<char>,
    /// Incorrect guesses left before the game is lost
    pub remaining_attempts: u8,
    /// Current session status
    pub status: GameStatus,
    /// The word with unguessed letters masked out
    pub word: String,
}

impl GameView {
    /// Project a session into its client-visible view
    ///
    /// Pure function of the session state: called on every read and after
    /// every in-progress guess.
    pub fn from_session(session: &GameSession) -> Self {
        Self {
            guesses_so_far: session.guessed_letters().to_vec(),
            remaining_attempts: session.remaining_attempts(),
            status: session.status(),
            word: session.masked_word(),
        }
    }
}
