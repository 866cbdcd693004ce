use serde::{Deserialize, Serialize};

use super::{GameError, SecretWord};

/// How many incorrect guesses a session allows before it is lost
pub const INITIAL_ATTEMPTS: u8 = 6;

/// Session status, derived from the session fields on every read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    WaitingFirstGuess,
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Won and lost sessions accept no further guesses
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }
}

/// What a successfully applied guess did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    InProgress,
    Won,
    Lost,
}

/// A single hangman session.
///
/// Fields stay private so the invariants hold by construction:
/// `guessed_letters` only ever grows, holds lowercase letters without
/// duplicates, and `remaining_attempts` never leaves `0..=INITIAL_ATTEMPTS`.
#[derive(Debug)]
pub struct GameSession {
    /// Unique identifier for this session
    pub game_id: String,
    word: SecretWord,
    guessed_letters: Vec<char>,
    remaining_attempts: u8,
}

impl GameSession {
    pub fn new(game_id: String, word: SecretWord) -> Self {
        Self {
            game_id,
            word,
            guessed_letters: Vec::new(),
            remaining_attempts: INITIAL_ATTEMPTS,
        }
    }

    /// Letters guessed so far, lowercase, in first-guess order
    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed_letters
    }

    pub fn remaining_attempts(&self) -> u8 {
        self.remaining_attempts
    }

    /// Derive the session status.
    ///
    /// Lost wins over won: a session with no attempts left is lost even
    /// though a correct final guess can never drain the counter.
    pub fn status(&self) -> GameStatus {
        if self.remaining_attempts == 0 {
            GameStatus::Lost
        } else if self.word.is_fully_revealed(&self.guessed_letters) {
            GameStatus::Won
        } else if self.guessed_letters.is_empty() {
            GameStatus::WaitingFirstGuess
        } else {
            GameStatus::InProgress
        }
    }

    /// The word with unguessed letters masked, original casing preserved
    pub fn masked_word(&self) -> String {
        self.word.masked(&self.guessed_letters)
    }

    /// Apply a validated lowercase guess to the session.
    ///
    /// The guess either fully applies or is rejected without mutation:
    /// terminal sessions and repeated letters are refused up front, then the
    /// letter is recorded and an incorrect guess costs one attempt.
    ///
    /// # Errors
    ///
    /// [`GameError::GameOver`] if the session is already won or lost,
    /// [`GameError::AlreadyGuessed`] if the letter was guessed before.
    pub fn apply_guess(&mut self, letter: char) -> Result<GuessOutcome, GameError> {
        if self.status().is_terminal() {
            return Err(GameError::GameOver);
        }

        if self.guessed_letters.contains(&letter) {
            return Err(GameError::AlreadyGuessed);
        }

        self.guessed_letters.push(letter);

        if !self.word.contains(letter) {
            self.remaining_attempts = self.remaining_attempts.saturating_sub(1);
        }

        Ok(match self.status() {
            GameStatus::Lost => GuessOutcome::Lost,
            GameStatus::Won => GuessOutcome::Won,
            _ => GuessOutcome::InProgress,
        })
    }
}
