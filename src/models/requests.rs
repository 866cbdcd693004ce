use serde::{Deserialize, Serialize};

use crate::core::{words::lowercase_key, GameError};

/// A guess submitted against a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuessRequest {
    /// The guessed letter (exactly one alphabetic character, any case)
    pub letter: String,
}

impl GuessRequest {
    /// Validate a raw guess and normalize it to its lowercase letter
    ///
    /// # Arguments
    ///
    /// * `raw` - Raw guess input
    ///
    /// # Returns
    ///
    /// The lowercase letter if the input is exactly one alphabetic
    /// character, [`GameError::InvalidGuess`] otherwise
    ///
    /// # Validation Rules
    ///
    /// - Exactly one character
    /// - Alphabetic
    /// - Independent of any session state
    pub fn validate_letter(raw: &str) -> Result<char, GameError> {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_alphabetic() => Ok(lowercase_key(c)),
            _ => Err(GameError::InvalidGuess),
        }
    }

    /// The request's letter, validated and lowercased
    pub fn normalized(&self) -> Result<char, GameError> {
        Self::validate_letter(&self.letter)
    }
}
