use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use super::{GameSession, RandomWordSource, SecretWord, WordSource};

/// Manager for all live game sessions
pub struct GameManager {
    /// Map of game_id to GameSession
    games: HashMap<String, GameSession>,
    /// Where new sessions get their secret word from
    word_source: Arc<dyn WordSource>,
}

impl GameManager {
    /// Create a manager that draws words at random from the built-in list
    pub fn new() -> Self {
        Self::with_word_source(Arc::new(RandomWordSource))
    }

    pub fn with_word_source(word_source: Arc<dyn WordSource>) -> Self {
        Self {
            games: HashMap::new(),
            word_source,
        }
    }

    /// Create a new session with a unique ID
    ///
    /// # Returns
    ///
    /// The game_id of the newly created session
    pub fn create_game(&mut self) -> String {
        let mut game_id = Self::generate_game_id();

        // Ensure uniqueness (very unlikely to collide, but check anyway)
        while self.games.contains_key(&game_id) {
            game_id = Self::generate_game_id();
        }

        let word = SecretWord::new(&self.word_source.pick_word());
        let game = GameSession::new(game_id.clone(), word);
        self.games.insert(game_id.clone(), game);

        tracing::info!("created game {}", game_id);
        game_id
    }

    fn generate_game_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Retrieve a session by ID
    pub fn get_game(&self, game_id: &str) -> Option<&GameSession> {
        self.games.get(game_id)
    }

    /// Retrieve a mutable session by ID
    pub fn get_game_mut(&mut self, game_id: &str) -> Option<&mut GameSession> {
        self.games.get_mut(game_id)
    }

    /// Remove a session
    ///
    /// # Returns
    ///
    /// Whether a session with that ID existed
    pub fn remove_game(&mut self, game_id: &str) -> bool {
        let existed = self.games.remove(game_id).is_some();
        if existed {
            tracing::info!("removed game {}", game_id);
        }
        existed
    }

    /// Get statistics about live sessions
    ///
    /// # Returns
    ///
    /// JSON value with session counts
    pub fn stats(&self) -> serde_json::Value {
        let active_games = self
            .games
            .values()
            .filter(|game| !game.status().is_terminal())
            .count();

        serde_json::json!({
            "total_games": self.games.len(),
            "active_games": active_games,
        })
    }
}

impl Default for GameManager {
    fn default() -> Self {
        Self::new()
    }
}
