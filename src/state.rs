use crate::core::{GameManager, RandomWordSource, WordSource};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub game_manager: Arc<RwLock<GameManager>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_word_source(Arc::new(RandomWordSource))
    }

    /// Build state around a specific word source. Tests pass a deterministic
    /// source here instead of patching the RNG.
    pub fn with_word_source(word_source: Arc<dyn WordSource>) -> Self {
        Self {
            game_manager: Arc::new(RwLock::new(GameManager::with_word_source(word_source))),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
