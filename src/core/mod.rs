pub mod error;
pub mod game_manager;
pub mod game_session;
pub mod words;

pub use error::GameError;
pub use game_manager::GameManager;
pub use game_session::{GameSession, GameStatus, GuessOutcome};
pub use words::{FixedWordSource, RandomWordSource, SecretWord, WordSource};
