pub mod requests;
pub mod responses;

pub use requests::GuessRequest;
pub use responses::GameView;
