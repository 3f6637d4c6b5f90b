/// Hangman game module
pub mod gallows;
pub mod game;
pub mod layout;
pub mod renderer;
pub mod session;
pub mod words;

pub use game::{GuessOutcome, HangmanGame, Outcome};
pub use renderer::HangmanRenderer;
pub use session::{Phase, Session};
pub use words::{WordList, WordSource, WordSourceError};
