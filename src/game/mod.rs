//! Game sessions built on the core evaluator
//!
//! A [`GameSession`] is a plain value updated through explicit transitions;
//! front-ends read it to render and never own game rules themselves.

mod letters;
mod session;
mod stats;

pub use letters::{LetterBoard, LetterHint};
pub use session::{GameSession, GameStatus, GuessError, MAX_ATTEMPTS, Turn};
pub use stats::GameStats;
