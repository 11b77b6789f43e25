//! Core domain types for the game
//!
//! Words and guess evaluation. Everything here is pure and free of I/O.

mod feedback;
mod word;

pub use feedback::{EvaluateError, Feedback, LetterState, ParseFeedbackError, evaluate};
pub use word::{WORD_LEN, Word, WordError};
