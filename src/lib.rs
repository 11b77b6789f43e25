//! Wordle Clone
//!
//! A five-letter word-guessing game: six attempts to find a secret word, with
//! per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_clone::game::{GameSession, GameStatus};
//! use wordle_clone::wordlists::WordSource;
//!
//! let source = WordSource::load(["alloy"], ["lolly"]).unwrap();
//! let mut game = GameSession::seeded(&source, 7);
//!
//! let feedback = game.submit("lolly").unwrap();
//! assert_eq!(feedback.to_emoji(), "🟨🟨🟩⬜🟩");
//!
//! game.submit("alloy").unwrap();
//! assert_eq!(game.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Word lists and secret selection
pub mod wordlists;

// Game sessions
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
