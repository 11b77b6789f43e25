//! Formatting utilities for terminal output

use crate::core::LetterState;
use crate::game::{LetterBoard, LetterHint, Turn};
use colored::{ColoredString, Colorize};

/// A single letter tile coloured by its feedback state
#[must_use]
pub fn tile(letter: char, state: LetterState) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match state {
        LetterState::Correct => text.black().on_green().bold(),
        LetterState::Misplaced => text.black().on_yellow().bold(),
        LetterState::Incorrect => text.white().on_bright_black().bold(),
    }
}

/// A guess rendered as a row of coloured tiles
#[must_use]
pub fn colored_turn(turn: &Turn) -> String {
    turn.guess()
        .text()
        .chars()
        .zip(turn.feedback().iter())
        .map(|(letter, state)| tile(letter, state).to_string())
        .collect()
}

/// The alphabet with known letters highlighted and absent letters blanked out
#[must_use]
pub fn letter_board_line(board: &LetterBoard) -> String {
    board
        .iter()
        .map(|(letter, hint)| {
            let letter = letter.to_ascii_uppercase().to_string();
            match hint {
                LetterHint::Placed => letter.green().bold().to_string(),
                LetterHint::Present => letter.yellow().bold().to_string(),
                LetterHint::Absent => "·".bright_black().to_string(),
                LetterHint::Unknown => letter,
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Emoji grid of a finished game, one row per guess
#[must_use]
pub fn share_grid(turns: &[Turn]) -> String {
    turns
        .iter()
        .map(|turn| turn.feedback().to_emoji())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameSession;
    use crate::wordlists::WordSource;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn tile_shows_uppercase_letter() {
        plain();
        assert_eq!(tile('a', LetterState::Correct).to_string(), " A ");
    }

    #[test]
    fn turn_and_board_rendering() {
        plain();
        let source = WordSource::load(["alloy"], ["lolly", "crane"]).unwrap();
        let mut game = GameSession::seeded(&source, 0);
        game.submit("crane").unwrap();
        game.submit("lolly").unwrap();

        assert_eq!(colored_turn(&game.turns()[1]), " L  O  L  L  Y ");

        let board = letter_board_line(game.letters());
        assert!(board.starts_with("A B · D · F"), "{board}");
        assert_eq!(board.split(' ').count(), 26);

        assert_eq!(share_grid(game.turns()), "⬜⬜🟨⬜⬜\n🟨🟨🟩⬜🟩");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
