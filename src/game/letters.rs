//! Alphabet board summarizing what each letter is known to be

use crate::core::{Feedback, LetterState, Word};

/// What the player has learned about a letter so far
///
/// Variants are ordered by strength of evidence, so merging two hints is `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LetterHint {
    #[default]
    Unknown,
    Absent,
    Present,
    Placed,
}

impl From<LetterState> for LetterHint {
    fn from(state: LetterState) -> Self {
        match state {
            LetterState::Correct => Self::Placed,
            LetterState::Misplaced => Self::Present,
            LetterState::Incorrect => Self::Absent,
        }
    }
}

/// Per-letter hints for `a..=z`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterBoard {
    hints: [LetterHint; 26],
}

impl LetterBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one guess's feedback into the board
    ///
    /// A hint never gets weaker: a surplus copy of a letter marked incorrect
    /// does not hide a letter already seen as present or placed.
    pub fn record(&mut self, guess: &Word, feedback: Feedback) {
        for (&letter, state) in guess.chars().iter().zip(feedback.iter()) {
            if let Some(slot) = self.slot_mut(letter) {
                *slot = (*slot).max(LetterHint::from(state));
            }
        }
    }

    /// Hint for a letter; anything outside `a..=z` (either case) is `Unknown`
    #[must_use]
    pub fn hint(&self, letter: u8) -> LetterHint {
        let letter = letter.to_ascii_lowercase();
        if letter.is_ascii_lowercase() {
            self.hints[usize::from(letter - b'a')]
        } else {
            LetterHint::Unknown
        }
    }

    /// Letters `a..=z` with their hints
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterHint)> + '_ {
        (b'a'..=b'z').zip(self.hints.iter().copied()).map(|(l, h)| (char::from(l), h))
    }

    pub fn reset(&mut self) {
        self.hints = [LetterHint::Unknown; 26];
    }

    fn slot_mut(&mut self, letter: u8) -> Option<&mut LetterHint> {
        if letter.is_ascii_lowercase() {
            self.hints.get_mut(usize::from(letter - b'a'))
        } else {
            None
        }
    }
}
