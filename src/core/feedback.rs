//! Per-letter feedback for a guess against the secret word
//!
//! Each guess position gets one of three states:
//! - `Correct`: right letter, right position (green)
//! - `Misplaced`: letter is in the secret, wrong position (yellow)
//! - `Incorrect`: letter absent, or every copy of it is already accounted for (gray)

use super::word::{WORD_LEN, Word, letter_bag};
use std::fmt;
use thiserror::Error;

/// Feedback state for a single guess letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterState {
    Correct,
    Misplaced,
    Incorrect,
}

impl LetterState {
    /// Single-character mark used in text output ("G", "Y", "-")
    #[must_use]
    pub const fn mark(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Misplaced => 'Y',
            Self::Incorrect => '-',
        }
    }

    /// Emoji tile for this state
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Incorrect => '⬜',
        }
    }
}

/// Ordered feedback for a guess, aligned with the guess's letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterState; WORD_LEN]);

/// Error returned by [`evaluate`] when the inputs cannot be compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvaluateError {
    #[error(
        "secret and guess must both be {WORD_LEN} letters long (secret: {secret_len}, guess: {guess_len})"
    )]
    LengthMismatch { secret_len: usize, guess_len: usize },
}

/// Error returned when parsing a feedback string such as "GY-GY"
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid feedback string: {0}")]
pub struct ParseFeedbackError(String);

impl Feedback {
    /// All letters in the right place
    pub const SOLVED: Self = Self([LetterState::Correct; WORD_LEN]);

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the secret's letter bag
    /// 2. Second pass: mark remaining letters misplaced while the bag still holds a copy
    ///
    /// Exact matches are consumed before any misplaced match is assigned, so a
    /// letter is never marked more times than it occurs in the secret.
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::{Feedback, Word};
    ///
    /// let secret = Word::new("alloy").unwrap();
    /// let guess = Word::new("lolly").unwrap();
    ///
    /// assert_eq!(Feedback::calculate(&guess, &secret).to_string(), "YYG-G");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        score(guess.chars(), secret.chars())
    }

    /// The per-position states
    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LEN] {
        &self.0
    }

    /// Iterate over the states in guess order
    pub fn iter(&self) -> impl Iterator<Item = LetterState> + '_ {
        self.0.iter().copied()
    }

    /// Check if every letter is correct
    #[inline]
    #[must_use]
    pub fn is_solved(self) -> bool {
        self == Self::SOLVED
    }

    /// Number of positions with the given state
    #[must_use]
    pub fn count(self, state: LetterState) -> usize {
        self.0.iter().filter(|&&s| s == state).count()
    }

    /// Render as emoji tiles, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

/// Evaluate a raw guess string against a raw secret string
///
/// The inputs are compared byte by byte without re-validating their alphabet
/// or case; callers are expected to pass words that already went through
/// [`Word::new`] or the word source's guess check.
///
/// # Errors
///
/// Returns [`EvaluateError::LengthMismatch`] unless both inputs are exactly
/// five bytes long.
///
/// # Examples
/// ```
/// use wordle_clone::core::{evaluate, LetterState};
///
/// let feedback = evaluate("alloy", "lolly").unwrap();
/// assert_eq!(feedback.count(LetterState::Correct), 2);
///
/// assert!(evaluate("alloy", "lol").is_err());
/// ```
pub fn evaluate(secret: &str, guess: &str) -> Result<Feedback, EvaluateError> {
    let mismatch = || EvaluateError::LengthMismatch {
        secret_len: secret.len(),
        guess_len: guess.len(),
    };

    let secret: &[u8; WORD_LEN] = secret.as_bytes().try_into().map_err(|_| mismatch())?;
    let guess: &[u8; WORD_LEN] = guess.as_bytes().try_into().map_err(|_| mismatch())?;

    Ok(score(guess, secret))
}

fn score(guess: &[u8; WORD_LEN], secret: &[u8; WORD_LEN]) -> Feedback {
    let mut result = [LetterState::Incorrect; WORD_LEN];
    let mut bag = letter_bag(secret);

    // First pass: exact position matches
    for (i, state) in result.iter_mut().enumerate() {
        if guess[i] == secret[i] {
            *state = LetterState::Correct;
            if let Some(count) = bag.get_mut(&guess[i]) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: wrong position, but an unconsumed copy remains
    for (i, state) in result.iter_mut().enumerate() {
        if *state == LetterState::Correct {
            continue;
        }
        if let Some(count) = bag.get_mut(&guess[i])
            && *count > 0
        {
            *state = LetterState::Misplaced;
            *count -= 1;
        }
    }

    Feedback(result)
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for state in &self.0 {
            write!(f, "{}", state.mark())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = ParseFeedbackError;

    /// Parse a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseFeedbackError(s.to_string());
        let mut states = [LetterState::Incorrect; WORD_LEN];
        let mut chars = s.chars();

        for state in &mut states {
            *state = match chars.next().ok_or_else(invalid)? {
                'G' | 'g' | '🟩' => LetterState::Correct,
                'Y' | 'y' | '🟨' => LetterState::Misplaced,
                '-' | '_' | '⬜' => LetterState::Incorrect,
                _ => return Err(invalid()),
            };
        }

        if chars.next().is_some() {
            return Err(invalid());
        }

        Ok(Self(states))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fb(s: &str) -> Feedback {
        s.parse().unwrap()
    }

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn solved_constant() {
        assert!(Feedback::SOLVED.is_solved());
        assert_eq!(Feedback::SOLVED.count(LetterState::Correct), 5);
        assert_eq!(Feedback::SOLVED.to_string(), "GGGGG");
    }

    #[test]
    fn all_incorrect() {
        let feedback = Feedback::calculate(&word("abcde"), &word("fghij"));
        assert_eq!(feedback, fb("-----"));
        assert_eq!(feedback.count(LetterState::Incorrect), 5);
    }

    #[test]
    fn guess_equal_to_secret_is_solved() {
        for w in ["crane", "alloy", "speed", "aaaaa", "zzzzz"] {
            assert!(Feedback::calculate(&word(w), &word(w)).is_solved(), "{w}");
        }
    }

    #[test]
    fn alloy_lolly() {
        // Exact matches at 2 and 4 consume an L and the Y first; the leading L
        // takes the last free L, so the L at 3 has nothing left to match.
        let feedback = evaluate("alloy", "lolly").unwrap();
        assert_eq!(
            feedback.states(),
            &[
                LetterState::Misplaced,
                LetterState::Misplaced,
                LetterState::Correct,
                LetterState::Incorrect,
                LetterState::Correct,
            ]
        );
    }

    #[test]
    fn speed_erase_marks_both_es() {
        // SPEED holds two Es, so both Es in ERASE may be marked
        let feedback = evaluate("speed", "erase").unwrap();
        assert_eq!(feedback, fb("Y--YY"));
    }

    #[test]
    fn single_copy_is_marked_once() {
        // CRANE has one E: only the first E in SPEED gets it
        let feedback = evaluate("crane", "speed").unwrap();
        assert_eq!(feedback, fb("--Y--"));
    }

    #[test]
    fn exact_match_beats_earlier_misplaced() {
        // The O at 3 is exact; the O at 1 only gets the remaining copy
        let feedback = Feedback::calculate(&word("robot"), &word("floor"));
        assert_eq!(feedback, fb("YY-G-"));

        // With a single O the exact match wins and the earlier O is gray
        let feedback = evaluate("pilot", "robot").unwrap();
        assert_eq!(feedback, fb("---GG"));
    }

    #[test]
    fn crane_slate() {
        assert_eq!(evaluate("slate", "crane").unwrap(), fb("--G-G"));
    }

    #[test]
    fn evaluate_rejects_length_mismatch() {
        assert_eq!(
            evaluate("alloy", "lol"),
            Err(EvaluateError::LengthMismatch {
                secret_len: 5,
                guess_len: 3
            })
        );
        assert!(evaluate("allo", "allo").is_err());
        assert!(evaluate("", "alloy").is_err());
    }

    #[test]
    fn evaluate_is_deterministic() {
        let first = evaluate("eerie", "geese").unwrap();
        for _ in 0..10 {
            assert_eq!(evaluate("eerie", "geese").unwrap(), first);
        }
    }

    #[test]
    fn conservation_law_over_sample() {
        let words = [
            "alloy", "lolly", "speed", "erase", "eerie", "geese", "robot", "floor", "abbey",
            "babes", "llama", "hello", "level", "eject", "sassy", "tasty", "mamma", "offer",
        ];

        for secret in words {
            let secret_bag = letter_bag(secret.as_bytes());
            for guess in words {
                let feedback = evaluate(secret, guess).unwrap();
                for (&letter, &available) in &secret_bag {
                    let marked = guess
                        .bytes()
                        .zip(feedback.iter())
                        .filter(|&(g, s)| g == letter && s != LetterState::Incorrect)
                        .count();
                    assert!(
                        marked <= usize::from(available),
                        "{guess} vs {secret}: '{}' marked {marked} times",
                        letter as char
                    );
                }
                // Letters absent from the secret are never marked
                for (g, s) in guess.bytes().zip(feedback.iter()) {
                    if !secret_bag.contains_key(&g) {
                        assert_eq!(s, LetterState::Incorrect);
                    }
                }
            }
        }
    }

    #[test]
    fn parse_feedback_strings() {
        let p1 = fb("GY-GY");
        let p2 = fb("🟩🟨⬜🟩🟨");
        let p3 = fb("gy_gy");
        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.to_emoji(), "🟩🟨⬜🟩🟨");
    }

    #[test]
    fn parse_feedback_invalid() {
        assert!("GYGGYX".parse::<Feedback>().is_err());
        assert!("GYG".parse::<Feedback>().is_err());
        assert!("GXGGY".parse::<Feedback>().is_err());
        assert!("".parse::<Feedback>().is_err());
    }
}
