//! The game's word source: secret selection and guess legality

use super::loader::{ListKind, LoadError, embedded_lines, parse_list, read_lines};
use crate::core::Word;
use log::{debug, info};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Immutable answer set plus the set of all legal guesses
///
/// The allowed set is the union of the answer list and the extra allowed
/// list, so every possible secret is also a legal guess.
#[derive(Debug, Clone)]
pub struct WordSource {
    answers: Vec<Word>,
    allowed: FxHashSet<String>,
}

impl WordSource {
    /// Build a word source from an answer list and an allowed-guess list
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if either list is empty or holds an entry that is
    /// not exactly five letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::wordlists::WordSource;
    ///
    /// let source = WordSource::load(["alloy", "crane"], ["lolly"]).unwrap();
    /// assert!(source.is_allowed_guess("LOLLY"));
    /// assert!(source.is_allowed_guess("crane"));
    /// assert!(!source.is_allowed_guess("zzzzz"));
    /// ```
    pub fn load<A, B, S, T>(answers: A, allowed: B) -> Result<Self, LoadError>
    where
        A: IntoIterator<Item = S>,
        B: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let answers = parse_list(ListKind::Answers, answers)?;
        let extra = parse_list(ListKind::Allowed, allowed)?;

        let allowed: FxHashSet<String> = answers
            .iter()
            .chain(&extra)
            .map(|w| w.text().to_string())
            .collect();

        info!(
            "loaded {} answers and {} allowed guesses",
            answers.len(),
            allowed.len()
        );

        Ok(Self { answers, allowed })
    }

    /// Load both lists from newline-delimited files
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if a file cannot be read, or any error
    /// [`WordSource::load`] returns.
    pub fn from_files<P, Q>(answers: P, allowed: Q) -> Result<Self, LoadError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let answers = read_lines(ListKind::Answers, answers)?;
        let allowed = read_lines(ListKind::Allowed, allowed)?;
        Self::load(answers, allowed)
    }

    /// Load the word lists compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the embedded data is malformed.
    pub fn embedded() -> Result<Self, LoadError> {
        Self::load(
            embedded_lines(ListKind::Answers),
            embedded_lines(ListKind::Allowed),
        )
    }

    /// Draw a secret uniformly at random from the answer set
    ///
    /// Each call is an independent draw; the source is not consumed.
    pub fn pick_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        // Non-empty by construction
        let index = rng.random_range(0..self.answers.len());
        debug!("drew secret #{index} of {}", self.answers.len());
        &self.answers[index]
    }

    /// Whether `candidate` (in any case) is a legal guess
    #[must_use]
    pub fn is_allowed_guess(&self, candidate: &str) -> bool {
        self.allowed.contains(candidate.to_lowercase().as_str())
    }

    /// The answer set, in load order
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Number of distinct legal guesses
    #[must_use]
    pub fn allowed_len(&self) -> usize {
        self.allowed.len()
    }
}
