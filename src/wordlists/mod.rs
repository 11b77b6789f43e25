//! Word lists and the word source built from them
//!
//! The default lists are embedded into the binary; either can be replaced by a
//! file at run time.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
pub use loader::{ListKind, LoadError};
pub use source::WordSource;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn embedded_lists_are_valid_words() {
        for &word in ANSWERS.iter().chain(ALLOWED) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_lists_cover_common_words() {
        let source = WordSource::embedded().unwrap();

        for word in [
            "geese", "house", "night", "plant", "queen", "river", "sweet", "table", "under",
            "voice", "water", "young", "zebra", "words", "games",
        ] {
            assert!(source.is_allowed_guess(word), "{word}");
        }
    }

    #[test]
    fn answers_span_the_alphabet() {
        for first in b'a'..=b'z' {
            if first == b'x' {
                continue;
            }
            assert!(
                ANSWERS.iter().any(|w| w.as_bytes()[0] == first),
                "no answer starts with '{}'",
                first as char
            );
        }
    }

    #[test]
    fn extra_guesses_are_not_answers() {
        let answers: rustc_hash::FxHashSet<&str> = ANSWERS.iter().copied().collect();
        assert!(ALLOWED.iter().all(|w| !answers.contains(w)));
    }

    #[test]
    fn embedded_source_loads() {
        let source = WordSource::embedded().unwrap();
        assert_eq!(source.answers().len(), ANSWERS_COUNT);
        assert!(source.allowed_len() >= ANSWERS_COUNT);

        for &answer in &ANSWERS[..10] {
            assert!(source.is_allowed_guess(answer), "{answer}");
        }
        for &extra in &ALLOWED[..10] {
            assert!(source.is_allowed_guess(extra), "{extra}");
        }
    }
}
