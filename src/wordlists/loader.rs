//! Word list loading utilities
//!
//! Reads newline-delimited word lists from files or the embedded constants and
//! validates every entry strictly: a malformed line fails the whole load.

use super::embedded::{ALLOWED, ANSWERS};
use crate::core::{Word, WordError};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Which of the two word lists an entry or error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Words that can be drawn as the secret
    Answers,
    /// Extra words accepted as guesses
    Allowed,
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Answers => write!(f, "answers"),
            Self::Allowed => write!(f, "allowed"),
        }
    }
}

/// Error raised while loading a word list
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {list} list from {}", path.display())]
    Io {
        list: ListKind,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{list} list contains no words")]
    Empty { list: ListKind },
    #[error("{list} list line {line}: malformed entry {entry:?}")]
    Malformed {
        list: ListKind,
        line: usize,
        entry: String,
        #[source]
        source: WordError,
    },
}

/// Parse raw list entries into words
///
/// Each entry has trailing whitespace trimmed and is lowercased. Blank entries
/// are skipped; anything else that is not exactly five letters is an error.
///
/// # Errors
///
/// Returns [`LoadError::Malformed`] for the first bad entry (with its 1-based
/// line number), or [`LoadError::Empty`] if no words remain.
///
/// # Examples
/// ```
/// use wordle_clone::wordlists::loader::{parse_list, ListKind};
///
/// let words = parse_list(ListKind::Answers, ["Crane\r", "slate  ", ""]).unwrap();
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].text(), "crane");
///
/// assert!(parse_list(ListKind::Answers, ["crane", "toolong"]).is_err());
/// ```
pub fn parse_list<I, S>(list: ListKind, entries: I) -> Result<Vec<Word>, LoadError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut words = Vec::new();

    for (index, raw) in entries.into_iter().enumerate() {
        let entry = raw.as_ref().trim_end().to_lowercase();
        if entry.is_empty() {
            continue;
        }

        let word = Word::new(entry.as_str()).map_err(|source| LoadError::Malformed {
            list,
            line: index + 1,
            entry,
            source,
        })?;
        words.push(word);
    }

    if words.is_empty() {
        return Err(LoadError::Empty { list });
    }

    Ok(words)
}

/// Read the raw lines of a word list file
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be opened or is not UTF-8.
pub fn read_lines<P: AsRef<Path>>(list: ListKind, path: P) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        list,
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content.lines().map(str::to_string).collect())
}

/// Raw lines for a list, from `path` if given, otherwise the embedded copy
///
/// # Errors
///
/// Returns [`LoadError::Io`] if `path` is given and cannot be read.
pub fn lines_or_embedded(list: ListKind, path: Option<&Path>) -> Result<Vec<String>, LoadError> {
    match path {
        Some(path) => read_lines(list, path),
        None => Ok(embedded_lines(list).iter().map(|&s| s.to_string()).collect()),
    }
}

/// The word list compiled into the binary for `list`
#[must_use]
pub const fn embedded_lines(list: ListKind) -> &'static [&'static str] {
    match list {
        ListKind::Answers => ANSWERS,
        ListKind::Allowed => ALLOWED,
    }
}
