//! Guess analysis command
//!
//! Splits the answer set by the feedback a guess would produce against each
//! answer, showing how much a guess narrows things down.

use crate::core::{Feedback, Word, WordError};
use crate::wordlists::WordSource;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Number of largest feedback buckets kept in the result
const TOP_BUCKETS: usize = 5;

/// Result of analyzing a guess
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub guess: String,
    pub total_answers: usize,
    /// Distinct feedbacks the guess can produce
    pub bucket_count: usize,
    /// Answers left in the worst case
    pub largest_bucket: usize,
    /// Answers left on average, weighting each answer equally
    pub expected_remaining: f64,
    /// Largest buckets first
    pub top_buckets: Vec<(Feedback, usize)>,
}

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("invalid guess: {0}")]
    InvalidWord(#[from] WordError),
    #[error("'{0}' is not in the allowed word list")]
    NotAllowed(String),
}

/// Partition the answer set by the feedback `guess` produces
///
/// # Errors
///
/// Returns an error if the guess is not a valid word or not a legal guess.
pub fn analyze_guess(guess: &str, source: &WordSource) -> Result<AnalysisResult, AnalyzeError> {
    let guess = Word::new(guess.trim())?;
    if !source.is_allowed_guess(guess.text()) {
        return Err(AnalyzeError::NotAllowed(guess.text().to_string()));
    }

    let buckets = feedback_buckets(&guess, source.answers());
    let total_answers = source.answers().len();

    let expected_remaining = if total_answers == 0 {
        0.0
    } else {
        buckets.values().map(|&n| (n * n) as f64).sum::<f64>() / total_answers as f64
    };

    let mut sorted: Vec<(Feedback, usize)> = buckets.into_iter().collect();
    sorted.sort_by(|(fa, a), (fb, b)| b.cmp(a).then_with(|| fa.to_string().cmp(&fb.to_string())));

    Ok(AnalysisResult {
        guess: guess.text().to_string(),
        total_answers,
        bucket_count: sorted.len(),
        largest_bucket: sorted.first().map_or(0, |&(_, n)| n),
        expected_remaining,
        top_buckets: sorted.into_iter().take(TOP_BUCKETS).collect(),
    })
}

/// Count answers per feedback, in parallel over the answer set
fn feedback_buckets(guess: &Word, answers: &[Word]) -> FxHashMap<Feedback, usize> {
    answers
        .par_iter()
        .fold(FxHashMap::<Feedback, usize>::default, |mut counts, answer| {
            *counts.entry(Feedback::calculate(guess, answer)).or_insert(0) += 1;
            counts
        })
        .reduce(FxHashMap::default, |mut merged, part| {
            for (feedback, n) in part {
                *merged.entry(feedback).or_insert(0) += n;
            }
            merged
        })
}
