//! One-shot feedback for a secret and a guess

use crate::core::{EvaluateError, Feedback, evaluate};

/// Result of checking one guess against one secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub secret: String,
    pub guess: String,
    pub feedback: Feedback,
}

/// Score `guess` against `secret`
///
/// Both inputs are trimmed and lowercased; no word-list membership is required.
///
/// # Errors
///
/// Returns [`EvaluateError::LengthMismatch`] unless both are five letters long.
pub fn check_guess(secret: &str, guess: &str) -> Result<CheckResult, EvaluateError> {
    let secret = secret.trim().to_lowercase();
    let guess = guess.trim().to_lowercase();
    let feedback = evaluate(&secret, &guess)?;

    Ok(CheckResult {
        secret,
        guess,
        feedback,
    })
}
