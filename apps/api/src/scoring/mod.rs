//! Fit scoring: token-overlap baseline between a résumé and a job description.
//!
//! The core is two pure functions:
//! 1. [`tokenize`] strips punctuation, lowercases and splits on whitespace.
//! 2. [`overlap_score`] divides the number of description tokens found in the
//!    résumé vocabulary by the description token count.
//!
//! [`fit_score`] is the boundary used by the analysis handlers: it refuses
//! inputs that normalize to nothing instead of letting the division fail.

pub mod overlap;
pub mod tokenizer;

use thiserror::Error;

pub use overlap::overlap_score;
pub use tokenizer::tokenize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("empty resume")]
    EmptyResume,

    #[error("empty description")]
    EmptyDescription,
}

/// Scores `resume_text` against `description_text`, returning a value in `[0, 1]`.
pub fn fit_score(resume_text: &str, description_text: &str) -> Result<f64, ScoreError> {
    let resume = tokenize(resume_text);
    if resume.is_empty() {
        return Err(ScoreError::EmptyResume);
    }
    let description = tokenize(description_text);
    overlap_score(&resume, &description)
}

/// Presentation scale used by the analyze endpoint: whole percent, rounded down.
pub fn as_percent(score: f64) -> u32 {
    (score * 100.0).floor().clamp(0.0, 100.0) as u32
}
