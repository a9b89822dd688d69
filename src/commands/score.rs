//! Score one guess against a target without playing a game

use crate::core::{Feedback, Word, WordError};

/// Result of scoring a single guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns `WordError` if either argument is not a five-letter word.
pub fn score_words(guess: &str, target: &str) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    Ok(ScoreResult {
        guess,
        target,
        feedback: Feedback::calculate(&guess, &target),
    })
}
