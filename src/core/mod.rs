//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod feedback;
mod keyboard;
mod verdict;
mod word;

pub use feedback::{Feedback, score};
pub use keyboard::{LetterStates, aggregate};
pub use verdict::Verdict;
pub use word::{Word, WordError};

/// Letters per word
pub const WORD_LENGTH: usize = 5;

/// Guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;
