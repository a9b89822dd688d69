//! Offline services backed by the embedded word lists

use super::{ServiceError, WordOfDaySource, WordValidator};
use crate::core::Word;
use crate::wordlists::{ALLOWED, ANSWERS, loader::words_from_slice};
use async_trait::async_trait;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Random targets from an answer list, validation against an allowed list
///
/// Every answer is also accepted as a guess.
#[derive(Debug, Clone)]
pub struct EmbeddedWords {
    answers: Vec<Word>,
    allowed: FxHashSet<Word>,
}

impl EmbeddedWords {
    #[must_use]
    pub fn new(answers: Vec<Word>, allowed: impl IntoIterator<Item = Word>) -> Self {
        let mut allowed: FxHashSet<Word> = allowed.into_iter().collect();
        allowed.extend(answers.iter().copied());
        Self { answers, allowed }
    }

    /// The lists compiled into the binary
    #[must_use]
    pub fn standard() -> Self {
        Self::new(words_from_slice(ANSWERS), words_from_slice(ALLOWED))
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.allowed.contains(&w))
    }
}

#[async_trait]
impl WordOfDaySource for EmbeddedWords {
    async fn fetch(&self) -> Result<String, ServiceError> {
        let pick = self.answers.choose(&mut rand::rng()).copied();
        pick.map(|w| w.to_string()).ok_or(ServiceError::EmptyWordList)
    }
}

#[async_trait]
impl WordValidator for EmbeddedWords {
    async fn validate(&self, word: &str) -> bool {
        self.contains(word)
    }
}
