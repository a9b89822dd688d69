//! Keyboard letter states aggregated over the guess history

use super::{Feedback, Verdict, Word};
use std::collections::BTreeMap;

/// Best verdict seen so far for each letter
///
/// Updates only ever raise a letter's verdict, so the final map does not
/// depend on the order in which guesses are recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterStates {
    states: BTreeMap<u8, Verdict>,
}

impl LetterStates {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the verdicts of one scored guess
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &verdict) in guess.letters().iter().zip(feedback.verdicts()) {
            let entry = self.states.entry(letter).or_default();
            *entry = entry.join(verdict);
        }
    }

    /// Verdict for a letter (case-insensitive); `Empty` if never guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Verdict {
        if !letter.is_ascii_alphabetic() {
            return Verdict::Empty;
        }
        // Checked ASCII above, so the cast is lossless
        let key = letter.to_ascii_uppercase() as u8;
        self.states.get(&key).copied().unwrap_or_default()
    }

    /// Join another aggregate into this one
    #[must_use]
    pub fn merge(mut self, other: &Self) -> Self {
        for (&letter, &verdict) in &other.states {
            let entry = self.states.entry(letter).or_default();
            *entry = entry.join(verdict);
        }
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Aggregate keyboard verdicts for every guess in `history` against `target`
///
/// Entries that are not valid five-letter words are skipped.
///
/// # Examples
/// ```
/// use wordle_clone::core::{aggregate, Verdict, Word};
///
/// let target = Word::new("crane").unwrap();
/// let keys = aggregate(["trace", "crane"], &target);
/// assert_eq!(keys.get('t'), Verdict::Absent);
/// assert_eq!(keys.get('C'), Verdict::Correct);
/// assert_eq!(keys.get('Z'), Verdict::Empty);
/// ```
pub fn aggregate<I, S>(history: I, target: &Word) -> LetterStates
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    history
        .into_iter()
        .filter_map(|guess| Word::new(guess.as_ref()).ok())
        .fold(LetterStates::new(), |mut states, guess| {
            states.record(&guess, &Feedback::calculate(&guess, target));
            states
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> Word {
        Word::new("crane").unwrap()
    }

    #[test]
    fn aggregate_empty_history() {
        let states = aggregate(Vec::<String>::new(), &target());
        assert!(states.is_empty());
        assert_eq!(states.get('A'), Verdict::Empty);
    }

    #[test]
    fn aggregate_single_guess() {
        let states = aggregate(["trace"], &target());
        assert_eq!(states.get('T'), Verdict::Absent);
        assert_eq!(states.get('R'), Verdict::Correct);
        assert_eq!(states.get('A'), Verdict::Correct);
        assert_eq!(states.get('C'), Verdict::Present);
        assert_eq!(states.get('E'), Verdict::Correct);
    }

    #[test]
    fn aggregate_is_monotonic() {
        // C is present in TRACE, correct in CLOUD; the later TRACE must not downgrade it
        let states = aggregate(["trace", "cloud", "trace"], &target());
        assert_eq!(states.get('C'), Verdict::Correct);
    }

    #[test]
    fn aggregate_duplicate_letter_keeps_best() {
        // LLAMA vs ALLOY: one L correct, one L present; key shows correct
        let states = aggregate(["alloy"], &Word::new("llama").unwrap());
        assert_eq!(states.get('L'), Verdict::Correct);
        assert_eq!(states.get('A'), Verdict::Present);
        assert_eq!(states.get('O'), Verdict::Absent);
    }

    #[test]
    fn aggregate_order_independent() {
        let forward = aggregate(["trace", "slate", "cabin"], &target());
        let backward = aggregate(["cabin", "slate", "trace"], &target());
        assert_eq!(forward, backward);
    }

    #[test]
    fn aggregate_skips_invalid_guesses() {
        let states = aggregate(["toolong", "abc", "", "trace"], &target());
        assert_eq!(states, aggregate(["trace"], &target()));
    }

    #[test]
    fn merge_is_join() {
        let left = aggregate(["trace"], &target());
        let right = aggregate(["cabin"], &target());
        let merged = left.clone().merge(&right);
        assert_eq!(merged, aggregate(["trace", "cabin"], &target()));
        assert_eq!(merged.get('C'), Verdict::Correct);
        assert_eq!(merged.get('B'), Verdict::Absent);
    }

    #[test]
    fn get_ignores_non_letters() {
        let states = aggregate(["trace"], &target());
        assert_eq!(states.get('1'), Verdict::Empty);
        assert_eq!(states.get('é'), Verdict::Empty);
        assert_eq!(states.get('t'), Verdict::Absent);
    }
}
