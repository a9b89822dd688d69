//! Wordle feedback calculation and representation
//!
//! Feedback is the row of verdicts produced by scoring one guess against the
//! target: 🟩 correct, 🟨 present, ⬜ absent.

use super::{Verdict, WORD_LENGTH, Word, WordError};

/// Verdicts for one scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Verdict; WORD_LENGTH]);

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Verdict::Correct; WORD_LENGTH]);

    /// Row of a guess that has not been scored
    pub const UNSCORED: Self = Self([Verdict::Empty; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(verdicts: [Verdict; WORD_LENGTH]) -> Self {
        Self(verdicts)
    }

    /// Calculate the feedback when `guess` is guessed and `target` is the answer
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches (greens) and remove from available pool
    /// 2. Second pass: Mark present-but-wrong-position (yellows) from remaining pool
    ///
    /// Both passes scan left to right, so when the guess repeats a letter more
    /// often than the target holds it, the leftmost non-green copies get yellow.
    ///
    /// # Examples
    /// ```
    /// use wordle_clone::core::{Feedback, Verdict, Word};
    ///
    /// let guess = Word::new("alloy").unwrap();
    /// let target = Word::new("llama").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// assert_eq!(
    ///     feedback.verdicts(),
    ///     &[Verdict::Present, Verdict::Correct, Verdict::Present, Verdict::Absent, Verdict::Absent]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let guess = guess.letters();
        let mut available = target.letter_counts();
        let mut result = [Verdict::Absent; WORD_LENGTH];

        // First pass: Mark greens (exact position matches)
        for (i, (&g, &t)) in guess.iter().zip(target.letters()).enumerate() {
            if g == t {
                result[i] = Verdict::Correct;
                available[usize::from(g - b'A')] -= 1;
            }
        }

        // Second pass: Mark yellows (wrong position, but letter exists)
        for (verdict, &g) in result.iter_mut().zip(guess) {
            if *verdict == Verdict::Correct {
                continue;
            }
            let count = &mut available[usize::from(g - b'A')];
            if *count > 0 {
                *verdict = Verdict::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&v| v == Verdict::Correct).count()
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&v| v == Verdict::Present).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

/// Score a guess against a target given as plain strings
///
/// Both strings are compared case-insensitively and must be exactly five
/// ASCII letters; anything else is a caller error and is never truncated or
/// padded.
///
/// # Errors
/// Returns the `WordError` of the first argument that is not a valid word.
///
/// # Examples
/// ```
/// use wordle_clone::core::{score, Feedback};
///
/// assert_eq!(score("crane", "CRANE").unwrap(), Feedback::PERFECT);
/// assert!(score("cranes", "crane").is_err());
/// ```
pub fn score(guess: &str, target: &str) -> Result<Feedback, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    Ok(Feedback::calculate(&guess, &target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use Verdict::{Absent, Correct, Present};

    fn calc(guess: &str, target: &str) -> [Verdict; WORD_LENGTH] {
        *score(guess, target).unwrap().verdicts()
    }

    #[test]
    fn feedback_perfect_constant() {
        assert!(Feedback::PERFECT.is_perfect());
        assert_eq!(Feedback::PERFECT.count_correct(), 5);
        assert_eq!(Feedback::PERFECT.count_present(), 0);
        assert!(!Feedback::UNSCORED.is_perfect());
    }

    #[test]
    fn feedback_all_absent() {
        assert_eq!(calc("abcde", "fghij"), [Absent; 5]);
    }

    #[test]
    fn feedback_self_is_perfect() {
        for word in ["crane", "slate", "audio", "zzzzz", "llama"] {
            assert!(score(word, word).unwrap().is_perfect(), "{word}");
        }
    }

    #[test]
    fn feedback_trace_against_crane() {
        // T absent, R green, A green, C yellow, E green
        assert_eq!(
            calc("trace", "crane"),
            [Absent, Correct, Correct, Present, Correct]
        );
    }

    #[test]
    fn feedback_alloy_against_llama() {
        // The L at position 1 is green, which leaves one L for the L at position 2
        assert_eq!(
            calc("alloy", "llama"),
            [Present, Correct, Present, Absent, Absent]
        );
    }

    #[test]
    fn feedback_green_consumes_before_yellow() {
        // EERIE vs CRANE: the final E is green and uses the only E
        assert_eq!(
            calc("eerie", "crane"),
            [Absent, Absent, Present, Absent, Correct]
        );
    }

    #[test]
    fn feedback_leftmost_duplicate_gets_yellow() {
        // HELLO has two Ls; one goes to the green at position 2,
        // the other to the leftmost remaining L
        assert_eq!(
            calc("lllzz", "hello"),
            [Present, Absent, Correct, Absent, Absent]
        );
    }

    #[test]
    fn feedback_duplicate_letters_complex() {
        // ROBOT vs FLOOR: first O yellow, second O green
        assert_eq!(
            calc("robot", "floor"),
            [Present, Present, Absent, Correct, Absent]
        );
        // SPEED vs ERASE: both Es yellow, S yellow
        assert_eq!(
            calc("speed", "erase"),
            [Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn feedback_correct_count_matches_positions() {
        let pairs = [
            ("crane", "slate"),
            ("alloy", "llama"),
            ("speed", "erase"),
            ("robot", "floor"),
            ("mamma", "madam"),
            ("geese", "eerie"),
        ];
        for (guess, target) in pairs {
            let exact = guess
                .bytes()
                .zip(target.bytes())
                .filter(|(g, t)| g == t)
                .count();
            assert_eq!(
                score(guess, target).unwrap().count_correct(),
                exact,
                "{guess} vs {target}"
            );
        }
    }

    #[test]
    fn feedback_case_insensitive() {
        assert_eq!(score("TrAcE", "cRaNe").unwrap(), score("trace", "crane").unwrap());
    }

    #[test]
    fn feedback_deterministic() {
        let first = score("alloy", "llama").unwrap();
        for _ in 0..3 {
            assert_eq!(score("alloy", "llama").unwrap(), first);
        }
    }

    #[test]
    fn score_rejects_wrong_length() {
        assert_eq!(score("cranes", "crane"), Err(WordError::InvalidLength(6)));
        assert_eq!(score("crane", "cran"), Err(WordError::InvalidLength(4)));
    }

    #[test]
    fn feedback_to_emoji() {
        let feedback = score("trace", "crane").unwrap();
        assert_eq!(feedback.to_emoji(), "⬜🟩🟩🟨🟩");
    }
}
