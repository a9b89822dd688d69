//! Per-letter verdicts
//!
//! The variant order is the keyboard priority order, so `Ord` and `max` do
//! the right thing when merging verdicts from several guesses.

/// Classification of one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Verdict {
    /// Not evaluated yet (current or future row, unseen key)
    #[default]
    Empty,
    /// Letter does not occur in the target (or all occurrences are used up)
    Absent,
    /// Letter occurs in the target at another position
    Present,
    /// Letter is in the right position
    Correct,
}

impl Verdict {
    /// Merge priority: correct=3, present=2, absent=1, empty=0
    #[inline]
    #[must_use]
    pub const fn priority(self) -> u8 {
        self as u8
    }

    /// Least upper bound of two verdicts
    #[inline]
    #[must_use]
    pub fn join(self, other: Self) -> Self {
        self.max(other)
    }

    /// Square emoji used in share text
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
            Self::Empty => '⬛',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_order() {
        assert_eq!(Verdict::Empty.priority(), 0);
        assert_eq!(Verdict::Absent.priority(), 1);
        assert_eq!(Verdict::Present.priority(), 2);
        assert_eq!(Verdict::Correct.priority(), 3);
        assert!(Verdict::Correct > Verdict::Present);
        assert!(Verdict::Present > Verdict::Absent);
        assert!(Verdict::Absent > Verdict::Empty);
    }

    #[test]
    fn join_is_max() {
        assert_eq!(Verdict::Absent.join(Verdict::Present), Verdict::Present);
        assert_eq!(Verdict::Correct.join(Verdict::Absent), Verdict::Correct);
        assert_eq!(Verdict::Empty.join(Verdict::Empty), Verdict::Empty);
    }

    #[test]
    fn default_is_empty() {
        assert_eq!(Verdict::default(), Verdict::Empty);
    }
}
