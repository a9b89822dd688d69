//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterStates, Verdict, Word};
use colored::{ColoredString, Colorize};

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// A single letter tile coloured by its verdict
#[must_use]
pub fn tile(letter: char, verdict: Verdict) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match verdict {
        Verdict::Correct => text.white().bold().on_green(),
        Verdict::Present => text.black().bold().on_yellow(),
        Verdict::Absent => text.white().on_bright_black(),
        Verdict::Empty => text.bold(),
    }
}

/// A scored guess as a row of coloured tiles
#[must_use]
pub fn tile_row(word: &Word, feedback: &Feedback) -> String {
    word.text()
        .chars()
        .zip(feedback.verdicts())
        .map(|(letter, &verdict)| tile(letter, verdict).to_string())
        .collect()
}

/// One keyboard row with each key coloured by its best verdict
#[must_use]
pub fn keyboard_row(keys: &str, states: &LetterStates) -> String {
    keys.chars()
        .map(|key| tile(key, states.get(key)).to_string())
        .collect()
}
