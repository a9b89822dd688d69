//! Board grid and cursor

use crate::core::{MAX_ATTEMPTS, WORD_LENGTH, Word};

type Row = [Option<u8>; WORD_LENGTH];

/// Six rows of five letter cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    rows: [Row; MAX_ATTEMPTS],
}

/// Position of the next cell to type into
///
/// `row` ranges over `0..=MAX_ATTEMPTS` (it equals `MAX_ATTEMPTS` once every
/// row has been submitted) and `col` over `0..=WORD_LENGTH`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Letter in a cell, or `None` when the cell is empty or out of range
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        self.rows.get(row)?.get(col).copied().flatten().map(char::from)
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, letter: Option<u8>) {
        self.rows[row][col] = letter;
    }

    /// The word spelled by a row, once all five cells are filled
    #[must_use]
    pub fn row_word(&self, row: usize) -> Option<Word> {
        let cells = self.rows.get(row)?;
        let mut letters = [0u8; WORD_LENGTH];
        for (slot, cell) in letters.iter_mut().zip(cells) {
            *slot = (*cell)?;
        }
        Some(Word::from_letters(letters))
    }

    #[must_use]
    pub fn is_row_full(&self, row: usize) -> bool {
        self.rows
            .get(row)
            .is_some_and(|cells| cells.iter().all(Option::is_some))
    }

    /// Row contents as a display string, blanks shown as spaces
    #[must_use]
    pub fn row_text(&self, row: usize) -> String {
        (0..WORD_LENGTH)
            .map(|col| self.cell(row, col).unwrap_or(' '))
            .collect()
    }
}
