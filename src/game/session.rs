//! Game session state machine
//!
//! A session owns the board, cursor, guess history and status of one game.
//! The two network round-trips (dictionary check on submit, word fetch on
//! reset) are split into `begin_*` / `complete_*` halves. Between the halves
//! the session is busy and ignores typing; every ticket carries the epoch it
//! was issued in, and a result whose epoch has been superseded by a reset is
//! discarded.

use super::board::{Board, Cursor};
use crate::core::{Feedback, LetterStates, MAX_ATTEMPTS, WORD_LENGTH, Word, WordError, aggregate};
use crate::remote::{ServiceError, WordOfDaySource, WordValidator};
use std::fmt::Write as _;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Outstanding network work, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Idle,
    /// Waiting for the dictionary to accept or reject the current row
    Validating,
    /// Waiting for a new target word
    Fetching,
}

/// Ticket for a submitted row awaiting dictionary validation
#[derive(Debug)]
#[must_use = "pass the ticket to complete_submit"]
pub struct PendingGuess {
    word: Word,
    row: usize,
    epoch: u64,
}

impl PendingGuess {
    /// The word to validate
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }
}

/// Ticket for a new-game request awaiting the word of the day
#[derive(Debug)]
#[must_use = "pass the ticket to complete_reset"]
pub struct PendingReset {
    epoch: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Preconditions not met (busy, terminal, row not full); nothing changed
    Ignored,
    /// Dictionary rejected the word; the row stays editable
    NotAWord(Word),
    /// Row scored and committed
    Scored {
        feedback: Feedback,
        status: GameStatus,
    },
    /// Result arrived after a reset superseded it; discarded
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    Started,
    /// Another reset superseded this one; discarded
    Stale,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("could not load the word of the day: {0}")]
    Source(#[from] ServiceError),
    #[error("invalid target word: {0}")]
    InvalidTarget(#[from] WordError),
}

/// One Wordle game
#[derive(Debug, Clone)]
pub struct Session {
    target: Option<Word>,
    board: Board,
    cursor: Cursor,
    status: GameStatus,
    history: Vec<Word>,
    feedback: Vec<Feedback>,
    activity: Activity,
    epoch: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A session with no target yet; all input is ignored until a reset succeeds
    #[must_use]
    pub fn new() -> Self {
        Self {
            target: None,
            board: Board::new(),
            cursor: Cursor::default(),
            status: GameStatus::Playing,
            history: Vec::with_capacity(MAX_ATTEMPTS),
            feedback: Vec::with_capacity(MAX_ATTEMPTS),
            activity: Activity::Idle,
            epoch: 0,
        }
    }

    /// A session ready to play against `target`
    ///
    /// # Errors
    /// Returns `WordError` if `target` is not a five-letter word.
    pub fn with_target(target: &str) -> Result<Self, WordError> {
        let mut session = Self::new();
        session.reset(target)?;
        Ok(session)
    }

    #[must_use]
    pub const fn target(&self) -> Option<&Word> {
        self.target.as_ref()
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn activity(&self) -> Activity {
        self.activity
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.activity != Activity::Idle
    }

    /// Submitted guesses in order
    #[must_use]
    pub fn history(&self) -> &[Word] {
        &self.history
    }

    /// Verdicts for a row; unscored for the current row and every row after it
    #[must_use]
    pub fn row_feedback(&self, row: usize) -> Feedback {
        self.feedback
            .get(row)
            .copied()
            .unwrap_or(Feedback::UNSCORED)
    }

    /// Keyboard colours implied by the guesses so far
    #[must_use]
    pub fn keyboard(&self) -> LetterStates {
        self.target.as_ref().map_or_else(LetterStates::new, |target| {
            aggregate(self.history.iter().map(Word::text), target)
        })
    }

    fn accepts_input(&self) -> bool {
        self.target.is_some()
            && self.status == GameStatus::Playing
            && self.activity == Activity::Idle
            && self.cursor.row < MAX_ATTEMPTS
    }

    /// Type a letter into the cursor cell
    ///
    /// Returns `false` (and changes nothing) for non-letters, a full row,
    /// a busy session or a finished game.
    pub fn letter(&mut self, ch: char) -> bool {
        if !self.accepts_input() || self.cursor.col >= WORD_LENGTH || !ch.is_ascii_alphabetic() {
            return false;
        }
        let Cursor { row, col } = self.cursor;
        self.board.set(row, col, Some(ch.to_ascii_uppercase() as u8));
        self.cursor.col = (col + 1).min(WORD_LENGTH);
        true
    }

    /// Clear the cell left of the cursor
    pub fn delete(&mut self) -> bool {
        if !self.accepts_input() || self.cursor.col == 0 {
            return false;
        }
        self.cursor.col -= 1;
        let Cursor { row, col } = self.cursor;
        self.board.set(row, col, None);
        true
    }

    /// Start submitting the current row
    ///
    /// Returns `None` unless the row is complete and the session is idle and
    /// playing. On success the session is busy until `complete_submit`.
    pub fn begin_submit(&mut self) -> Option<PendingGuess> {
        if !self.accepts_input() {
            return None;
        }
        let row = self.cursor.row;
        let word = self.board.row_word(row)?;
        self.activity = Activity::Validating;
        debug!(%word, row, "validating guess");
        Some(PendingGuess {
            word,
            row,
            epoch: self.epoch,
        })
    }

    /// Apply the dictionary's answer for a pending guess
    ///
    /// An accepted guess always moves the cursor to the start of the next
    /// row, including the guess that wins or loses the game. Rows above the
    /// cursor are exactly the scored rows, so after a win on the third guess
    /// `cursor().row` is 3. Terminal status then freezes the board.
    pub fn complete_submit(&mut self, pending: PendingGuess, valid: bool) -> SubmitOutcome {
        if pending.epoch != self.epoch
            || pending.row != self.cursor.row
            || self.activity != Activity::Validating
        {
            debug!(word = %pending.word, "discarding stale validation result");
            return SubmitOutcome::Stale;
        }
        self.activity = Activity::Idle;

        if !valid {
            info!(word = %pending.word, "guess rejected by dictionary");
            return SubmitOutcome::NotAWord(pending.word);
        }

        let Some(target) = self.target else {
            return SubmitOutcome::Stale;
        };

        let feedback = Feedback::calculate(&pending.word, &target);
        self.history.push(pending.word);
        self.feedback.push(feedback);

        self.status = if feedback.is_perfect() {
            GameStatus::Won
        } else if pending.row + 1 >= MAX_ATTEMPTS {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        };
        self.cursor = Cursor {
            row: pending.row + 1,
            col: 0,
        };

        debug!(
            word = %pending.word,
            feedback = %feedback.to_emoji(),
            status = ?self.status,
            "guess scored"
        );
        SubmitOutcome::Scored {
            feedback,
            status: self.status,
        }
    }

    /// Submit the current row, asking `validator` whether it is a word
    pub async fn submit_with(&mut self, validator: &dyn WordValidator) -> SubmitOutcome {
        let Some(pending) = self.begin_submit() else {
            return SubmitOutcome::Ignored;
        };
        let valid = validator.validate(pending.word().text()).await;
        self.complete_submit(pending, valid)
    }

    /// Start a new game with an explicit target
    ///
    /// Valid in any state. Any in-flight validation or fetch is superseded.
    ///
    /// # Errors
    /// Returns `WordError` if `target` is not a five-letter word; the session
    /// is left exactly as it was.
    pub fn reset(&mut self, target: &str) -> Result<(), WordError> {
        let target = Word::new(target)?;
        self.epoch += 1;
        self.start(target);
        Ok(())
    }

    /// Start fetching a new target; the session is busy until `complete_reset`
    pub fn begin_reset(&mut self) -> PendingReset {
        self.epoch += 1;
        self.activity = Activity::Fetching;
        debug!(epoch = self.epoch, "fetching new target");
        PendingReset { epoch: self.epoch }
    }

    /// Apply a fetched word of the day
    ///
    /// # Errors
    /// Returns `SessionError` if the fetch failed or the word is malformed.
    /// The previous game (if any) is kept and becomes playable again.
    pub fn complete_reset(
        &mut self,
        pending: PendingReset,
        fetched: Result<String, ServiceError>,
    ) -> Result<ResetOutcome, SessionError> {
        if pending.epoch != self.epoch || self.activity != Activity::Fetching {
            debug!(epoch = pending.epoch, "discarding stale target fetch");
            return Ok(ResetOutcome::Stale);
        }
        self.activity = Activity::Idle;

        let target = Word::new(&fetched?)?;
        self.start(target);
        Ok(ResetOutcome::Started)
    }

    /// Fetch a new target from `source` and start a game with it
    ///
    /// # Errors
    /// See `complete_reset`.
    pub async fn new_game(
        &mut self,
        source: &dyn WordOfDaySource,
    ) -> Result<ResetOutcome, SessionError> {
        let pending = self.begin_reset();
        let fetched = source.fetch().await;
        self.complete_reset(pending, fetched)
    }

    fn start(&mut self, target: Word) {
        info!(epoch = self.epoch, "new game started");
        self.target = Some(target);
        self.board = Board::new();
        self.cursor = Cursor::default();
        self.status = GameStatus::Playing;
        self.history.clear();
        self.feedback.clear();
        self.activity = Activity::Idle;
    }

    /// Emoji grid of a finished game, e.g. "Wordle 3/6" followed by one line per guess
    #[must_use]
    pub fn share_text(&self) -> Option<String> {
        let score = match self.status {
            GameStatus::Playing => return None,
            GameStatus::Won => self.history.len().to_string(),
            GameStatus::Lost => "X".to_string(),
        };
        let mut text = format!("Wordle {score}/{MAX_ATTEMPTS}\n");
        for feedback in &self.feedback {
            let _ = write!(text, "\n{}", feedback.to_emoji());
        }
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict::{Absent, Correct, Present};
    use async_trait::async_trait;

    struct Dictionary(&'static [&'static str]);

    #[async_trait]
    impl WordValidator for Dictionary {
        async fn validate(&self, word: &str) -> bool {
            self.0.iter().any(|w| w.eq_ignore_ascii_case(word))
        }
    }

    struct FixedWord(&'static str);

    #[async_trait]
    impl WordOfDaySource for FixedWord {
        async fn fetch(&self) -> Result<String, ServiceError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl WordOfDaySource for FailingSource {
        async fn fetch(&self) -> Result<String, ServiceError> {
            Err(ServiceError::MissingWord)
        }
    }

    const WORDS: &[&str] = &[
        "crane", "trace", "slate", "cloud", "pious", "dumpy", "light", "fjord", "gawky",
    ];

    fn type_word(session: &mut Session, word: &str) {
        for ch in word.chars() {
            session.letter(ch);
        }
    }

    /// Type and submit a guess, accepting it when it is in `WORDS`
    fn guess(session: &mut Session, word: &str) -> SubmitOutcome {
        type_word(session, word);
        match session.begin_submit() {
            Some(pending) => {
                let valid = WORDS.iter().any(|w| w.eq_ignore_ascii_case(pending.word().text()));
                session.complete_submit(pending, valid)
            }
            None => SubmitOutcome::Ignored,
        }
    }

    fn snapshot(session: &Session) -> (Option<Word>, Board, Cursor, GameStatus, Vec<Word>) {
        (
            session.target,
            session.board.clone(),
            session.cursor,
            session.status,
            session.history.clone(),
        )
    }

    #[test]
    fn new_session_ignores_input_until_target_set() {
        let mut session = Session::new();
        assert!(!session.letter('a'));
        assert!(session.begin_submit().is_none());
        assert_eq!(session.cursor(), Cursor::default());
    }

    #[test]
    fn letter_advances_cursor_and_caps_at_row_end() {
        let mut session = Session::with_target("crane").unwrap();
        type_word(&mut session, "trace");
        assert_eq!(session.cursor(), Cursor { row: 0, col: 5 });
        assert!(!session.letter('x'));
        assert_eq!(session.board().row_text(0), "TRACE");
    }

    #[test]
    fn letter_ignores_non_letters() {
        let mut session = Session::with_target("crane").unwrap();
        assert!(!session.letter('1'));
        assert!(!session.letter(' '));
        assert!(!session.letter('é'));
        assert_eq!(session.cursor().col, 0);
        assert!(session.letter('q'));
        assert_eq!(session.board().cell(0, 0), Some('Q'));
    }

    #[test]
    fn delete_retreats_and_clears() {
        let mut session = Session::with_target("crane").unwrap();
        assert!(!session.delete());
        type_word(&mut session, "tra");
        assert!(session.delete());
        assert_eq!(session.cursor(), Cursor { row: 0, col: 2 });
        assert_eq!(session.board().cell(0, 2), None);
        assert_eq!(session.board().cell(0, 1), Some('R'));
    }

    #[test]
    fn submit_with_empty_cell_is_noop() {
        let mut session = Session::with_target("crane").unwrap();
        type_word(&mut session, "trac");
        let before = snapshot(&session);
        assert!(session.begin_submit().is_none());
        assert_eq!(snapshot(&session), before);
        assert_eq!(session.activity(), Activity::Idle);
    }

    #[test]
    fn rejected_word_leaves_row_editable() {
        let mut session = Session::with_target("crane").unwrap();
        let outcome = guess(&mut session, "xxxxx");
        assert_eq!(outcome, SubmitOutcome::NotAWord(Word::new("xxxxx").unwrap()));
        assert_eq!(session.cursor(), Cursor { row: 0, col: 5 });
        assert!(session.history().is_empty());
        assert_eq!(session.status(), GameStatus::Playing);
        assert!(session.delete());
    }

    #[test]
    fn scored_guess_advances_row() {
        let mut session = Session::with_target("crane").unwrap();
        let outcome = guess(&mut session, "trace");
        assert_eq!(
            outcome,
            SubmitOutcome::Scored {
                feedback: Feedback::new([Absent, Correct, Correct, Present, Correct]),
                status: GameStatus::Playing,
            }
        );
        assert_eq!(session.cursor(), Cursor { row: 1, col: 0 });
        assert_eq!(session.history(), &[Word::new("trace").unwrap()]);
        assert_eq!(session.row_feedback(0).count_correct(), 3);
        assert_eq!(session.row_feedback(1), Feedback::UNSCORED);
    }

    #[test]
    fn correct_guess_wins_and_freezes_board() {
        let mut session = Session::with_target("crane").unwrap();
        guess(&mut session, "trace");
        let outcome = guess(&mut session, "crane");
        assert_eq!(
            outcome,
            SubmitOutcome::Scored {
                feedback: Feedback::PERFECT,
                status: GameStatus::Won,
            }
        );
        assert_eq!(session.status(), GameStatus::Won);
        assert!(session.row_feedback(1).is_perfect());

        let before = snapshot(&session);
        assert!(!session.letter('a'));
        assert!(!session.delete());
        assert!(session.begin_submit().is_none());
        assert_eq!(snapshot(&session), before);
    }

    #[test]
    fn six_misses_lose() {
        let mut session = Session::with_target("crane").unwrap();
        for word in ["slate", "cloud", "pious", "dumpy", "light"] {
            assert!(matches!(
                guess(&mut session, word),
                SubmitOutcome::Scored {
                    status: GameStatus::Playing,
                    ..
                }
            ));
        }
        assert!(matches!(
            guess(&mut session, "fjord"),
            SubmitOutcome::Scored {
                status: GameStatus::Lost,
                ..
            }
        ));
        assert_eq!(session.status(), GameStatus::Lost);
        assert_eq!(session.cursor(), Cursor { row: MAX_ATTEMPTS, col: 0 });

        let before = snapshot(&session);
        assert_eq!(guess(&mut session, "gawky"), SubmitOutcome::Ignored);
        assert_eq!(snapshot(&session), before);
    }

    #[test]
    fn busy_session_ignores_input() {
        let mut session = Session::with_target("crane").unwrap();
        type_word(&mut session, "trace");
        let pending = session.begin_submit().unwrap();
        assert!(session.is_busy());
        assert!(!session.delete());
        assert!(session.begin_submit().is_none());
        session.complete_submit(pending, true);
        assert!(!session.is_busy());
    }

    #[test]
    fn reset_with_bad_word_preserves_state() {
        let mut session = Session::with_target("crane").unwrap();
        guess(&mut session, "trace");
        type_word(&mut session, "sl");
        let before = snapshot(&session);

        assert_eq!(session.reset("toolong"), Err(WordError::InvalidLength(7)));
        assert_eq!(session.reset("abc"), Err(WordError::InvalidLength(3)));
        assert_eq!(snapshot(&session), before);
    }

    #[test]
    fn reset_clears_everything() {
        let mut session = Session::with_target("crane").unwrap();
        guess(&mut session, "crane");
        assert_eq!(session.status(), GameStatus::Won);

        session.reset("slate").unwrap();
        assert_eq!(session.status(), GameStatus::Playing);
        assert_eq!(session.cursor(), Cursor::default());
        assert!(session.history().is_empty());
        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.target(), Some(&Word::new("SLATE").unwrap()));
    }

    #[test]
    fn validation_after_reset_is_discarded() {
        let mut session = Session::with_target("crane").unwrap();
        type_word(&mut session, "trace");
        let pending = session.begin_submit().unwrap();

        let reset = session.begin_reset();
        assert_eq!(session.complete_submit(pending, true), SubmitOutcome::Stale);
        assert!(session.history().is_empty());

        let outcome = session.complete_reset(reset, Ok("slate".into())).unwrap();
        assert_eq!(outcome, ResetOutcome::Started);
        assert_eq!(session.target().map(Word::text), Some("SLATE"));
    }

    #[test]
    fn superseded_fetch_is_discarded() {
        let mut session = Session::with_target("crane").unwrap();
        let first = session.begin_reset();
        session.reset("slate").unwrap();

        let outcome = session.complete_reset(first, Ok("cloud".into())).unwrap();
        assert_eq!(outcome, ResetOutcome::Stale);
        assert_eq!(session.target().map(Word::text), Some("SLATE"));
        assert!(!session.is_busy());
    }

    #[test]
    fn padded_target_is_rejected() {
        let mut session = Session::with_target("crane").unwrap();
        guess(&mut session, "trace");
        let before = snapshot(&session);

        assert_eq!(session.reset(" slate"), Err(WordError::InvalidLength(6)));
        assert_eq!(session.reset(" slate\n"), Err(WordError::InvalidLength(7)));
        assert_eq!(snapshot(&session), before);

        let pending = session.begin_reset();
        let err = session
            .complete_reset(pending, Ok("crane\n".into()))
            .unwrap_err();
        assert!(matches!(
            err,
            SessionError::InvalidTarget(WordError::InvalidLength(6))
        ));

        let pending = session.begin_reset();
        let err = session
            .complete_reset(pending, Ok("  llama ".into()))
            .unwrap_err();
        assert!(matches!(err, SessionError::InvalidTarget(_)));
        assert_eq!(snapshot(&session), before);
        assert!(!session.is_busy());
    }

    #[test]
    fn failed_fetch_keeps_previous_game() {
        let mut session = Session::with_target("crane").unwrap();
        guess(&mut session, "trace");
        let before = snapshot(&session);

        let pending = session.begin_reset();
        let err = session
            .complete_reset(pending, Err(ServiceError::MissingWord))
            .unwrap_err();
        assert!(matches!(err, SessionError::Source(_)));
        assert_eq!(snapshot(&session), before);

        let pending = session.begin_reset();
        let err = session
            .complete_reset(pending, Ok("toolong".into()))
            .unwrap_err();
        assert!(matches!(err, SessionError::InvalidTarget(_)));
        assert_eq!(snapshot(&session), before);
        assert!(session.letter('s'));
    }

    #[test]
    fn share_text_lists_rows() {
        let mut session = Session::with_target("crane").unwrap();
        assert!(session.share_text().is_none());
        guess(&mut session, "trace");
        guess(&mut session, "crane");
        assert_eq!(
            session.share_text().unwrap(),
            "Wordle 2/6\n\n⬜🟩🟩🟨🟩\n🟩🟩🟩🟩🟩"
        );
    }

    #[test]
    fn keyboard_tracks_history() {
        let mut session = Session::with_target("crane").unwrap();
        assert!(session.keyboard().is_empty());
        guess(&mut session, "trace");
        let keys = session.keyboard();
        assert_eq!(keys.get('C'), Present);
        assert_eq!(keys.get('T'), Absent);
    }

    #[tokio::test]
    async fn submit_with_validator() {
        let mut session = Session::with_target("crane").unwrap();
        let dictionary = Dictionary(WORDS);

        assert_eq!(session.submit_with(&dictionary).await, SubmitOutcome::Ignored);

        type_word(&mut session, "crane");
        let outcome = session.submit_with(&dictionary).await;
        assert!(matches!(
            outcome,
            SubmitOutcome::Scored {
                status: GameStatus::Won,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn new_game_from_source() {
        let mut session = Session::new();
        let outcome = session.new_game(&FixedWord("llama")).await.unwrap();
        assert_eq!(outcome, ResetOutcome::Started);
        assert_eq!(session.target().map(Word::text), Some("LLAMA"));

        let err = session.new_game(&FailingSource).await.unwrap_err();
        assert!(matches!(err, SessionError::Source(ServiceError::MissingWord)));
        assert_eq!(session.target().map(Word::text), Some("LLAMA"));
        assert!(!session.is_busy());
    }
}
