//! Game session: board, cursor and the state machine that drives them

mod board;
mod session;

pub use board::{Board, Cursor};
pub use session::{
    Activity, GameStatus, PendingGuess, PendingReset, ResetOutcome, Session, SessionError,
    SubmitOutcome,
};
