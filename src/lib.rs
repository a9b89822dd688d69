//! Wordle Clone
//!
//! A terminal Wordle game that plays against the word-of-the-day and
//! dictionary web services, or offline against embedded word lists.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_clone::core::{Feedback, Word};
//! use wordle_clone::game::{GameStatus, Session, SubmitOutcome};
//!
//! // Score a guess directly
//! let guess = Word::new("trace").unwrap();
//! let target = Word::new("crane").unwrap();
//! let feedback = Feedback::calculate(&guess, &target);
//! assert_eq!(feedback.to_emoji(), "⬜🟩🟩🟨🟩");
//!
//! // Or drive a full session
//! let mut session = Session::with_target("crane").unwrap();
//! for ch in "crane".chars() {
//!     session.letter(ch);
//! }
//! let pending = session.begin_submit().unwrap();
//! let outcome = session.complete_submit(pending, true);
//! assert!(matches!(outcome, SubmitOutcome::Scored { status: GameStatus::Won, .. }));
//! ```

// Core domain types
pub mod core;

// Session state machine
pub mod game;

// Word-of-the-day and dictionary services
pub mod remote;

// Runtime settings
pub mod config;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
