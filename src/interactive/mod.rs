//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Completion, Message, MessageStyle, Statistics, run_tui};
pub use rendering::ui;
