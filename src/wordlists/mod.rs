//! Word lists for offline play
//!
//! Provides embedded word lists compiled into the binary, used when the
//! remote word services are not configured.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
