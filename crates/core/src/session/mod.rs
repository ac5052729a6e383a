//! Session state for conversion attempts.
//!
//! The history is an explicit state object owned by the top-level caller
//! (the server holds one per process); nothing here is ambient or
//! persisted. Attempts are prepended as they are created and never
//! deleted within a session.

mod history;
mod types;

pub use history::SessionHistory;
pub use types::{AttemptStatus, ConversionAttempt, SessionError};
