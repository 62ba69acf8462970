// src/quiz/mod.rs
//
// The scoring core: pure, synchronous, no I/O. The HTTP layer in
// `handlers` is the only caller; it owns serialization of these results.

pub mod bank;
pub mod ranking;
pub mod scoring;
pub mod submission;

use std::fmt;

/// Errors surfaced by the scoring core.
///
/// All three are unrecoverable locally: the core never retries or
/// self-heals, the caller decides whether to abort the session or drop
/// the offending update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    /// A lookup used a field string outside the fixed enumeration.
    /// Configuration defect, not user input.
    UnknownField(String),

    /// An answer update named an option text the question does not offer.
    /// Indicates the client and the bank are out of sync; the update must
    /// be rejected without touching stored scores.
    InvalidOption { question_id: i64, text: String },

    /// A submission's end time preceded its start time. Caller bug worth
    /// surfacing, never silently clamped.
    InvalidDuration { seconds: i64 },
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::UnknownField(field) => {
                write!(f, "unknown career field '{}'", field)
            }
            QuizError::InvalidOption { question_id, text } => {
                write!(f, "question {} has no option '{}'", question_id, text)
            }
            QuizError::InvalidDuration { seconds } => {
                write!(f, "negative quiz duration ({}s)", seconds)
            }
        }
    }
}

impl std::error::Error for QuizError {}
