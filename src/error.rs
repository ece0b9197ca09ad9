//! Errors raised by the deduction engine
//!
//! Every operation in the engine is pure computation over in-memory data, so
//! none of these are transient: they signal a caller bug or bad input and are
//! meant to be propagated with `?`.

use thiserror::Error;

/// Errors from scoring, filtering and the solver state machine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Two words (or a word and its feedback) disagree in length
    #[error("length mismatch: expected {expected} letters, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// Dictionary is empty or mixes word lengths
    #[error("invalid dictionary: {0}")]
    InvalidDictionary(String),

    /// Tuning values the solver cannot play with
    #[error("invalid solver config: {0}")]
    InvalidConfig(String),

    /// A solver method was called in the wrong state
    #[error("invalid solver state: expected {expected}, found {found}")]
    InvalidState {
        expected: &'static str,
        found: String,
    },

    /// Feedback so far rules out every dictionary word
    #[error("no candidates remain; the feedback is inconsistent with the dictionary")]
    NoCandidates,
}
