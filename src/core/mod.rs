//! Core domain types
//!
//! Words, feedback marks and the scoring function. Everything here is pure and
//! shared by the solver and by the drivers that play games against it.

mod feedback;
mod word;

pub use feedback::{Feedback, Mark, score};
pub use word::{Word, WordError};
