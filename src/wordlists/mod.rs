//! Dictionaries for the solver
//!
//! A built-in list compiled into the binary, plus loading from text files.

mod embedded;
pub mod loader;

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};
