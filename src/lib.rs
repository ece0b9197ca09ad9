//! Wordle deduction engine
//!
//! Plays word-guessing puzzles against an unknown target from a fixed
//! dictionary: duplicate-aware feedback scoring, constraint filtering of the
//! candidate set, and entropy-maximizing guess selection with letter-frequency
//! pruning of the guess pool.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_deduce::core::{score, Word};
//! use wordle_deduce::solver::{Solver, SolverTransition};
//!
//! let dictionary: Vec<Word> = ["crane", "plots", "abide", "slate", "grate"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//! let target = Word::new("grate").unwrap();
//!
//! let mut solver = Solver::new(dictionary).unwrap();
//! let mut turn = 0;
//! loop {
//!     let guess = solver.guess(turn).unwrap();
//!     let feedback = score(&target, &guess).unwrap();
//!     match solver.update(&guess, &feedback).unwrap() {
//!         SolverTransition::Continue => turn += 1,
//!         SolverTransition::Solved => break,
//!         SolverTransition::Exhausted => panic!("ran out of turns"),
//!     }
//! }
//! ```

// Core domain types
pub mod core;

// Engine errors
pub mod error;

// Deduction engine
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::SolverError;
