//! Deduction engine
//!
//! Constraint filtering, guess-pool pruning, entropy selection and the per-game
//! state machine that ties them together.

mod config;
mod constraint;
mod engine;
pub mod entropy;
mod pruner;

pub use config::{
    DEFAULT_MAX_TURNS, DEFAULT_OPENER, DEFAULT_PRUNE_THRESHOLD, DEFAULT_SHORTLIST_SIZE,
    DEFAULT_TIE_BONUS, SolverConfig,
};
pub use constraint::{CandidateSet, Constraint};
pub use engine::{Solver, SolverState, SolverTransition};
pub use pruner::{LetterFrequencyTable, guess_pool, shortlist};
