//! Command implementations
//!
//! Drivers that play games against the solver. They own target selection and
//! reporting; every decision comes from the solver.

pub mod analyze;
pub mod benchmark;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use solve::{GuessStep, SolveResult, play_game, solve_word};
