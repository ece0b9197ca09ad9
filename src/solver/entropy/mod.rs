//! Entropy-based guess selection
//!
//! Implements Shannon entropy over feedback partitions, the per-game score
//! cache, and the selector that picks the most informative guess.

mod cache;
mod calculator;
mod selector;

pub use cache::ScoreCache;
pub use calculator::{GuessMetrics, calculate_entropy, calculate_metrics, shannon_entropy};
pub use selector::{ScoredGuess, select_guess};
