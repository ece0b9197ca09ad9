//! Solver tuning
//!
//! Passed explicitly to each solver; nothing here is global.

use crate::core::Word;
use crate::error::SolverError;

/// Fixed first guess for five-letter dictionaries
pub const DEFAULT_OPENER: &str = "crane";

/// Turn budget of the standard game
pub const DEFAULT_MAX_TURNS: usize = 6;

/// Candidate count above which the guess pool is pruned
pub const DEFAULT_PRUNE_THRESHOLD: usize = 20;

/// Guess pool size when pruning
pub const DEFAULT_SHORTLIST_SIZE: usize = 400;

/// Entropy bonus for guesses that could be the answer
pub const DEFAULT_TIE_BONUS: f64 = 0.01;

/// Configuration for one solver
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Number of guesses before the game is lost
    pub max_turns: usize,
    /// Prune the guess pool while more than this many candidates remain
    pub prune_threshold: usize,
    /// Guess pool size when pruning
    pub shortlist_size: usize,
    /// Added to a guess's entropy when it is still a candidate
    pub tie_bonus: f64,
    /// First guess; `None` computes it with the regular selector
    pub opener: Option<Word>,
}

impl SolverConfig {
    /// Defaults for dictionaries of `word_length` letters
    ///
    /// The built-in opener is only meaningful for five-letter words; other
    /// lengths compute their first guess.
    #[must_use]
    pub fn for_length(word_length: usize) -> Self {
        let opener = Word::new(DEFAULT_OPENER)
            .ok()
            .filter(|w| w.len() == word_length);

        Self {
            opener,
            ..Self::default()
        }
    }

    /// Replace the opener
    #[must_use]
    pub fn with_opener(mut self, opener: Option<Word>) -> Self {
        self.opener = opener;
        self
    }

    /// Check the values against a dictionary of `word_length` letters
    ///
    /// # Errors
    /// - `SolverError::InvalidConfig` if `max_turns` or `shortlist_size` is zero,
    ///   or `tie_bonus` is negative or not finite
    /// - `SolverError::LengthMismatch` if the opener has the wrong length
    pub fn validate(&self, word_length: usize) -> Result<(), SolverError> {
        if self.max_turns == 0 {
            return Err(SolverError::InvalidConfig(
                "max_turns must allow at least one guess".to_string(),
            ));
        }
        if self.shortlist_size == 0 {
            return Err(SolverError::InvalidConfig(
                "shortlist_size must be at least 1".to_string(),
            ));
        }
        if !self.tie_bonus.is_finite() || self.tie_bonus < 0.0 {
            return Err(SolverError::InvalidConfig(format!(
                "tie_bonus must be a non-negative number, got {}",
                self.tie_bonus
            )));
        }
        if let Some(opener) = &self.opener
            && opener.len() != word_length
        {
            return Err(SolverError::LengthMismatch {
                expected: word_length,
                found: opener.len(),
            });
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_turns: DEFAULT_MAX_TURNS,
            prune_threshold: DEFAULT_PRUNE_THRESHOLD,
            shortlist_size: DEFAULT_SHORTLIST_SIZE,
            tie_bonus: DEFAULT_TIE_BONUS,
            opener: Word::new(DEFAULT_OPENER).ok(),
        }
    }
}
