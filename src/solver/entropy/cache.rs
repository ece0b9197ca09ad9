//! Per-game memo of scores
//!
//! Keyed by the literal `(target, guess)` pair. Entries are never invalidated:
//! a score depends only on the two words.

use crate::core::{Feedback, Word, score};
use crate::error::SolverError;
use rustc_hash::FxHashMap;

/// Memoized `score(target, guess)` results for one game
#[derive(Debug, Clone, Default)]
pub struct ScoreCache {
    // target -> guess -> feedback, so lookups can borrow both words
    scores: FxHashMap<Word, FxHashMap<Word, Feedback>>,
    entries: usize,
}

impl ScoreCache {
    /// Look up a previously computed score
    #[must_use]
    pub fn get(&self, target: &Word, guess: &Word) -> Option<&Feedback> {
        self.scores.get(target)?.get(guess)
    }

    /// Score through the cache, computing and remembering on a miss
    ///
    /// # Errors
    /// Returns `SolverError::LengthMismatch` if the words differ in length.
    pub fn score(&mut self, target: &Word, guess: &Word) -> Result<Feedback, SolverError> {
        if let Some(feedback) = self.get(target, guess) {
            return Ok(feedback.clone());
        }

        let feedback = score(target, guess)?;
        self.insert(target.clone(), guess.clone(), feedback.clone());
        Ok(feedback)
    }

    /// Remember a score computed elsewhere
    pub fn insert(&mut self, target: Word, guess: Word, feedback: Feedback) {
        if self
            .scores
            .entry(target)
            .or_default()
            .insert(guess, feedback)
            .is_none()
        {
            self.entries += 1;
        }
    }

    /// Number of cached pairs
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_populates_cache_once() {
        let target = Word::new("apple").unwrap();
        let guess = Word::new("plpel").unwrap();
        let mut cache = ScoreCache::default();

        let first = cache.score(&target, &guess).unwrap();
        let second = cache.score(&target, &guess).unwrap();

        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&target, &guess), Some(&first));
    }

    #[test]
    fn pairs_are_keyed_by_role() {
        let a = Word::new("apple").unwrap();
        let b = Word::new("plpel").unwrap();
        let mut cache = ScoreCache::default();

        cache.score(&a, &b).unwrap();
        assert!(cache.get(&b, &a).is_none());

        cache.score(&b, &a).unwrap();
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn errors_are_not_cached() {
        let mut cache = ScoreCache::default();
        let result = cache.score(&Word::new("crane").unwrap(), &Word::new("cranes").unwrap());

        assert!(result.is_err());
        assert!(cache.is_empty());
    }
}
