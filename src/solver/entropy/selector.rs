//! Entropy-maximizing guess selection
//!
//! Every pool word is scored against every candidate on rayon's pool. Workers
//! only read the game's cache; fresh scores come back with each result and are
//! merged afterwards, so the outcome matches a sequential sweep.

use super::cache::ScoreCache;
use super::calculator::{partition_cached, shannon_entropy};
use crate::core::Word;
use crate::error::SolverError;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// The chosen guess and how it scored
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredGuess {
    pub word: Word,
    /// Shannon entropy in bits, before any bonus
    pub entropy: f64,
    /// Whether the guess could itself be the answer
    pub is_candidate: bool,
}

impl ScoredGuess {
    /// Entropy with the candidate bonus applied
    #[must_use]
    pub fn adjusted(&self, tie_bonus: f64) -> f64 {
        if self.is_candidate {
            self.entropy + tie_bonus
        } else {
            self.entropy
        }
    }
}

/// Select the pool word with the highest entropy over `candidates`
///
/// Pool words that are themselves candidates get `tie_bonus` added. On an exact
/// tie the word that comes first in the pool wins.
///
/// # Errors
/// - `SolverError::NoCandidates` if the pool or the candidate list is empty
/// - `SolverError::LengthMismatch` if word lengths disagree
///
/// # Examples
/// ```
/// use wordle_deduce::core::Word;
/// use wordle_deduce::solver::entropy::{ScoreCache, select_guess};
///
/// let pool: Vec<Word> = ["aaaaa", "aeros"].iter().map(|w| Word::new(w).unwrap()).collect();
/// let candidates: Vec<Word> = ["slate", "irate", "crate", "grate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let mut cache = ScoreCache::default();
/// let best = select_guess(&pool, &candidates, &mut cache, 0.01).unwrap();
/// assert_eq!(best.word.text(), "aeros");
/// ```
pub fn select_guess(
    pool: &[Word],
    candidates: &[Word],
    cache: &mut ScoreCache,
    tie_bonus: f64,
) -> Result<ScoredGuess, SolverError> {
    if pool.is_empty() || candidates.is_empty() {
        return Err(SolverError::NoCandidates);
    }

    let members: FxHashSet<&Word> = candidates.iter().collect();
    let shared: &ScoreCache = cache;

    let evaluated = pool
        .par_iter()
        .map(|guess| {
            let (counts, fresh) = partition_cached(guess, candidates, shared)?;
            let scored = ScoredGuess {
                word: guess.clone(),
                entropy: shannon_entropy(&counts),
                is_candidate: members.contains(guess),
            };
            Ok((scored, fresh))
        })
        .collect::<Result<Vec<_>, SolverError>>()?;

    let mut best: Option<ScoredGuess> = None;
    for (scored, fresh) in evaluated {
        for (target, feedback) in fresh {
            cache.insert(target, scored.word.clone(), feedback);
        }

        let better = best
            .as_ref()
            .is_none_or(|current| scored.adjusted(tie_bonus) > current.adjusted(tie_bonus));
        if better {
            best = Some(scored);
        }
    }

    best.ok_or(SolverError::NoCandidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| Word::new(s).unwrap()).collect()
    }

    #[test]
    fn selects_highest_entropy() {
        let pool = words(&["aaaaa", "aeros"]);
        let candidates = words(&["slate", "irate", "crate", "grate"]);
        let mut cache = ScoreCache::default();

        let best = select_guess(&pool, &candidates, &mut cache, 0.01).unwrap();
        assert_eq!(best.word.text(), "aeros");
        assert!(best.entropy > 0.5);
        assert!(!best.is_candidate);
    }

    #[test]
    fn bonus_prefers_candidates_on_equal_entropy() {
        // Against {fuzzy, slate}, both pool words split the pair evenly
        let pool = words(&["fuzzz", "slate"]);
        let candidates = words(&["fuzzy", "slate"]);
        let mut cache = ScoreCache::default();

        let best = select_guess(&pool, &candidates, &mut cache, 0.01).unwrap();
        assert_eq!(best.word.text(), "slate");
        assert!(best.is_candidate);

        // Without a bonus the first pool word wins the tie
        let best = select_guess(&pool, &candidates, &mut cache, 0.0).unwrap();
        assert_eq!(best.word.text(), "fuzzz");
    }

    #[test]
    fn ties_go_to_first_in_pool() {
        let pool = words(&["aaaaa", "bbbbb"]);
        let candidates = words(&["ccccc"]);
        let mut cache = ScoreCache::default();

        let best = select_guess(&pool, &candidates, &mut cache, 0.01).unwrap();
        assert_eq!(best.word.text(), "aaaaa");
        assert!(best.entropy.abs() < 1e-9);
    }

    #[test]
    fn sweep_fills_cache() {
        let pool = words(&["crane", "slate"]);
        let candidates = words(&["irate", "crate", "grate"]);
        let mut cache = ScoreCache::default();

        select_guess(&pool, &candidates, &mut cache, 0.01).unwrap();
        assert_eq!(cache.len(), pool.len() * candidates.len());

        let crane = Word::new("crane").unwrap();
        let grate = Word::new("grate").unwrap();
        assert_eq!(cache.get(&grate, &crane).unwrap().to_string(), "-GG-G");

        // A second sweep only reads
        select_guess(&pool, &candidates, &mut cache, 0.01).unwrap();
        assert_eq!(cache.len(), 6);
    }

    #[test]
    fn empty_inputs_are_rejected() {
        let mut cache = ScoreCache::default();
        let some = words(&["crane"]);
        assert_eq!(
            select_guess(&[], &some, &mut cache, 0.01),
            Err(SolverError::NoCandidates)
        );
        assert_eq!(
            select_guess(&some, &[], &mut cache, 0.01),
            Err(SolverError::NoCandidates)
        );
    }
}
