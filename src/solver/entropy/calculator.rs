//! Shannon entropy over feedback partitions
//!
//! Given a guess and the current candidates, the candidates split into groups by
//! the feedback the guess would receive if each were the target. The entropy of
//! that split is the expected information gain of the guess.

use super::cache::ScoreCache;
use crate::core::{Feedback, Word, score};
use crate::error::SolverError;
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Calculate Shannon entropy for a guess against candidates
///
/// # Errors
/// Returns `SolverError::LengthMismatch` if any candidate differs in length from
/// the guess.
///
/// # Examples
/// ```
/// use wordle_deduce::core::Word;
/// use wordle_deduce::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("slate").unwrap();
/// let candidates = vec![Word::new("slate").unwrap(), Word::new("fuzzy").unwrap()];
///
/// let entropy = calculate_entropy(&guess, &candidates).unwrap();
/// assert!((entropy - 1.0).abs() < 1e-9);
/// ```
pub fn calculate_entropy(guess: &Word, candidates: &[Word]) -> Result<f64, SolverError> {
    if candidates.is_empty() {
        return Ok(0.0);
    }

    let counts = group_by_feedback(guess, candidates)?;
    Ok(shannon_entropy(&counts))
}

/// Group candidates by the feedback they give the guess
fn group_by_feedback(
    guess: &Word,
    candidates: &[Word],
) -> Result<FxHashMap<Feedback, usize>, SolverError> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let feedback = score(candidate, guess)?;
        *counts.entry(feedback).or_insert(0) += 1;
    }

    Ok(counts)
}

/// Group candidates by feedback, reading scores through the game's cache
///
/// Scores missing from the cache are computed and returned alongside the
/// partition so the caller can merge them in once a parallel sweep finishes.
pub(super) fn partition_cached(
    guess: &Word,
    candidates: &[Word],
    cache: &ScoreCache,
) -> Result<(FxHashMap<Feedback, usize>, Vec<(Word, Feedback)>), SolverError> {
    let mut counts = FxHashMap::default();
    let mut fresh = Vec::new();

    for candidate in candidates {
        let feedback = if let Some(cached) = cache.get(candidate, guess) {
            cached.clone()
        } else {
            let computed = score(candidate, guess)?;
            fresh.push((candidate.clone(), computed.clone()));
            computed
        };
        *counts.entry(feedback).or_insert(0) += 1;
    }

    Ok((counts, fresh))
}

/// Calculate Shannon entropy from a partition-size distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for a certain outcome (one partition)
/// - Maximized for a uniform distribution
/// - Always in range [0, log₂(n)] for n partitions
#[must_use]
pub fn shannon_entropy<K, S>(counts: &std::collections::HashMap<K, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate entropy, expected remaining candidates and worst-case partition
///
/// # Errors
/// Returns `SolverError::LengthMismatch` if any candidate differs in length from
/// the guess.
pub fn calculate_metrics(guess: &Word, candidates: &[Word]) -> Result<GuessMetrics, SolverError> {
    if candidates.is_empty() {
        return Ok(GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        });
    }

    let counts = group_by_feedback(guess, candidates)?;
    let total = candidates.len() as f64;

    let expected_remaining = counts
        .values()
        .map(|&size| size as f64 * size as f64 / total)
        .sum();

    Ok(GuessMetrics {
        entropy: shannon_entropy(&counts),
        expected_remaining,
        max_partition: counts.values().copied().max().unwrap_or(0),
    })
}
