//! Word analysis command
//!
//! Reports how much information a single guess yields against a word list.

use crate::core::Word;
use crate::solver::entropy::calculate_metrics;
use anyhow::{Context, Result, bail};

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: Word,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
    pub total_candidates: usize,
    pub is_candidate: bool,
}

/// Analyze the entropy of `word` against `candidates`
///
/// The word does not have to be a candidate itself, but it must have the same
/// length as the candidates.
///
/// # Errors
///
/// Returns an error if the word is invalid or its length does not match.
pub fn analyze_word(word: &str, candidates: &[Word]) -> Result<AnalysisResult> {
    let word = Word::new(word).with_context(|| format!("invalid word '{word}'"))?;
    if candidates.is_empty() {
        bail!("no candidates to analyze against");
    }

    let metrics = calculate_metrics(&word, candidates)
        .with_context(|| format!("cannot score '{word}' against this word list"))?;

    let expected_reduction = metrics.entropy.exp2();

    Ok(AnalysisResult {
        is_candidate: candidates.contains(&word),
        word,
        entropy: metrics.entropy,
        expected_reduction,
        expected_remaining: metrics.expected_remaining,
        max_partition: metrics.max_partition,
        total_candidates: candidates.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::DEFAULT_WORDS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn analyze_valid_word() {
        let words = words_from_slice(&DEFAULT_WORDS[..100]);
        let result = analyze_word("crane", &words).unwrap();

        assert_eq!(result.word.text(), "crane");
        assert!(result.is_candidate);
        assert!(result.entropy > 0.0);
        assert!(result.expected_reduction >= 1.0);
        assert_eq!(result.total_candidates, 100);
    }

    #[test]
    fn analyze_word_outside_list() {
        let words = words_from_slice(&DEFAULT_WORDS[..100]);
        let result = analyze_word("zzzzz", &words).unwrap();

        // No z anywhere in these words: one partition, no information
        assert!(!result.is_candidate);
        assert_eq!(result.max_partition, 100);
        assert!(result.entropy.abs() < 1e-9);
    }

    #[test]
    fn analyze_rejects_bad_input() {
        let words = words_from_slice(&DEFAULT_WORDS[..100]);
        assert!(analyze_word("cr4ne", &words).is_err());
        assert!(analyze_word("cranes", &words).is_err());
        assert!(analyze_word("crane", &[]).is_err());
    }

    #[test]
    fn entropy_properties() {
        let words = words_from_slice(&DEFAULT_WORDS[..100]);
        let result = analyze_word("slate", &words).unwrap();

        assert!(result.entropy <= (words.len() as f64).log2());
        assert!(result.expected_remaining >= 1.0);
        assert!(result.expected_remaining <= words.len() as f64);
        assert!(result.max_partition <= words.len());
    }
}
