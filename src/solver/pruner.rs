//! Letter-frequency pruning of the guess pool
//!
//! Entropy over the whole dictionary costs `|dictionary| × |candidates|` scores.
//! While the candidate set is large, a shortlist of dictionary words that cover
//! the candidates' most common letters gets nearly the same best guess for a
//! fraction of the work.

use crate::core::Word;
use rustc_hash::FxHashMap;

/// Letter → number of words containing that letter at least once
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterFrequencyTable {
    counts: FxHashMap<u8, usize>,
}

impl LetterFrequencyTable {
    /// Build the table over `words`, counting each letter once per word
    #[must_use]
    pub fn build(words: &[Word]) -> Self {
        let mut counts = FxHashMap::default();
        for word in words {
            for letter in word.distinct_letters() {
                *counts.entry(letter).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Number of words that contain `letter`
    #[must_use]
    pub fn get(&self, letter: u8) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Coverage score of a word: table values summed over its distinct letters
    #[must_use]
    pub fn coverage(&self, word: &Word) -> usize {
        word.distinct_letters()
            .into_iter()
            .map(|letter| self.get(letter))
            .sum()
    }
}

/// The `size` dictionary words with the best letter coverage of `candidates`
///
/// Sorting is stable, so equal scores keep dictionary order.
///
/// # Examples
/// ```
/// use wordle_deduce::core::Word;
/// use wordle_deduce::solver::shortlist;
///
/// let dictionary: Vec<Word> = ["fuzzy", "crane", "slate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let candidates = vec![Word::new("crate").unwrap(), Word::new("trace").unwrap()];
///
/// let pool = shortlist(&dictionary, &candidates, 2);
/// assert_eq!(pool, vec![Word::new("crane").unwrap(), Word::new("slate").unwrap()]);
/// ```
#[must_use]
pub fn shortlist(dictionary: &[Word], candidates: &[Word], size: usize) -> Vec<Word> {
    let table = LetterFrequencyTable::build(candidates);

    let mut scored: Vec<(usize, &Word)> = dictionary
        .iter()
        .map(|word| (table.coverage(word), word))
        .collect();
    scored.sort_by(|(a, _), (b, _)| b.cmp(a));

    scored
        .into_iter()
        .take(size)
        .map(|(_, word)| word.clone())
        .collect()
}

/// Choose the guess pool for a turn
///
/// Above `threshold` candidates the pool is the coverage shortlist; at or below
/// it the whole dictionary is searched.
#[must_use]
pub fn guess_pool(
    dictionary: &[Word],
    candidates: &[Word],
    threshold: usize,
    size: usize,
) -> Vec<Word> {
    if candidates.len() > threshold {
        shortlist(dictionary, candidates, size)
    } else {
        dictionary.to_vec()
    }
}
