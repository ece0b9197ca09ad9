//! Constraint derivation and candidate filtering
//!
//! A `Constraint` is derived from one guess and its feedback and captures
//! everything that pair says about the target: letter count bounds, letters
//! pinned to positions, and letters ruled out of positions.

use crate::core::{Feedback, Mark, Word};
use crate::error::SolverError;
use rustc_hash::{FxHashMap, FxHashSet};

/// What a single guess/feedback pair says about the target
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraint {
    /// Letter must occur at least this many times
    min_counts: FxHashMap<u8, usize>,
    /// Letter may occur at most this many times; unset means unbounded
    max_counts: FxHashMap<u8, usize>,
    /// Position must hold this letter
    required: Vec<Option<u8>>,
    /// Position must not hold any of these letters
    forbidden: Vec<FxHashSet<u8>>,
}

impl Constraint {
    /// Derive the constraint implied by `feedback` for `guess`
    ///
    /// For each letter of the guess, the number of non-`Absent` marks it earned is
    /// a lower bound on its count in the target. If any copy was marked `Absent`
    /// the same number is also the upper bound, which caps duplicates without
    /// excluding a letter that scored elsewhere.
    ///
    /// # Errors
    /// Returns `SolverError::LengthMismatch` if the feedback is not aligned with
    /// the guess.
    ///
    /// # Examples
    /// ```
    /// use wordle_deduce::core::{score, Word};
    /// use wordle_deduce::solver::Constraint;
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let target = Word::new("abide").unwrap();
    /// let feedback = score(&target, &guess).unwrap();
    ///
    /// let constraint = Constraint::derive(&guess, &feedback).unwrap();
    /// assert!(constraint.allows(&target));
    /// assert_eq!(constraint.max_count(b'e'), Some(1));
    /// ```
    pub fn derive(guess: &Word, feedback: &Feedback) -> Result<Self, SolverError> {
        if guess.len() != feedback.len() {
            return Err(SolverError::LengthMismatch {
                expected: guess.len(),
                found: feedback.len(),
            });
        }

        let len = guess.len();
        let mut required = vec![None; len];
        let mut forbidden = vec![FxHashSet::default(); len];
        let mut credited: FxHashMap<u8, usize> = FxHashMap::default();
        let mut capped: FxHashSet<u8> = FxHashSet::default();

        for (i, (&letter, &mark)) in guess.chars().iter().zip(feedback.marks()).enumerate() {
            match mark {
                Mark::Correct => {
                    required[i] = Some(letter);
                    *credited.entry(letter).or_insert(0) += 1;
                }
                Mark::Present => {
                    forbidden[i].insert(letter);
                    *credited.entry(letter).or_insert(0) += 1;
                }
                Mark::Absent => {
                    // Had the target this letter here, it would have scored Correct
                    forbidden[i].insert(letter);
                    capped.insert(letter);
                }
            }
        }

        let max_counts = capped
            .into_iter()
            .map(|letter| (letter, credited.get(&letter).copied().unwrap_or(0)))
            .collect();

        Ok(Self {
            min_counts: credited,
            max_counts,
            required,
            forbidden,
        })
    }

    /// Minimum number of times `letter` must occur (0 when unconstrained)
    #[must_use]
    pub fn min_count(&self, letter: u8) -> usize {
        self.min_counts.get(&letter).copied().unwrap_or(0)
    }

    /// Maximum number of times `letter` may occur, if bounded
    #[must_use]
    pub fn max_count(&self, letter: u8) -> Option<usize> {
        self.max_counts.get(&letter).copied()
    }

    /// Letter required at `position`, if any
    #[must_use]
    pub fn required_at(&self, position: usize) -> Option<u8> {
        self.required.get(position).copied().flatten()
    }

    /// Whether `letter` is ruled out of `position`
    #[must_use]
    pub fn is_forbidden_at(&self, position: usize, letter: u8) -> bool {
        self.forbidden
            .get(position)
            .is_some_and(|set| set.contains(&letter))
    }

    /// Check whether `word` satisfies this constraint
    ///
    /// Words of a different length never do.
    #[must_use]
    pub fn allows(&self, word: &Word) -> bool {
        if word.len() != self.required.len() {
            return false;
        }

        for (i, &letter) in word.chars().iter().enumerate() {
            if self.required[i].is_some_and(|r| r != letter) {
                return false;
            }
            if self.forbidden[i].contains(&letter) {
                return false;
            }
        }

        let counts = word.char_counts();
        let count = |letter: &u8| counts.get(letter).copied().unwrap_or(0);

        self.min_counts.iter().all(|(l, &min)| count(l) >= min)
            && self.max_counts.iter().all(|(l, &max)| count(l) <= max)
    }
}

/// Still-possible answers for one game
///
/// Starts as a copy of the dictionary and only ever shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    words: Vec<Word>,
}

impl CandidateSet {
    /// Start a game's candidate set from the dictionary
    #[must_use]
    pub fn new(dictionary: &[Word]) -> Self {
        Self {
            words: dictionary.to_vec(),
        }
    }

    /// Apply a constraint in place, discarding every word it rules out
    ///
    /// Returns the number of words removed.
    pub fn apply(&mut self, constraint: &Constraint) -> usize {
        let before = self.words.len();
        self.words.retain(|word| constraint.allows(word));
        before - self.words.len()
    }

    /// Derive the constraint for `guess`/`feedback` and apply it
    ///
    /// # Errors
    /// Returns `SolverError::LengthMismatch` if the feedback is not aligned with
    /// the guess.
    pub fn narrow(&mut self, guess: &Word, feedback: &Feedback) -> Result<usize, SolverError> {
        let constraint = Constraint::derive(guess, feedback)?;
        Ok(self.apply(&constraint))
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score;

    fn w(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| w(s)).collect()
    }

    const POOL: &[&str] = &[
        "crane", "slate", "irate", "crate", "grate", "trace", "react", "caret", "apple", "plpel",
        "spoon", "nopse", "abide", "eerie", "speed", "erase", "robot", "floor", "llama", "lolly",
        "hello", "allee", "label", "belle", "sheep", "geese", "eagle", "elder", "plots", "spool",
    ];

    #[test]
    fn derive_records_positions() {
        let guess = w("crane");
        let feedback = score(&w("trace"), &guess).unwrap(); // Y G G - G
        let constraint = Constraint::derive(&guess, &feedback).unwrap();

        assert_eq!(constraint.required_at(1), Some(b'r'));
        assert_eq!(constraint.required_at(2), Some(b'a'));
        assert_eq!(constraint.required_at(4), Some(b'e'));
        assert!(constraint.is_forbidden_at(0, b'c'));
        assert!(constraint.is_forbidden_at(3, b'n'));
        assert_eq!(constraint.min_count(b'c'), 1);
        assert_eq!(constraint.max_count(b'n'), Some(0));
        assert_eq!(constraint.max_count(b'c'), None);
    }

    #[test]
    fn absent_duplicate_caps_instead_of_excluding() {
        // One e of "speed" is credited against "abide", the other is Absent
        let guess = w("speed");
        let feedback = score(&w("abide"), &guess).unwrap();
        let constraint = Constraint::derive(&guess, &feedback).unwrap();

        assert_eq!(constraint.min_count(b'e'), 1);
        assert_eq!(constraint.max_count(b'e'), Some(1));
        assert!(constraint.allows(&w("abide")));
        assert!(!constraint.allows(&w("geese")));
    }

    #[test]
    fn derive_rejects_misaligned_feedback() {
        let feedback = Feedback::parse("GG").unwrap();
        assert!(matches!(
            Constraint::derive(&w("crane"), &feedback),
            Err(SolverError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn filter_matches_rescoring_exactly() {
        let pool = words(POOL);
        for guess in &pool {
            for target in &pool {
                let feedback = score(target, guess).unwrap();
                let constraint = Constraint::derive(guess, &feedback).unwrap();
                for word in &pool {
                    let consistent = score(word, guess).unwrap() == feedback;
                    assert_eq!(
                        constraint.allows(word),
                        consistent,
                        "guess {guess}, target {target}, word {word}"
                    );
                }
            }
        }
    }

    #[test]
    fn apply_is_idempotent_and_sound() {
        let pool = words(POOL);
        let target = w("spoon");
        let guess = w("nopse");
        let feedback = score(&target, &guess).unwrap();
        let constraint = Constraint::derive(&guess, &feedback).unwrap();

        let mut once = CandidateSet::new(&pool);
        once.apply(&constraint);
        let mut twice = once.clone();
        let removed = twice.apply(&constraint);

        assert_eq!(removed, 0);
        assert_eq!(once, twice);
        assert!(once.contains(&target));
        assert!(once.len() < pool.len());
    }

    #[test]
    fn narrow_composes_across_turns() {
        let pool = words(POOL);
        let target = w("grate");
        let mut candidates = CandidateSet::new(&pool);

        let mut previous = candidates.len();
        for guess in ["crane", "irate", "slate"] {
            let guess = w(guess);
            let feedback = score(&target, &guess).unwrap();
            candidates.narrow(&guess, &feedback).unwrap();

            assert!(candidates.len() <= previous);
            assert!(candidates.contains(&target));
            previous = candidates.len();
        }
        assert_eq!(candidates.words(), &[target]);
    }

    #[test]
    fn allows_rejects_other_lengths() {
        let guess = w("crane");
        let feedback = score(&w("slate"), &guess).unwrap();
        let constraint = Constraint::derive(&guess, &feedback).unwrap();
        assert!(!constraint.allows(&w("slates")));
    }
}
