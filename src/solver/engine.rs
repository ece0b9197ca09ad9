//! Per-game solver state machine
//!
//! A `Solver` plays exactly one game. It alternates between handing out a guess
//! and absorbing the feedback for it, and stops once the answer is found or the
//! turn budget runs out.

use super::config::SolverConfig;
use super::constraint::CandidateSet;
use super::entropy::{ScoreCache, select_guess};
use super::pruner::guess_pool;
use crate::core::{Feedback, Word};
use crate::error::SolverError;
use std::fmt;
use std::sync::Arc;

/// Where the solver is in its game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverState {
    /// Ready to produce the guess for `turn` (0-based)
    AwaitingGuess { turn: usize },
    /// `guess` was handed out for `turn` and needs feedback
    AwaitingFeedback { turn: usize, guess: Word },
    /// Answer found after `turns` guesses
    Solved { turns: usize },
    /// Turn budget used up without finding the answer
    Exhausted,
}

impl fmt::Display for SolverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AwaitingGuess { turn } => write!(f, "awaiting guess for turn {turn}"),
            Self::AwaitingFeedback { turn, guess } => {
                write!(f, "awaiting feedback for '{guess}' on turn {turn}")
            }
            Self::Solved { turns } => write!(f, "solved in {turns} guesses"),
            Self::Exhausted => write!(f, "exhausted"),
        }
    }
}

/// Outcome of feeding back one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverTransition {
    /// Ready for the next guess
    Continue,
    /// Feedback was all `Correct`
    Solved,
    /// No turns left
    Exhausted,
}

/// Deduction engine for one game
///
/// The dictionary is shared read-only; the candidate set and score cache belong
/// to this game alone.
///
/// # Examples
/// ```
/// use wordle_deduce::core::{score, Word};
/// use wordle_deduce::solver::{Solver, SolverTransition};
///
/// let dictionary: Vec<Word> = ["crane", "plots", "abide"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let target = Word::new("crane").unwrap();
///
/// let mut solver = Solver::new(dictionary).unwrap();
/// let guess = solver.guess(0).unwrap();
/// assert_eq!(guess, target);
///
/// let feedback = score(&target, &guess).unwrap();
/// assert_eq!(solver.update(&guess, &feedback).unwrap(), SolverTransition::Solved);
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    dictionary: Arc<[Word]>,
    word_length: usize,
    candidates: CandidateSet,
    cache: ScoreCache,
    config: SolverConfig,
    state: SolverState,
}

impl Solver {
    /// Create a solver with the default configuration for the dictionary's word length
    ///
    /// # Errors
    /// Returns `SolverError::InvalidDictionary` if the dictionary is empty or its
    /// words differ in length.
    pub fn new(dictionary: impl Into<Arc<[Word]>>) -> Result<Self, SolverError> {
        let dictionary = dictionary.into();
        let word_length = validate_dictionary(&dictionary)?;
        Self::with_config(dictionary, SolverConfig::for_length(word_length))
    }

    /// Create a solver with an explicit configuration
    ///
    /// # Errors
    /// - `SolverError::InvalidDictionary` if the dictionary is empty or mixes lengths
    /// - `SolverError::InvalidConfig` if the turn budget or shortlist size is zero
    /// - `SolverError::LengthMismatch` if the configured opener has the wrong length
    pub fn with_config(
        dictionary: impl Into<Arc<[Word]>>,
        config: SolverConfig,
    ) -> Result<Self, SolverError> {
        let dictionary = dictionary.into();
        let word_length = validate_dictionary(&dictionary)?;

        config.validate(word_length)?;

        Ok(Self {
            candidates: CandidateSet::new(&dictionary),
            dictionary,
            word_length,
            cache: ScoreCache::default(),
            config,
            state: SolverState::AwaitingGuess { turn: 0 },
        })
    }

    /// Produce the guess for `turn`
    ///
    /// Turn 0 returns the configured opener without any search. Afterwards a
    /// single remaining candidate is returned directly; otherwise the pruned (or
    /// full) dictionary is searched for the highest-entropy guess.
    ///
    /// # Errors
    /// - `SolverError::InvalidState` unless awaiting the guess for exactly `turn`
    /// - `SolverError::NoCandidates` if earlier feedback ruled out every word
    pub fn guess(&mut self, turn: usize) -> Result<Word, SolverError> {
        match &self.state {
            SolverState::AwaitingGuess { turn: expected } if *expected == turn => {}
            other => {
                return Err(SolverError::InvalidState {
                    expected: "awaiting guess",
                    found: format!("{other} (guess requested for turn {turn})"),
                });
            }
        }

        let guess = match (&self.config.opener, turn) {
            (Some(opener), 0) => opener.clone(),
            _ => self.choose()?,
        };

        self.state = SolverState::AwaitingFeedback {
            turn,
            guess: guess.clone(),
        };
        Ok(guess)
    }

    /// Absorb the feedback for the guess just handed out
    ///
    /// # Errors
    /// - `SolverError::InvalidState` unless awaiting feedback for this `guess`
    /// - `SolverError::LengthMismatch` if the feedback has the wrong length
    pub fn update(
        &mut self,
        guess: &Word,
        feedback: &Feedback,
    ) -> Result<SolverTransition, SolverError> {
        let turn = match &self.state {
            SolverState::AwaitingFeedback {
                turn,
                guess: pending,
            } if pending == guess => *turn,
            other => {
                return Err(SolverError::InvalidState {
                    expected: "awaiting feedback",
                    found: format!("{other} (feedback given for '{guess}')"),
                });
            }
        };

        if feedback.len() != self.word_length {
            return Err(SolverError::LengthMismatch {
                expected: self.word_length,
                found: feedback.len(),
            });
        }

        self.candidates.narrow(guess, feedback)?;

        let (state, transition) = if feedback.is_solved() {
            (
                SolverState::Solved { turns: turn + 1 },
                SolverTransition::Solved,
            )
        } else if turn + 1 >= self.config.max_turns {
            (SolverState::Exhausted, SolverTransition::Exhausted)
        } else {
            (
                SolverState::AwaitingGuess { turn: turn + 1 },
                SolverTransition::Continue,
            )
        };

        self.state = state;
        Ok(transition)
    }

    fn choose(&mut self) -> Result<Word, SolverError> {
        match self.candidates.words() {
            [] => Err(SolverError::NoCandidates),
            [only] => Ok(only.clone()),
            candidates => {
                let pool = guess_pool(
                    &self.dictionary,
                    candidates,
                    self.config.prune_threshold,
                    self.config.shortlist_size,
                );
                let best = select_guess(&pool, candidates, &mut self.cache, self.config.tie_bonus)?;
                Ok(best.word)
            }
        }
    }

    /// Words still consistent with every piece of feedback
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        self.candidates.words()
    }

    /// Number of remaining candidates
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub const fn state(&self) -> &SolverState {
        &self.state
    }

    /// Turn the solver is on, or `None` once the game is over
    #[must_use]
    pub const fn turn(&self) -> Option<usize> {
        match &self.state {
            SolverState::AwaitingGuess { turn } | SolverState::AwaitingFeedback { turn, .. } => {
                Some(*turn)
            }
            SolverState::Solved { .. } | SolverState::Exhausted => None,
        }
    }

    #[must_use]
    pub fn dictionary(&self) -> &Arc<[Word]> {
        &self.dictionary
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Number of memoized scores this game has accumulated
    #[must_use]
    pub const fn cached_scores(&self) -> usize {
        self.cache.len()
    }
}

/// Check the dictionary is non-empty and single-length; returns that length
fn validate_dictionary(dictionary: &[Word]) -> Result<usize, SolverError> {
    let first = dictionary
        .first()
        .ok_or_else(|| SolverError::InvalidDictionary("dictionary is empty".to_string()))?;
    let length = first.len();

    if let Some(odd) = dictionary.iter().find(|w| w.len() != length) {
        return Err(SolverError::InvalidDictionary(format!(
            "'{odd}' has {} letters, expected {length}",
            odd.len()
        )));
    }

    Ok(length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| Word::new(s).unwrap()).collect()
    }

    fn dictionary() -> Vec<Word> {
        words(&[
            "crane", "plots", "abide", "slate", "irate", "crate", "grate", "trace", "fuzzy",
            "jumpy", "spoon", "apple",
        ])
    }

    /// Play a full game against `target`, returning the guesses
    fn play(solver: &mut Solver, target: &Word) -> (Vec<Word>, SolverTransition) {
        let mut guesses = Vec::new();
        for turn in 0.. {
            let guess = solver.guess(turn).unwrap();
            let feedback = score(target, &guess).unwrap();
            guesses.push(guess.clone());

            let transition = solver.update(&guess, &feedback).unwrap();
            if transition != SolverTransition::Continue {
                return (guesses, transition);
            }
        }
        unreachable!()
    }

    #[test]
    fn rejects_empty_dictionary() {
        assert!(matches!(
            Solver::new(Vec::<Word>::new()),
            Err(SolverError::InvalidDictionary(_))
        ));
    }

    #[test]
    fn rejects_mixed_lengths() {
        assert!(matches!(
            Solver::new(words(&["crane", "plot"])),
            Err(SolverError::InvalidDictionary(_))
        ));
    }

    #[test]
    fn rejects_opener_of_wrong_length() {
        let config = SolverConfig::default().with_opener(Word::new("cranes").ok());
        assert!(matches!(
            Solver::with_config(dictionary(), config),
            Err(SolverError::LengthMismatch {
                expected: 5,
                found: 6
            })
        ));
    }

    #[test]
    fn opener_is_fixed_regardless_of_dictionary() {
        let mut solver = Solver::new(words(&["fuzzy", "jumpy", "plots"])).unwrap();
        assert_eq!(solver.guess(0).unwrap().text(), "crane");
        assert_eq!(solver.cached_scores(), 0);
    }

    #[test]
    fn opener_solves_on_first_turn() {
        let mut solver = Solver::new(dictionary()).unwrap();
        let target = Word::new("crane").unwrap();

        let (guesses, transition) = play(&mut solver, &target);
        assert_eq!(guesses, vec![target]);
        assert_eq!(transition, SolverTransition::Solved);
        assert_eq!(solver.state(), &SolverState::Solved { turns: 1 });
        assert_eq!(solver.turn(), None);
    }

    #[test]
    fn single_candidate_is_returned_without_search() {
        let mut solver = Solver::new(words(&["crane", "plots", "abide", "fuzzy"])).unwrap();
        let target = Word::new("abide").unwrap();

        let opener = solver.guess(0).unwrap();
        let feedback = score(&target, &opener).unwrap();
        assert_eq!(
            solver.update(&opener, &feedback).unwrap(),
            SolverTransition::Continue
        );
        assert_eq!(solver.candidates(), &[target.clone()]);

        assert_eq!(solver.guess(1).unwrap(), target);
        assert_eq!(solver.cached_scores(), 0);
    }

    #[test]
    fn solves_every_dictionary_word() {
        let dictionary = dictionary();
        for target in &dictionary {
            let mut solver = Solver::new(dictionary.clone()).unwrap();
            let (guesses, transition) = play(&mut solver, target);

            assert_eq!(transition, SolverTransition::Solved, "target {target}");
            assert_eq!(guesses.last(), Some(target));
            assert!(guesses.len() <= 6);
        }
    }

    #[test]
    fn candidates_shrink_monotonically_and_keep_target() {
        let mut solver = Solver::new(dictionary()).unwrap();
        let target = Word::new("grate").unwrap();

        let mut previous = solver.remaining();
        for turn in 0.. {
            let guess = solver.guess(turn).unwrap();
            let feedback = score(&target, &guess).unwrap();
            let transition = solver.update(&guess, &feedback).unwrap();

            assert!(solver.remaining() <= previous);
            assert!(solver.candidates().contains(&target));
            previous = solver.remaining();

            if transition != SolverTransition::Continue {
                break;
            }
        }
    }

    #[test]
    fn exhausts_after_turn_budget() {
        let config = SolverConfig {
            max_turns: 1,
            ..SolverConfig::default()
        };
        let mut solver = Solver::with_config(dictionary(), config).unwrap();
        let target = Word::new("plots").unwrap();

        let guess = solver.guess(0).unwrap();
        let feedback = score(&target, &guess).unwrap();
        assert_eq!(
            solver.update(&guess, &feedback).unwrap(),
            SolverTransition::Exhausted
        );
        assert_eq!(solver.state(), &SolverState::Exhausted);
        assert!(matches!(
            solver.guess(1),
            Err(SolverError::InvalidState { .. })
        ));
    }

    #[test]
    fn out_of_order_calls_fail() {
        let mut solver = Solver::new(dictionary()).unwrap();
        let crane = Word::new("crane").unwrap();
        let feedback = score(&crane, &crane).unwrap();

        // Feedback before any guess
        assert!(matches!(
            solver.update(&crane, &feedback),
            Err(SolverError::InvalidState { .. })
        ));
        // Wrong turn index
        assert!(matches!(
            solver.guess(3),
            Err(SolverError::InvalidState { .. })
        ));

        let guess = solver.guess(0).unwrap();
        // Guessing twice without feedback
        assert!(matches!(
            solver.guess(0),
            Err(SolverError::InvalidState { .. })
        ));
        // Feedback for a word that was not handed out
        let other = Word::new("plots").unwrap();
        assert!(matches!(
            solver.update(&other, &feedback),
            Err(SolverError::InvalidState { .. })
        ));
        // Misaligned feedback leaves the state untouched
        let short = Feedback::parse("GG").unwrap();
        assert!(matches!(
            solver.update(&guess, &short),
            Err(SolverError::LengthMismatch { .. })
        ));
        assert_eq!(
            solver.update(&guess, &feedback).unwrap(),
            SolverTransition::Solved
        );
    }

    #[test]
    fn inconsistent_feedback_leaves_no_candidates() {
        let mut solver = Solver::new(dictionary()).unwrap();
        let guess = solver.guess(0).unwrap();
        // Nothing in the dictionary starts with "cran" and isn't "crane"
        let feedback = Feedback::parse("GGGG-").unwrap();

        solver.update(&guess, &feedback).unwrap();
        assert_eq!(solver.remaining(), 0);
        assert_eq!(solver.guess(1), Err(SolverError::NoCandidates));
    }

    #[test]
    fn computes_opener_for_other_lengths() {
        let dictionary = words(&["cat", "cot", "dog", "dig", "bat"]);
        let mut solver = Solver::new(dictionary.clone()).unwrap();
        assert!(solver.config().opener.is_none());

        let guess = solver.guess(0).unwrap();
        assert!(dictionary.contains(&guess));
        assert!(solver.cached_scores() > 0);
    }

    #[test]
    fn large_candidate_sets_use_the_shortlist() {
        let config = SolverConfig {
            prune_threshold: 2,
            shortlist_size: 3,
            opener: None,
            ..SolverConfig::default()
        };
        let dictionary = dictionary();
        let mut solver = Solver::with_config(dictionary.clone(), config).unwrap();

        solver.guess(0).unwrap();
        // Only the three shortlisted words were swept
        assert_eq!(solver.cached_scores(), 3 * dictionary.len());
    }

    #[test]
    fn rejects_unplayable_configs() {
        for config in [
            SolverConfig {
                shortlist_size: 0,
                ..SolverConfig::default()
            },
            SolverConfig {
                max_turns: 0,
                ..SolverConfig::default()
            },
        ] {
            assert!(matches!(
                Solver::with_config(dictionary(), config),
                Err(SolverError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn dictionary_is_shared_not_copied() {
        let shared: Arc<[Word]> = dictionary().into();
        let a = Solver::new(Arc::clone(&shared)).unwrap();
        let b = Solver::new(Arc::clone(&shared)).unwrap();
        assert!(Arc::ptr_eq(a.dictionary(), b.dictionary()));
    }
}
