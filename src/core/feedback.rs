//! Per-letter feedback and the scoring function that produces it
//!
//! Scoring follows the puzzle's duplicate-letter rules: a letter that occurs `k`
//! times in the target earns at most `k` non-absent marks in the guess, with
//! exact-position matches claimed first.

use super::Word;
use crate::error::SolverError;
use rustc_hash::FxHashMap;
use std::fmt;

/// Verdict for a single position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    /// Letter not available at this position once the target's copies are used up
    Absent,
    /// Letter is in the target, but elsewhere
    Present,
    /// Right letter, right slot
    Correct,
}

impl Mark {
    /// Single-character form used in text feedback: `G`, `Y` or `-`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Parse one feedback character
    ///
    /// Accepts `G`/`g`/`2`/🟩, `Y`/`y`/`1`/🟨 and `-`/`_`/`.`/`0`/⬜.
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '2' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '1' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '0' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback for one guess, aligned positionally with it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback {
    marks: Box<[Mark]>,
}

impl Feedback {
    /// Build feedback from explicit marks
    ///
    /// Inside the engine feedback only ever comes out of [`score`]; this exists for
    /// drivers that receive feedback from somewhere else.
    #[must_use]
    pub fn from_marks(marks: impl Into<Box<[Mark]>>) -> Self {
        Self {
            marks: marks.into(),
        }
    }

    /// The marks, one per position
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// True when every position is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.marks.iter().all(|&m| m == Mark::Correct)
    }

    /// Count the `Correct` marks
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.marks.iter().filter(|&&m| m == Mark::Correct).count()
    }

    /// Count the `Present` marks
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.marks.iter().filter(|&&m| m == Mark::Present).count()
    }

    /// Parse feedback from a string like `"GY-GY"` or `"🟩🟨⬜🟩🟨"`
    ///
    /// # Examples
    /// ```
    /// use wordle_deduce::core::Feedback;
    ///
    /// let a = Feedback::parse("GY-GY").unwrap();
    /// let b = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(a, b);
    /// assert!(Feedback::parse("GX").is_none());
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let marks: Option<Vec<Mark>> = s.trim().chars().map(Mark::from_symbol).collect();
        marks.filter(|m| !m.is_empty()).map(Self::from_marks)
    }

    /// Render as colored-square emoji
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.marks
            .iter()
            .map(|m| match m {
                Mark::Correct => '🟩',
                Mark::Present => '🟨',
                Mark::Absent => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.marks.iter() {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

/// Score `guess` against `target`
///
/// # Algorithm
/// 1. First pass: mark exact matches `Correct` and remove them from the pool of
///    target letters
/// 2. Second pass: mark remaining positions `Present` while the pool still holds
///    that letter (consuming one copy), `Absent` otherwise
///
/// # Errors
/// Returns `SolverError::LengthMismatch` if the words differ in length.
///
/// # Examples
/// ```
/// use wordle_deduce::core::{score, Word};
///
/// let target = Word::new("apple").unwrap();
/// let guess = Word::new("plpel").unwrap();
/// let feedback = score(&target, &guess).unwrap();
/// assert_eq!(feedback.to_string(), "YYGY-");
/// ```
pub fn score(target: &Word, guess: &Word) -> Result<Feedback, SolverError> {
    if target.len() != guess.len() {
        return Err(SolverError::LengthMismatch {
            expected: target.len(),
            found: guess.len(),
        });
    }

    let mut marks = vec![Mark::Absent; guess.len()];
    let mut pool: FxHashMap<u8, usize> = FxHashMap::default();

    // First pass: exact matches; everything else stays in the pool
    for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
        if g == t {
            marks[i] = Mark::Correct;
        } else {
            *pool.entry(t).or_insert(0) += 1;
        }
    }

    // Second pass: wrong-position matches drawn from what is left
    for (i, &g) in guess.chars().iter().enumerate() {
        if marks[i] == Mark::Correct {
            continue;
        }
        if let Some(count) = pool.get_mut(&g)
            && *count > 0
        {
            marks[i] = Mark::Present;
            *count -= 1;
        }
    }

    Ok(Feedback::from_marks(marks))
}
