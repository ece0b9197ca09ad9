//! Word list loading utilities
//!
//! Lines are trimmed and lowercased, blank lines are ignored, invalid entries are
//! skipped with a warning, and duplicates keep their first position.

use crate::core::Word;
use log::warn;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_deduce::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_str(&content))
}

/// Parse newline-separated words
#[must_use]
pub fn words_from_str(content: &str) -> Vec<Word> {
    dedup(content.lines().enumerate().filter_map(|(idx, line)| {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        match Word::new(trimmed) {
            Ok(word) => Some(word),
            Err(e) => {
                warn!("skipping line {}: '{trimmed}': {e}", idx + 1);
                None
            }
        }
    }))
}

/// Convert an embedded string slice to a Word vector
///
/// # Examples
/// ```
/// use wordle_deduce::wordlists::loader::words_from_slice;
/// use wordle_deduce::wordlists::DEFAULT_WORDS;
///
/// let words = words_from_slice(DEFAULT_WORDS);
/// assert_eq!(words.len(), DEFAULT_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    dedup(slice.iter().filter_map(|&s| Word::new(s).ok()))
}

fn dedup(words: impl Iterator<Item = Word>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    words.filter(|word| seen.insert(word.clone())).collect()
}
