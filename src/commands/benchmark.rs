//! Benchmark command
//!
//! Plays every target as an independent game, in parallel, and aggregates how
//! many guesses each took. Each game gets its own solver; only the dictionary is
//! shared.

use super::solve::play_game;
use crate::core::Word;
use crate::solver::SolverConfig;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// Over solved games only
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guesses taken → number of solved games
    pub distribution: BTreeMap<usize, usize>,
    /// Solved in the most guesses, worst first, at most ten
    pub hardest: Vec<(Word, usize)>,
    /// Targets not solved within the turn budget
    pub unsolved: Vec<Word>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run a benchmark over `targets`
///
/// # Errors
///
/// Returns the first error any game hits, e.g. a target missing from the
/// dictionary.
pub fn run_benchmark(
    dictionary: &Arc<[Word]>,
    targets: &[Word],
    config: &SolverConfig,
    show_progress: bool,
) -> Result<BenchmarkResult> {
    info!(
        "benchmarking {} targets against {} words",
        targets.len(),
        dictionary.len()
    );

    let pb = if show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {elapsed}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let outcomes = targets
        .par_iter()
        .map(|target| {
            let result = play_game(dictionary, target, config, false)?;
            pb.inc(1);
            Ok((target.clone(), result.success, result.guesses.len()))
        })
        .collect::<Result<Vec<_>>>()?;

    pb.finish_and_clear();
    let duration = start.elapsed();

    let mut distribution = BTreeMap::new();
    let mut unsolved = Vec::new();
    let mut solved_games = Vec::new();

    for (target, success, guesses) in outcomes {
        if success {
            *distribution.entry(guesses).or_insert(0) += 1;
            solved_games.push((target, guesses));
        } else {
            unsolved.push(target);
        }
    }

    let solved = solved_games.len();
    let total_guesses: usize = solved_games.iter().map(|(_, n)| n).sum();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };

    let min_guesses = solved_games.iter().map(|(_, n)| *n).min().unwrap_or(0);
    let max_guesses = solved_games.iter().map(|(_, n)| *n).max().unwrap_or(0);

    // Stable, so equally hard words keep target order
    let mut hardest = solved_games;
    hardest.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    hardest.truncate(10);

    let total_words = targets.len();
    let words_per_second = if duration.as_secs_f64() > 0.0 {
        total_words as f64 / duration.as_secs_f64()
    } else {
        0.0
    };

    info!("solved {solved}/{total_words} in {:.2}s", duration.as_secs_f64());

    Ok(BenchmarkResult {
        total_words,
        solved,
        failed: unsolved.len(),
        average_guesses,
        min_guesses,
        max_guesses,
        distribution,
        hardest,
        unsolved,
        duration,
        words_per_second,
    })
}
