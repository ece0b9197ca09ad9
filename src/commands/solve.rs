//! Word solving command
//!
//! Plays one game against a known target and records every turn.

use crate::core::{Feedback, Word, score};
use crate::solver::entropy::calculate_metrics;
use crate::solver::{Solver, SolverConfig, SolverTransition};
use anyhow::{Context, Result, bail};
use log::debug;
use std::sync::Arc;

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: Word,
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
}

/// Play one game against `target`
///
/// With `with_metrics`, each turn also records the guess's entropy over the
/// candidates it faced; that costs an extra scoring sweep per turn, so bulk runs
/// leave it off.
///
/// # Errors
///
/// Returns an error if the target is not in the dictionary or the solver rejects
/// the dictionary or configuration.
pub fn play_game(
    dictionary: &Arc<[Word]>,
    target: &Word,
    config: &SolverConfig,
    with_metrics: bool,
) -> Result<SolveResult> {
    if !dictionary.contains(target) {
        bail!("'{target}' is not in the dictionary");
    }

    let mut solver = Solver::with_config(Arc::clone(dictionary), config.clone())
        .context("failed to start solver")?;
    let mut guesses = Vec::new();
    let mut turn = 0;

    loop {
        let candidates_before = solver.remaining();
        let guess = solver
            .guess(turn)
            .with_context(|| format!("no guess for turn {turn}"))?;

        let (entropy, expected_remaining) = if with_metrics && candidates_before > 1 {
            let metrics = calculate_metrics(&guess, solver.candidates())?;
            (Some(metrics.entropy), Some(metrics.expected_remaining))
        } else {
            (None, None)
        };

        let feedback = score(target, &guess)?;
        let transition = solver.update(&guess, &feedback)?;

        debug!(
            "{target}: turn {turn} guessed {guess} -> {feedback}, {candidates_before} -> {} candidates",
            solver.remaining()
        );

        guesses.push(GuessStep {
            word: guess,
            feedback,
            candidates_before,
            candidates_after: solver.remaining(),
            entropy,
            expected_remaining,
        });

        match transition {
            SolverTransition::Continue => turn += 1,
            SolverTransition::Solved | SolverTransition::Exhausted => {
                return Ok(SolveResult {
                    success: transition == SolverTransition::Solved,
                    guesses,
                    target: target.clone(),
                });
            }
        }
    }
}

/// Solve a specific word given as text
///
/// # Errors
///
/// Returns an error if the target is not a valid word or not in the dictionary.
pub fn solve_word(dictionary: &Arc<[Word]>, target: &str, config: &SolverConfig) -> Result<SolveResult> {
    let target = Word::new(target).with_context(|| format!("invalid target word '{target}'"))?;
    play_game(dictionary, &target, config, true)
}
