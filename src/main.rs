//! Wordle Deduce - CLI
//!
//! Drives the deduction engine: solve one target, analyze a guess, or benchmark
//! the solver over a whole dictionary.

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use log::{LevelFilter, info};
use rand::seq::IndexedRandom;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use wordle_deduce::{
    commands::{analyze_word, run_benchmark, solve_word},
    core::Word,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{
        DEFAULT_MAX_TURNS, DEFAULT_PRUNE_THRESHOLD, DEFAULT_SHORTLIST_SIZE, SolverConfig,
    },
    wordlists::{
        DEFAULT_WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_deduce",
    about = "Wordle deduction engine using entropy-maximizing guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list file, one word per line (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    #[command(flatten)]
    tuning: Tuning,

    /// Log solver progress (repeat for more detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Args)]
struct Tuning {
    /// Fixed first guess (default: crane for five-letter lists)
    #[arg(long, global = true)]
    opener: Option<String>,

    /// Compute the first guess instead of using a fixed opener
    #[arg(long, global = true, conflicts_with = "opener")]
    no_opener: bool,

    /// Number of guesses allowed per game
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_TURNS)]
    max_turns: usize,

    /// Prune the guess pool while more than this many candidates remain
    #[arg(long, global = true, default_value_t = DEFAULT_PRUNE_THRESHOLD)]
    threshold: usize,

    /// Guess pool size when pruning
    #[arg(long, global = true, default_value_t = DEFAULT_SHORTLIST_SIZE)]
    shortlist: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a specific target word
    Solve {
        /// The target word to solve (omit with --random)
        word: Option<String>,

        /// Pick a random target from the word list
        #[arg(short, long, conflicts_with = "word")]
        random: bool,

        /// Show candidate counts and entropy per turn
        #[arg(short, long)]
        steps: bool,
    },

    /// Analyze the entropy of a word against the whole word list
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Solve every word in the list and report statistics
    Benchmark {
        /// Only test the first N words
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dictionary = load_dictionary(cli.words.as_deref())?;
    info!("loaded {} words", dictionary.len());

    let config = build_config(&cli.tuning, &dictionary)?;

    match cli.command {
        Commands::Solve {
            word,
            random,
            steps,
        } => {
            let target = match (word, random) {
                (Some(word), _) => word,
                (None, true) => dictionary
                    .choose(&mut rand::rng())
                    .map(|w| w.text().to_string())
                    .context("word list is empty")?,
                (None, false) => bail!("give a target word or --random"),
            };
            let result = solve_word(&dictionary, &target, &config)?;
            print_solve_result(&result, steps);
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &dictionary)?;
            print_analysis_result(&result);
        }
        Commands::Benchmark { limit, quiet } => {
            let count = limit.unwrap_or(dictionary.len()).min(dictionary.len());
            println!("Running benchmark on {count} words...");
            let result = run_benchmark(&dictionary, &dictionary[..count], &config, !quiet)?;
            print_benchmark_result(&result);
        }
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise each `-v` raises the level from warn
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_dictionary(path: Option<&Path>) -> Result<Arc<[Word]>> {
    let words = match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to read word list {}", path.display()))?,
        None => words_from_slice(DEFAULT_WORDS),
    };
    if words.is_empty() {
        bail!("word list contains no valid words");
    }
    Ok(words.into())
}

fn build_config(tuning: &Tuning, dictionary: &[Word]) -> Result<SolverConfig> {
    let word_length = dictionary.first().map_or(0, Word::len);
    let defaults = SolverConfig::for_length(word_length);

    let opener = match (&tuning.opener, tuning.no_opener) {
        (_, true) => None,
        (Some(text), false) => {
            Some(Word::new(text).with_context(|| format!("invalid opener '{text}'"))?)
        }
        (None, false) => defaults.opener.clone(),
    };

    let config = SolverConfig {
        max_turns: tuning.max_turns,
        prune_threshold: tuning.threshold,
        shortlist_size: tuning.shortlist,
        opener,
        ..defaults
    };
    config
        .validate(word_length)
        .context("invalid solver settings")?;
    Ok(config)
}
