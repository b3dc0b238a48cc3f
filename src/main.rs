//! Wordle Solver - CLI
//!
//! Suggests guesses from clues gathered so far, or simulates games against
//! known answers.

use anyhow::{Context, Result, ensure};
use clap::Parser;
use log::{info, warn};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use wordle_solver::{
    commands::{SessionOptions, parse_clues, run_clue_mode, run_test_mode},
    config::{
        DEFAULT_MAX_GUESSES, DEFAULT_MIN_FREQ, DEFAULT_MIN_FREQ_RATIO, DEFAULT_TOP_N,
        DEFAULT_WORD_LEN,
    },
    core::Pattern,
    corpus::{Corpus, CorpusConfig, FrequencyTable, loader::load_from_file},
    solver::{Solver, SolverConfig},
};

#[derive(Parser)]
#[command(
    name = "wordle_solver",
    about = "Word-guessing game solver ranking guesses by frequency-weighted information gain",
    version,
    author
)]
struct Cli {
    /// Clues so far, as guess and pattern pairs (e.g. `-c crane 00212 slate 20202`)
    #[arg(short, long, num_args = 1.., value_name = "GUESS PATTERN")]
    clues: Vec<String>,

    /// Print results once instead of reading more input
    #[arg(long)]
    no_interactive: bool,

    /// Only suggest words that could still be the answer
    #[arg(short = 'm', long)]
    hard_mode: bool,

    /// Simulate games against these answers instead of suggesting guesses
    #[arg(short, long, num_args = 0.., value_name = "ANSWER")]
    test: Option<Vec<String>>,

    /// Number of suggestions to print
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
    top_n: usize,

    /// Maximum number of guesses per game
    #[arg(long, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Word length
    #[arg(long, default_value_t = DEFAULT_WORD_LEN)]
    word_len: usize,

    /// Corpus words must be more frequent than this
    #[arg(long, default_value_t = DEFAULT_MIN_FREQ)]
    min_freq: f64,

    /// Candidate cutoff relative to the running mean frequency (lower is slower but more precise)
    #[arg(long, default_value_t = DEFAULT_MIN_FREQ_RATIO)]
    min_freq_ratio: f64,

    /// Frequency list (`word<TAB>frequency` lines) to use instead of the built-in English list
    #[arg(short, long, value_name = "PATH")]
    frequencies: Option<PathBuf>,
}

impl Cli {
    fn validate(&self) -> Result<()> {
        ensure!(
            (1..=Pattern::MAX_LEN).contains(&self.word_len),
            "--word-len must be between 1 and {}",
            Pattern::MAX_LEN
        );
        ensure!(
            self.min_freq.is_finite(),
            "--min-freq must be a finite number"
        );
        ensure!(
            self.min_freq_ratio.is_finite(),
            "--min-freq-ratio must be a finite number"
        );
        Ok(())
    }
}

/// Build the corpus from the built-in list or the `-f` file
fn load_corpus(cli: &Cli) -> Result<Corpus> {
    let table = match &cli.frequencies {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to load frequency list {}", path.display()))?,
        None => FrequencyTable::embedded(),
    };
    info!("frequency list has {} words", table.len());

    let corpus = Corpus::new(
        &table,
        CorpusConfig {
            word_len: cli.word_len,
            min_word_freq: cli.min_freq,
        },
    );
    if corpus.is_empty() {
        warn!(
            "no {}-letter words above frequency {}",
            cli.word_len, cli.min_freq
        );
    }
    Ok(corpus)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    cli.validate()?;

    let clues = parse_clues(&cli.clues, cli.word_len)?;
    let corpus = load_corpus(&cli)?;
    let solver = Solver::new(
        Arc::new(corpus),
        SolverConfig {
            hard_mode: cli.hard_mode,
            min_freq_ratio: cli.min_freq_ratio,
        },
    )
    .with_clues(&clues);

    let options = SessionOptions {
        top_n: cli.top_n,
        max_guesses: cli.max_guesses,
        interactive: !cli.no_interactive,
    };

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    match &cli.test {
        Some(answers) => {
            run_test_mode(&solver, answers, &options, &mut input, &mut out, &mut err)?;
        }
        None => {
            run_clue_mode(solver, &options, &mut input, &mut out, &mut err)?;
        }
    }
    Ok(())
}
