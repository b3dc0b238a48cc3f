//! Line-oriented driver loops
//!
//! Clue mode prints the top-ranked guesses and, when interactive, keeps reading
//! `guess pattern` lines. Test mode prints the simulated path to each answer
//! and, when interactive, keeps reading answers until an empty line.

use super::clues::parse_clue_line;
use super::solve::{SolveConfig, SolveResult, solve_word};
use crate::config::{DEFAULT_MAX_GUESSES, DEFAULT_TOP_N};
use crate::output::display::{write_no_guesses, write_solve_result};
use crate::output::formatters::score_line;
use crate::solver::Solver;
use anyhow::{Context, Result};
use log::debug;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "> ";

/// Settings shared by both driver modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Guesses printed per ranking
    pub top_n: usize,
    /// Guess budget for a game
    pub max_guesses: usize,
    /// Keep reading input after the initial output
    pub interactive: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            max_guesses: DEFAULT_MAX_GUESSES,
            interactive: true,
        }
    }
}

/// Print up to `top_n` of the best guesses as `word<TAB>score` lines
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_top_n<W: Write>(out: &mut W, solver: &Solver, top_n: usize) -> io::Result<()> {
    let best = solver.best_guesses();
    if best.is_empty() {
        return write_no_guesses(out);
    }
    for (word, score) in best.iter().take(top_n) {
        writeln!(out, "{}", score_line(word, *score))?;
    }
    Ok(())
}

/// Suggest guesses, then refine them with clues read from `input`
///
/// Stops when input ends, the guess budget is used up, or at most one match is
/// left. Invalid lines are reported on `err` and prompted for again.
///
/// Returns the final solver state.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn run_clue_mode<R, W, E>(
    mut solver: Solver,
    options: &SessionOptions,
    input: &mut R,
    out: &mut W,
    err: &mut E,
) -> Result<Solver>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let word_len = solver.corpus().word_len();
    write_top_n(out, &solver, options.top_n)?;
    if !options.interactive {
        return Ok(solver);
    }

    let mut line = String::new();
    while solver.clues().len() < options.max_guesses && solver.matches().len() > 1 {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line).context("failed to read clue")? == 0 {
            debug!("input ended");
            break;
        }

        match parse_clue_line(&line, word_len) {
            Ok(clue) => {
                solver = solver.with_clue(clue);
                write_top_n(out, &solver, options.top_n)?;
            }
            Err(e) => {
                writeln!(
                    err,
                    "Invalid input. Example: {PROMPT}snake 01210\nError: {e:#}"
                )?;
            }
        }
    }

    Ok(solver)
}

/// Print the simulated path to each answer, then to answers read from `input`
///
/// Answers that are not valid words of the corpus length are reported on `err`
/// and skipped. Returns the results in the order played.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn run_test_mode<S, R, W, E>(
    solver: &Solver,
    answers: &[S],
    options: &SessionOptions,
    input: &mut R,
    out: &mut W,
    err: &mut E,
) -> Result<Vec<SolveResult>>
where
    S: AsRef<str>,
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut results = Vec::new();
    for answer in answers {
        results.extend(play_answer(solver, options, answer.as_ref(), out, err)?);
    }

    if options.interactive {
        let mut line = String::new();
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line).context("failed to read answer")? == 0 {
                break;
            }
            let answer = line.trim();
            if answer.is_empty() {
                break;
            }
            results.extend(play_answer(solver, options, answer, out, err)?);
        }
    }

    Ok(results)
}

fn play_answer<W: Write, E: Write>(
    solver: &Solver,
    options: &SessionOptions,
    answer: &str,
    out: &mut W,
    err: &mut E,
) -> io::Result<Option<SolveResult>> {
    let config = SolveConfig::new(answer.to_string()).with_max_guesses(options.max_guesses);
    match solve_word(&config, solver) {
        Ok(result) => {
            write_solve_result(out, &result)?;
            Ok(Some(result))
        }
        Err(e) => {
            writeln!(err, "Skipping {answer:?}: {e}")?;
            Ok(None)
        }
    }
}
