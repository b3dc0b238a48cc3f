//! Word solving command
//!
//! Simulates play toward a known answer and returns the clues produced.

use crate::config::DEFAULT_MAX_GUESSES;
use crate::core::{Clue, ClueError, Word};
use crate::solver::Solver;

/// Configuration for solving a word
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }

    #[must_use]
    pub const fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses;
        self
    }
}

/// Result of solving a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    pub target: Word,
    pub clues: Vec<Clue>,
}

impl SolveResult {
    /// Whether the last guess was the answer
    #[must_use]
    pub fn success(&self) -> bool {
        self.clues.last().is_some_and(Clue::is_solved)
    }

    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.clues.len()
    }
}

/// Solve a specific word starting from `solver`'s state
///
/// The answer need not be in the corpus; play then stops when no candidate is
/// left or the guess budget runs out.
///
/// # Errors
///
/// Returns an error if the target is not a word of the corpus word length.
pub fn solve_word(config: &SolveConfig, solver: &Solver) -> Result<SolveResult, ClueError> {
    let target = Word::new(&config.target)?;
    let expected = solver.corpus().word_len();
    if target.len() != expected {
        return Err(ClueError::WrongWordLength {
            expected,
            actual: target.len(),
        });
    }

    let clues = solver.path_to(&target, config.max_guesses).collect();
    Ok(SolveResult { target, clues })
}
