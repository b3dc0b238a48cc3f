//! Simulated play toward a known answer

use super::Solver;
use crate::core::{Clue, Word};
use log::debug;
use std::iter::FusedIterator;

/// Lazy sequence of clues produced by [`Solver::path_to`]
///
/// Finite (at most the guess budget). Clone it before iterating to replay the
/// same path.
#[derive(Debug, Clone)]
pub struct Path {
    solver: Option<Solver>,
    target: Word,
    remaining: usize,
}

impl Path {
    pub(super) const fn new(solver: Solver, target: Word, max_guesses: usize) -> Self {
        Self {
            solver: Some(solver),
            target,
            remaining: max_guesses,
        }
    }

    /// The answer being walked toward
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }
}

impl Iterator for Path {
    type Item = Clue;

    fn next(&mut self) -> Option<Clue> {
        if self.remaining == 0 {
            self.solver = None;
            return None;
        }
        let solver = self.solver.take()?;
        self.remaining -= 1;

        let guess = solver.best_guess()?.clone();
        let clue = Clue::from_target(guess, &self.target);
        debug!("path to {}: {clue}", self.target);

        if clue.guess() != &self.target {
            self.solver = Some(solver.with_clue(clue.clone()));
        }
        Some(clue)
    }
}

impl FusedIterator for Path {}
