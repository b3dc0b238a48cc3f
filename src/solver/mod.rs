//! Guess ranking
//!
//! A [`Solver`] holds what is known about the answer and ranks guesses by a
//! frequency-weighted entropy score.

mod engine;
pub mod entropy;
mod path;

pub use engine::{Solver, SolverConfig};
pub use entropy::{GuessWeights, score_guess, shannon_entropy, weigh_guess};
pub use path::Path;
