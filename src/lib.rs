//! Wordle Solver
//!
//! Ranks guesses for word-guessing games by frequency-weighted information
//! gain: a guess scores well if it is likely to be the answer, or failing that
//! if its feedback splits the likely answers apart.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use wordle_solver::core::{Clue, Pattern, Word};
//! use wordle_solver::corpus::{Corpus, CorpusConfig, FrequencyTable};
//! use wordle_solver::solver::{Solver, SolverConfig};
//!
//! // Feedback for a guess against a known answer
//! let guess = Word::new("crane").unwrap();
//! let answer = Word::new("snake").unwrap();
//! assert_eq!(Pattern::calculate(&guess, &answer).to_string(), "00212");
//!
//! // Rank guesses given what the game has told us so far
//! let corpus = Corpus::new(&FrequencyTable::embedded(), CorpusConfig::default());
//! let solver = Solver::new(Arc::new(corpus), SolverConfig::default())
//!     .with_clue(Clue::parse("there", "00002").unwrap());
//!
//! for (word, score) in solver.best_guesses().iter().take(3) {
//!     println!("{word}\t{score:.4}");
//! }
//! ```

// Defaults
pub mod config;

// Core domain types
pub mod core;

// Ranked word lists
pub mod corpus;

// Guess ranking
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
