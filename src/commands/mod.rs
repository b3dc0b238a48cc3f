//! Command implementations

pub mod clues;
pub mod session;
pub mod solve;

pub use clues::{parse_clue_line, parse_clues};
pub use session::{SessionOptions, run_clue_mode, run_test_mode, write_top_n};
pub use solve::{SolveConfig, SolveResult, solve_word};
