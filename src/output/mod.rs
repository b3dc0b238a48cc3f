//! Terminal output formatting
//!
//! Plain line formats for results and colored summaries.

pub mod display;
pub mod formatters;

pub use display::{write_no_guesses, write_solve_result};
pub use formatters::{emoji_trail, score_line};
