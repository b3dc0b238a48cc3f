//! Core domain types
//!
//! Words, feedback patterns and clues. Everything here is an immutable value
//! with structural equality and hashing, so derived results can be cached by value.

mod clue;
mod clue_set;
mod pattern;
mod word;

pub use clue::{Clue, ClueError};
pub use clue_set::ClueSet;
pub use pattern::{LetterState, Pattern, PatternError};
pub use word::{Word, WordError};
