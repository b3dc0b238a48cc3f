//! Formatting utilities for terminal output

use crate::core::{Clue, Word};

/// Format a ranked guess as `word<TAB>score`
#[must_use]
pub fn score_line(word: &Word, score: f64) -> String {
    format!("{word}\t{score}")
}

/// Format a simulated game as emoji rows separated by spaces
#[must_use]
pub fn emoji_trail(clues: &[Clue]) -> String {
    clues
        .iter()
        .map(|clue| clue.pattern().to_emoji())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pluralize "guess"
#[must_use]
pub const fn guesses_noun(count: usize) -> &'static str {
    if count == 1 { "guess" } else { "guesses" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_line_is_tab_separated() {
        let line = score_line(&Word::new("snake").unwrap(), 0.25);
        assert_eq!(line, "snake\t0.25");
    }

    #[test]
    fn emoji_trail_joins_patterns() {
        let clues = [
            Clue::parse("there", "00002").unwrap(),
            Clue::parse("snake", "22222").unwrap(),
        ];
        assert_eq!(emoji_trail(&clues), "⬜⬜⬜⬜🟩 🟩🟩🟩🟩🟩");
        assert_eq!(emoji_trail(&[]), "");
    }

    #[test]
    fn guesses_noun_pluralizes() {
        assert_eq!(guesses_noun(1), "guess");
        assert_eq!(guesses_noun(0), "guesses");
        assert_eq!(guesses_noun(4), "guesses");
    }
}
