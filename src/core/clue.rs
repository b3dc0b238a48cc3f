//! A guess paired with the feedback it received

use super::{Pattern, PatternError, Word, WordError};
use std::fmt;
use thiserror::Error;

/// Error type for building clues from external input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClueError {
    #[error("invalid guess: {0}")]
    Word(#[from] WordError),
    #[error("invalid pattern: {0}")]
    Pattern(#[from] PatternError),
    #[error("pattern has {pattern_len} letters but guess has {guess_len}")]
    LengthMismatch { guess_len: usize, pattern_len: usize },
    #[error("guess has {actual} letters but the corpus uses {expected}-letter words")]
    WrongWordLength { expected: usize, actual: usize },
}

/// A guess and its feedback, used as a constraint on the answer
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Clue {
    guess: Word,
    pattern: Pattern,
}

impl Clue {
    /// Pair a guess with externally supplied feedback
    ///
    /// # Errors
    /// Returns `ClueError::LengthMismatch` if the pattern doesn't cover the guess
    /// letter for letter.
    pub fn new(guess: Word, pattern: Pattern) -> Result<Self, ClueError> {
        if guess.len() != pattern.len() {
            return Err(ClueError::LengthMismatch {
                guess_len: guess.len(),
                pattern_len: pattern.len(),
            });
        }
        Ok(Self { guess, pattern })
    }

    /// Parse a guess and a digit pattern such as `"snake"`, `"01210"`
    ///
    /// # Errors
    /// Returns `ClueError` if either part is malformed or their lengths differ.
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::core::Clue;
    ///
    /// let clue = Clue::parse("snake", "01210").unwrap();
    /// assert_eq!(clue.to_string(), "snake\t01210");
    ///
    /// assert!(Clue::parse("snake", "0121x").is_err());
    /// assert!(Clue::parse("snake", "012").is_err());
    /// ```
    pub fn parse(guess: &str, pattern: &str) -> Result<Self, ClueError> {
        Self::new(Word::new(guess)?, pattern.parse()?)
    }

    /// Derive the clue a real game would give for `guess` when the answer is `target`
    #[must_use]
    pub fn from_target(guess: Word, target: &Word) -> Self {
        let pattern = Pattern::calculate(&guess, target);
        Self { guess, pattern }
    }

    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[must_use]
    pub const fn pattern(&self) -> Pattern {
        self.pattern
    }

    /// Whether the guess was the answer
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.pattern.is_perfect()
    }

    /// Check if `word` could be the answer given this clue
    ///
    /// True iff guessing this clue's word against `word` reproduces the pattern.
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        Pattern::calculate(&self.guess, word) == self.pattern
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.guess, self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn clue_parse_valid() {
        let clue = Clue::parse("snake", "01210").unwrap();
        assert_eq!(clue.guess().text(), "snake");
        assert_eq!(clue.pattern().to_string(), "01210");
        assert!(!clue.is_solved());
    }

    #[test]
    fn clue_parse_errors() {
        assert!(matches!(
            Clue::parse("snake", "0121"),
            Err(ClueError::LengthMismatch {
                guess_len: 5,
                pattern_len: 4
            })
        ));
        assert!(matches!(
            Clue::parse("snake", "01a10"),
            Err(ClueError::Pattern(PatternError::InvalidCharacter { .. }))
        ));
        assert!(matches!(
            Clue::parse("sn4ke", "01210"),
            Err(ClueError::Word(WordError::InvalidCharacter('4')))
        ));
    }

    #[test]
    fn clue_from_target_is_sound() {
        let words = [
            "snake", "speed", "erase", "robot", "floor", "eerie", "geese", "abbey", "kayak",
        ];
        for g in words {
            for t in words {
                let clue = Clue::from_target(word(g), &word(t));
                assert!(clue.matches(&word(t)), "{clue} rejects its own target {t}");
            }
        }
    }

    #[test]
    fn clue_from_target_solved() {
        let clue = Clue::from_target(word("snake"), &word("snake"));
        assert!(clue.is_solved());
        assert_eq!(clue.pattern().to_string(), "22222");
    }

    #[test]
    fn clue_matches_rejects_inconsistent_words() {
        let clue = Clue::from_target(word("crane"), &word("snake"));
        assert_eq!(clue.pattern().to_string(), "00212");
        assert!(clue.matches(&word("snake")));
        assert!(clue.matches(&word("knave")));
        assert!(!clue.matches(&word("shake")));
        assert!(!clue.matches(&word("crane")));
        assert!(!clue.matches(&word("snail")));
    }

    #[test]
    fn clue_equality_uses_both_fields() {
        let a = Clue::parse("snake", "00000").unwrap();
        let b = Clue::parse("snake", "00000").unwrap();
        let c = Clue::parse("snake", "00001").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
