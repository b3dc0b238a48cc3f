//! Feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 digits:
//! - 0 = absent (letter not credited anywhere in the target)
//! - 1 = present (letter in the target, wrong position)
//! - 2 = correct (letter in the correct position)
//!
//! The pattern is stored as its length plus a single `u64`, where each position
//! contributes digit × 3^position to the total. That bounds patterns at
//! [`Pattern::MAX_LEN`] letters.

use super::Word;
use std::fmt;
use thiserror::Error;

/// Verdict for a single letter of a guess
///
/// Ordered `Absent < Present < Correct` for display; the order carries no other
/// meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterState {
    /// Letter not in the target (or all its occurrences already credited)
    Absent,
    /// Letter in the target at another position
    Present,
    /// Letter at this exact position in the target
    Correct,
}

impl LetterState {
    /// Serialization digit: `0`, `1` or `2`
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    /// Parse a serialization digit
    #[must_use]
    pub const fn from_digit(c: char) -> Option<Self> {
        match c {
            '0' => Some(Self::Absent),
            '1' => Some(Self::Present),
            '2' => Some(Self::Correct),
            _ => None,
        }
    }

    const fn from_code(code: u64) -> Self {
        match code {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Tile emoji for terminal output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

/// Error type for pattern strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("invalid pattern character {character:?} at position {position} (expected 0, 1 or 2)")]
    InvalidCharacter { character: char, position: usize },
    #[error("pattern must be at most {max} letters, got {0}", max = Pattern::MAX_LEN)]
    TooLong(usize),
}

/// Feedback pattern for a guess
///
/// Patterns compare equal iff they have the same length and identical
/// per-position states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern {
    len: u8,
    code: u64,
}

impl Pattern {
    /// Longest pattern that fits the base-3 encoding (3^40 < 2^64)
    pub const MAX_LEN: usize = 40;

    /// All-correct pattern of the given length
    ///
    /// # Panics
    /// Panics if `len` exceeds [`Pattern::MAX_LEN`]
    #[must_use]
    pub fn perfect(len: usize) -> Self {
        assert!(len <= Self::MAX_LEN, "pattern length {len} exceeds maximum");
        Self {
            len: len as u8,
            code: 3u64.pow(len as u32) - 1,
        }
    }

    /// Build a pattern from per-letter states
    ///
    /// # Errors
    /// Returns `PatternError::TooLong` past [`Pattern::MAX_LEN`] states.
    pub fn from_states(states: &[LetterState]) -> Result<Self, PatternError> {
        if states.len() > Self::MAX_LEN {
            return Err(PatternError::TooLong(states.len()));
        }
        Ok(Self::encode(states))
    }

    fn encode(states: &[LetterState]) -> Self {
        let mut code = 0u64;
        let mut multiplier = 1u64;
        for state in states {
            code += u64::from(state.digit()) * multiplier;
            multiplier *= 3;
        }
        Self {
            len: states.len() as u8,
            code,
        }
    }

    /// Calculate the pattern when `guess` is played against `target`
    ///
    /// Implements the game's duplicate-letter rules: for each distinct letter,
    /// the credited quantity is the smaller of its counts in guess and target.
    /// Exact-position credit is handed out first; whatever remains goes to the
    /// leftmost uncredited occurrences as present-elsewhere.
    ///
    /// Defined for guess and target of equal length. A shorter target is
    /// tolerated (positions past its end never match exactly).
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::core::{Pattern, Word};
    ///
    /// let guess = Word::new("baba").unwrap();
    /// let target = Word::new("abba").unwrap();
    /// assert_eq!(Pattern::calculate(&guess, &target).to_string(), "1122");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut result = [LetterState::Absent; Self::MAX_LEN];
        let states = &mut result[..guess.len()];

        for (letter, target_positions) in target.letter_positions() {
            let guess_positions = guess.positions_of(letter);
            if guess_positions.is_empty() {
                continue;
            }
            let mut remaining = target_positions.len().min(guess_positions.len());

            // Exact matches first
            for &i in guess_positions {
                if target.char_at(i) == Some(letter) {
                    states[i] = LetterState::Correct;
                    remaining -= 1;
                    if remaining == 0 {
                        break;
                    }
                }
            }
            if remaining == 0 {
                continue;
            }

            for &i in guess_positions {
                if states[i] == LetterState::Absent {
                    states[i] = LetterState::Present;
                    remaining -= 1;
                    if remaining == 0 {
                        break;
                    }
                }
            }
        }

        Self::encode(states)
    }

    /// Number of letters covered
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Check if this is a perfect match (all correct)
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::perfect(self.len())
    }

    /// State at a position, or `None` past the end
    #[must_use]
    pub fn get(self, position: usize) -> Option<LetterState> {
        (position < self.len()).then(|| {
            LetterState::from_code(self.code / 3u64.pow(position as u32) % 3)
        })
    }

    /// Iterate the per-letter states in position order
    pub fn states(self) -> impl Iterator<Item = LetterState> {
        let mut val = self.code;
        (0..self.len).map(move |_| {
            let state = LetterState::from_code(val % 3);
            val /= 3;
            state
        })
    }

    /// Count positions holding a given state
    #[must_use]
    pub fn count(self, state: LetterState) -> usize {
        self.states().filter(|&s| s == state).count()
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::core::Pattern;
    ///
    /// let p: Pattern = "210".parse().unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.states().map(LetterState::emoji).collect()
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    /// Parse one digit per letter: `2` correct, `1` present, `0` absent
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let states = s
            .chars()
            .enumerate()
            .map(|(position, character)| {
                LetterState::from_digit(character)
                    .ok_or(PatternError::InvalidCharacter { character, position })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_states(&states)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for state in self.states() {
            write!(f, "{}", state.digit())?;
        }
        Ok(())
    }
}
