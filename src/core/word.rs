//! Word representation
//!
//! A Word stores a lowercase alphabetic word along with letter position indices
//! for feedback calculation. Words of any length up to [`Pattern::MAX_LEN`] are
//! accepted; the corpus decides which length is in play.

use super::Pattern;
use rustc_hash::FxHashMap;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// A guessable word with letter position tracking
///
/// Stores the word as characters and maintains a map of letter positions for
/// duplicate handling. Equality, ordering and hashing use the text alone.
#[derive(Debug, Clone)]
pub struct Word {
    text: Box<str>,
    chars: Box<[char]>,
    char_positions: FxHashMap<char, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be at most {max} letters, got {0}", max = Pattern::MAX_LEN)]
    TooLong(usize),
    #[error("word contains non-alphabetic character {0:?}")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is lowercased. Empty words are allowed.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - It is longer than [`Pattern::MAX_LEN`] letters
    /// - It contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::core::Word;
    ///
    /// let word = Word::new("Snake").unwrap();
    /// assert_eq!(word.text(), "snake");
    ///
    /// assert!(Word::new("sn4ke").is_err());
    /// assert!(Word::new("two words").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().to_lowercase();

        if let Some(bad) = text.chars().find(|c| !c.is_alphabetic()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let chars: Box<[char]> = text.chars().collect();
        if chars.len() > Pattern::MAX_LEN {
            return Err(WordError::TooLong(chars.len()));
        }

        // Build position map for fast lookup
        let mut char_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in chars.iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text: text.into_boxed_str(),
            chars,
            char_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of letters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Get the letter at a position, or `None` past the end
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> Option<char> {
        self.chars.get(position).copied()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.char_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears, in ascending order
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    #[must_use]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Iterate each distinct letter with the positions it occupies
    ///
    /// The number of positions is the letter's count in the word.
    pub(crate) fn letter_positions(&self) -> impl Iterator<Item = (char, &[usize])> {
        self.char_positions
            .iter()
            .map(|(&letter, positions)| (letter, positions.as_slice()))
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Word {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
