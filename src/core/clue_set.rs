//! Accumulated clues
//!
//! An immutable, deduplicated set of clues. Strict matching requires a word to
//! satisfy every clue; lenient ("fuzzy") matching requires at least one.

use super::{Clue, Word};
use std::borrow::Borrow;
use std::collections::BTreeSet;

/// Immutable set of clues
///
/// Backed by an ordered set so that equal sets hash equally and iterate in the
/// same order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ClueSet {
    clues: BTreeSet<Clue>,
}

impl ClueSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new set that also contains `clue`
    ///
    /// Adding a clue already present yields an equal set.
    #[must_use]
    pub fn with(&self, clue: Clue) -> Self {
        let mut clues = self.clues.clone();
        clues.insert(clue);
        Self { clues }
    }

    /// Return the union of two sets
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            clues: self.clues.union(&other.clues).cloned().collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, clue: &Clue) -> bool {
        self.clues.contains(clue)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.clues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clues.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Clue> {
        self.clues.iter()
    }

    /// True if `word` is consistent with every clue (vacuously true when empty)
    #[must_use]
    pub fn all_match(&self, word: &Word) -> bool {
        self.clues.iter().all(|clue| clue.matches(word))
    }

    /// True if `word` is consistent with at least one clue (false when empty)
    #[must_use]
    pub fn any_match(&self, word: &Word) -> bool {
        self.clues.iter().any(|clue| clue.matches(word))
    }

    /// Lazily keep the words that satisfy every clue, preserving order
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::core::{Clue, ClueSet, Word};
    ///
    /// let words: Vec<Word> = ["snake", "knave", "crane"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let clues = ClueSet::new().with(Clue::parse("crane", "00212").unwrap());
    ///
    /// let kept: Vec<&Word> = clues.iter_matches(&words).collect();
    /// assert_eq!(kept.len(), 2);
    /// ```
    pub fn iter_matches<'a, I>(&'a self, words: I) -> impl Iterator<Item = I::Item> + 'a
    where
        I: IntoIterator,
        I::IntoIter: 'a,
        I::Item: Borrow<Word>,
    {
        words
            .into_iter()
            .filter(move |word| self.all_match(word.borrow()))
    }

    /// Lazily keep the words that satisfy at least one clue, preserving order
    pub fn iter_fuzzy_matches<'a, I>(&'a self, words: I) -> impl Iterator<Item = I::Item> + 'a
    where
        I: IntoIterator,
        I::IntoIter: 'a,
        I::Item: Borrow<Word>,
    {
        words
            .into_iter()
            .filter(move |word| self.any_match(word.borrow()))
    }
}

impl FromIterator<Clue> for ClueSet {
    fn from_iter<T: IntoIterator<Item = Clue>>(iter: T) -> Self {
        Self {
            clues: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ClueSet {
    type Item = &'a Clue;
    type IntoIter = std::collections::btree_set::Iter<'a, Clue>;

    fn into_iter(self) -> Self::IntoIter {
        self.clues.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    fn clue(guess: &str, target: &str) -> Clue {
        Clue::from_target(Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    const POOL: &[&str] = &[
        "snake", "shake", "stake", "slate", "crane", "spade", "snail", "shade", "place",
    ];

    #[test]
    fn empty_set_matching() {
        let set = ClueSet::new();
        for w in words(POOL) {
            assert!(set.all_match(&w));
            assert!(!set.any_match(&w));
        }
        assert_eq!(set.iter_fuzzy_matches(&words(POOL)).count(), 0);
        assert_eq!(set.iter_matches(&words(POOL)).count(), POOL.len());
    }

    #[test]
    fn adding_duplicate_clue_is_noop() {
        let set = ClueSet::new().with(clue("crane", "snake"));
        let again = set.with(clue("crane", "snake"));
        assert_eq!(set, again);
        assert_eq!(again.len(), 1);
        for w in words(POOL) {
            assert_eq!(set.all_match(&w), again.all_match(&w));
        }
    }

    #[test]
    fn with_does_not_mutate_receiver() {
        let empty = ClueSet::new();
        let one = empty.with(clue("crane", "snake"));
        assert!(empty.is_empty());
        assert_eq!(one.len(), 1);
        assert!(one.contains(&clue("crane", "snake")));
    }

    #[test]
    fn lenient_contains_strict() {
        let set = ClueSet::new()
            .with(clue("crane", "snake"))
            .with(clue("place", "snake"));
        for w in words(POOL) {
            if set.all_match(&w) {
                assert!(set.any_match(&w), "{w} strictly but not leniently matched");
            }
        }
    }

    #[test]
    fn strict_and_lenient_filters_preserve_order() {
        let set = ClueSet::new()
            .with(clue("crane", "snake"))
            .with(clue("slate", "snake"));
        let pool = words(POOL);

        let strict: Vec<&str> = set.iter_matches(&pool).map(Word::text).collect();
        assert_eq!(strict, vec!["snake"]);

        let lenient: Vec<&str> = set.iter_fuzzy_matches(&pool).map(Word::text).collect();
        let positions: Vec<usize> = lenient
            .iter()
            .map(|w| POOL.iter().position(|p| p == w).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(lenient, vec!["snake", "shake", "spade", "shade"]);
    }

    #[test]
    fn filters_are_restartable() {
        let set = ClueSet::new().with(clue("crane", "snake"));
        let pool = words(POOL);
        let first: Vec<&Word> = set.iter_matches(&pool).collect();
        let second: Vec<&Word> = set.iter_matches(&pool).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn union_and_from_iterator_agree() {
        let a = ClueSet::new().with(clue("crane", "snake"));
        let b = ClueSet::new().with(clue("slate", "snake"));
        let collected: ClueSet = [clue("slate", "snake"), clue("crane", "snake")]
            .into_iter()
            .collect();
        assert_eq!(a.union(&b), collected);
        assert_eq!(a.union(&a), a);
    }
}
