//! Ranked word frequencies
//!
//! The solver only needs two things from a language-frequency service: the
//! word list ranked by descending frequency, and a frequency lookup.

use super::embedded::FREQUENCIES;
use rustc_hash::{FxHashMap, FxHashSet};

/// Source of ranked words and their usage frequencies
pub trait FrequencySource {
    /// Words ordered from most to least frequent
    fn iter_wordlist(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Occurrences per word of running text, or `0.0` for unknown words
    fn frequency(&self, word: &str) -> f64;
}

/// In-memory frequency list
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<(String, f64)>,
    index: FxHashMap<String, usize>,
}

impl FrequencyTable {
    /// Build a table from `(word, frequency)` pairs in any order
    ///
    /// Words are lowercased. The first entry wins for repeated words. Entries
    /// are stably sorted by descending frequency.
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::corpus::{FrequencySource, FrequencyTable};
    ///
    /// let table = FrequencyTable::new([("snake", 1e-5), ("about", 1e-3)]);
    /// let ranked: Vec<&str> = table.iter_wordlist().collect();
    /// assert_eq!(ranked, vec!["about", "snake"]);
    /// assert_eq!(table.frequency("snake"), 1e-5);
    /// assert_eq!(table.frequency("zzzzz"), 0.0);
    /// ```
    #[must_use]
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut seen = FxHashSet::default();
        let mut entries: Vec<(String, f64)> = entries
            .into_iter()
            .map(|(word, freq)| (word.into().to_lowercase(), freq))
            .filter(|(word, _)| seen.insert(word.clone()))
            .collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));

        let index = entries
            .iter()
            .enumerate()
            .map(|(i, (word, _))| (word.clone(), i))
            .collect();

        Self { entries, index }
    }

    /// The English list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(FREQUENCIES.iter().copied())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FrequencySource for FrequencyTable {
    fn iter_wordlist(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.entries.iter().map(|(word, _)| word.as_str()))
    }

    fn frequency(&self, word: &str) -> f64 {
        self.index
            .get(word)
            .map_or(0.0, |&i| self.entries[i].1)
    }
}
