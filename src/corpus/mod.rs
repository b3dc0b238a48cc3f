//! Frequency-ranked word corpus
//!
//! Adapts a [`FrequencySource`] into the candidate list the solver works from:
//! words of one configured length, above a minimum frequency, ordered from most
//! to least common.

mod embedded;
pub mod loader;
mod table;
mod weighted;

pub use embedded::{FREQUENCIES, FREQUENCIES_COUNT};
pub use table::{FrequencySource, FrequencyTable};
pub use weighted::WeightedHead;

use crate::config::{DEFAULT_MIN_FREQ, DEFAULT_WORD_LEN};
use crate::core::Word;
use log::{info, warn};
use rustc_hash::FxHashMap;
use std::borrow::Borrow;
use std::collections::hash_map::Entry;

/// Which words of a frequency source make up the corpus
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorpusConfig {
    /// Letters per word
    pub word_len: usize,
    /// Words must be strictly more frequent than this
    pub min_word_freq: f64,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            word_len: DEFAULT_WORD_LEN,
            min_word_freq: DEFAULT_MIN_FREQ,
        }
    }
}

impl CorpusConfig {
    /// Membership test: right length, alphabetic, frequent enough
    #[must_use]
    pub fn admits(&self, word: &str, freq: f64) -> bool {
        word.chars().count() == self.word_len
            && word.chars().all(char::is_alphabetic)
            && freq > self.min_word_freq
    }
}

/// Ranked candidate words with their frequencies
#[derive(Debug, Clone, PartialEq)]
pub struct Corpus {
    config: CorpusConfig,
    words: Vec<Word>,
    frequencies: FxHashMap<Word, f64>,
}

impl Corpus {
    /// Collect the words of `source` admitted by `config`
    ///
    /// The result is stably sorted by descending frequency, which weighted-head
    /// truncation relies on.
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::corpus::{Corpus, CorpusConfig, FrequencyTable};
    ///
    /// let table = FrequencyTable::new([("snake", 2e-5), ("cat", 1e-4), ("shake", 1e-9)]);
    /// let corpus = Corpus::new(&table, CorpusConfig::default());
    ///
    /// assert_eq!(corpus.len(), 1);
    /// assert!(corpus.contains("snake"));
    /// assert!(!corpus.contains("shake"));
    /// ```
    #[must_use]
    pub fn new(source: &impl FrequencySource, config: CorpusConfig) -> Self {
        let mut ranked: Vec<(Word, f64)> = Vec::new();
        let mut frequencies = FxHashMap::default();

        for text in source.iter_wordlist() {
            let freq = source.frequency(text);
            if !config.admits(text, freq) {
                continue;
            }
            match Word::new(text) {
                Ok(word) => {
                    if let Entry::Vacant(slot) = frequencies.entry(word.clone()) {
                        slot.insert(freq);
                        ranked.push((word, freq));
                    }
                }
                Err(e) => warn!("skipping corpus word {text:?}: {e}"),
            }
        }
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        info!(
            "corpus: {} words of length {} with frequency above {}",
            ranked.len(),
            config.word_len,
            config.min_word_freq
        );

        Self {
            config,
            words: ranked.into_iter().map(|(word, _)| word).collect(),
            frequencies,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &CorpusConfig {
        &self.config
    }

    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.config.word_len
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words from most to least frequent
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.frequencies.contains_key(word)
    }

    /// Resolve text to the corpus's own `Word`
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&Word> {
        self.frequencies.get_key_value(word).map(|(word, _)| word)
    }

    /// Frequency of a corpus word, or `0.0` for anything else
    #[must_use]
    pub fn frequency(&self, word: &str) -> f64 {
        self.frequencies.get(word).copied().unwrap_or(0.0)
    }

    /// Truncate a descending-frequency word stream at its weighted head
    ///
    /// See [`WeightedHead`] for the cutoff rule.
    pub fn iter_weighted_head<I>(&self, min_freq_ratio: f64, words: I) -> WeightedHead<'_, I::IntoIter>
    where
        I: IntoIterator,
        I::Item: Borrow<Word>,
    {
        WeightedHead::new(self, min_freq_ratio, words.into_iter())
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
