//! Weighted-head truncation
//!
//! Walks a frequency-sorted word stream keeping a running mean of the
//! frequencies seen so far (the current word included). Words are emitted while
//! `frequency / running_mean` exceeds the ratio; the stream ends at the first
//! word that fails. Because the mean decays along with the frequencies, the
//! cutoff is relative to each stream's own distribution.
//!
//! The input must be sorted by descending frequency.

use super::Corpus;
use crate::core::Word;
use std::borrow::Borrow;
use std::iter::FusedIterator;

/// Iterator returned by [`Corpus::iter_weighted_head`]
#[derive(Debug, Clone)]
pub struct WeightedHead<'a, I> {
    corpus: &'a Corpus,
    min_freq_ratio: f64,
    words: I,
    seen: usize,
    mean_freq: f64,
    exhausted: bool,
}

impl<'a, I> WeightedHead<'a, I> {
    pub(super) const fn new(corpus: &'a Corpus, min_freq_ratio: f64, words: I) -> Self {
        Self {
            corpus,
            min_freq_ratio,
            words,
            seen: 0,
            mean_freq: 1.0,
            exhausted: false,
        }
    }
}

impl<I> Iterator for WeightedHead<'_, I>
where
    I: Iterator,
    I::Item: Borrow<Word>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let Some(word) = self.words.next() else {
            self.exhausted = true;
            return None;
        };

        self.seen += 1;
        let n = self.seen as f64;
        let freq = self.corpus.frequency(word.borrow().text());
        self.mean_freq = self.mean_freq * ((n - 1.0) / n) + freq * (1.0 / n);

        // A zero mean gives NaN, which also ends the stream
        let keep = freq / self.mean_freq > self.min_freq_ratio;
        if keep {
            Some(word)
        } else {
            self.exhausted = true;
            None
        }
    }
}

impl<I> FusedIterator for WeightedHead<'_, I>
where
    I: Iterator,
    I::Item: Borrow<Word>,
{
}
