//! Frequency-weighted entropy scoring
//!
//! A guess splits the remaining candidates' frequency mass into the mass of the
//! guess itself (it might be the answer) and, for every other candidate, the
//! mass behind each feedback pattern the guess could produce.
//!
//! score = 1 - (false_weight / total_weight) × 2^(-H)
//!
//! where H is the Shannon entropy of the per-pattern distribution of the false
//! mass. Likely answers pull the false share down; discriminating guesses push
//! 2^(-H) toward zero.

use crate::core::{Pattern, Word};
use crate::corpus::Corpus;
use rustc_hash::FxHashMap;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Frequency mass of the candidates as partitioned by one guess
#[derive(Debug, Clone, Default)]
pub struct GuessWeights {
    /// Mass of the candidate equal to the guess
    pub true_weight: f64,
    /// Mass of every other candidate
    pub false_weight: f64,
    /// `false_weight` broken down by the pattern each candidate would produce
    pub pattern_weights: FxHashMap<Pattern, f64>,
}

impl GuessWeights {
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.true_weight + self.false_weight
    }

    /// Entropy in bits of the pattern distribution
    #[must_use]
    pub fn entropy(&self) -> f64 {
        shannon_entropy(&self.pattern_weights)
    }

    /// Score in `[0, 1]`; `0.0` when there is no mass at all
    #[must_use]
    pub fn score(&self) -> f64 {
        let total_weight = self.total_weight();
        if total_weight.is_nan() || total_weight <= 0.0 {
            return 0.0;
        }
        let false_share = self.false_weight / total_weight;
        1.0 - false_share * (-self.entropy()).exp2()
    }
}

/// Partition the candidates' frequency mass by what `guess` would reveal
#[must_use]
pub fn weigh_guess(guess: &Word, candidates: &[Word], corpus: &Corpus) -> GuessWeights {
    let mut weights = GuessWeights::default();

    for candidate in candidates {
        let freq = corpus.frequency(candidate.text());
        if candidate == guess {
            weights.true_weight += freq;
        } else {
            weights.false_weight += freq;
            *weights
                .pattern_weights
                .entry(Pattern::calculate(guess, candidate))
                .or_insert(0.0) += freq;
        }
    }

    weights
}

/// Score a guess against candidate answers
///
/// Returns `0.0` when there are no candidates.
///
/// # Examples
/// ```
/// use wordle_solver::core::Word;
/// use wordle_solver::corpus::{Corpus, CorpusConfig, FrequencyTable};
/// use wordle_solver::solver::score_guess;
///
/// let table = FrequencyTable::new([("snake", 0.5), ("shake", 0.5)]);
/// let corpus = Corpus::new(&table, CorpusConfig::default());
/// let candidates = corpus.words().to_vec();
///
/// // Half the mass is the guess itself, the other half is fully resolved
/// let score = score_guess(&Word::new("snake").unwrap(), &candidates, &corpus);
/// assert!((score - 0.5).abs() < 1e-12);
/// ```
#[must_use]
pub fn score_guess(guess: &Word, candidates: &[Word], corpus: &Corpus) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }
    weigh_guess(guess, candidates, corpus).score()
}

/// Calculate Shannon entropy from a weighted pattern distribution
///
/// H = -Σ p * log₂(p), with each p the pattern's share of the total weight.
///
/// # Properties
/// - Returns 0.0 for a certain outcome (one pattern) or no outcomes
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n patterns
#[must_use]
pub fn shannon_entropy<S>(pattern_weights: &HashMap<Pattern, f64, S>) -> f64
where
    S: BuildHasher,
{
    let total: f64 = pattern_weights.values().sum();

    if total <= 0.0 {
        return 0.0;
    }

    pattern_weights
        .values()
        .filter(|&&weight| weight > 0.0)
        .map(|&weight| {
            let p = weight / total;
            -p * p.log2()
        })
        .sum()
}
