//! Main solver interface
//!
//! A `Solver` is an immutable state: the clues gathered so far, the corpus,
//! and the mode settings. Everything derived from it (candidates, scores,
//! rankings, successor states) is computed on first use and kept for the life
//! of the state. Applying a clue builds a new state; the old one stays valid.

use super::entropy::score_guess;
use super::path::Path;
use crate::config::DEFAULT_MIN_FREQ_RATIO;
use crate::core::{Clue, ClueError, ClueSet, Word};
use crate::corpus::Corpus;
use log::debug;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

/// Solver mode settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Only guess words that could still be the answer
    pub hard_mode: bool,
    /// Weighted-head cutoff applied to candidate streams
    pub min_freq_ratio: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            hard_mode: false,
            min_freq_ratio: DEFAULT_MIN_FREQ_RATIO,
        }
    }
}

/// Guess ranking for one state of a game
///
/// Cheap to clone: clones share the same state and caches. Equality and
/// hashing are by value (clues, corpus, settings).
#[derive(Clone)]
pub struct Solver {
    state: Arc<State>,
}

struct State {
    clues: ClueSet,
    corpus: Arc<Corpus>,
    config: SolverConfig,
    matches: OnceLock<Vec<Word>>,
    choices: OnceLock<Vec<Word>>,
    best_guesses: OnceLock<Vec<(Word, f64)>>,
    successors: Mutex<FxHashMap<Clue, Solver>>,
}

impl Solver {
    /// Create a solver with no clues yet
    #[must_use]
    pub fn new(corpus: Arc<Corpus>, config: SolverConfig) -> Self {
        Self::from_parts(ClueSet::new(), corpus, config)
    }

    fn from_parts(clues: ClueSet, corpus: Arc<Corpus>, config: SolverConfig) -> Self {
        Self {
            state: Arc::new(State {
                clues,
                corpus,
                config,
                matches: OnceLock::new(),
                choices: OnceLock::new(),
                best_guesses: OnceLock::new(),
                successors: Mutex::new(FxHashMap::default()),
            }),
        }
    }

    #[must_use]
    pub fn clues(&self) -> &ClueSet {
        &self.state.clues
    }

    #[must_use]
    pub fn corpus(&self) -> &Arc<Corpus> {
        &self.state.corpus
    }

    #[must_use]
    pub fn config(&self) -> SolverConfig {
        self.state.config
    }

    /// Whether some clue already has an all-correct pattern
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.clues().iter().any(Clue::is_solved)
    }

    /// Candidates consistent with every clue, capped by weighted-head truncation
    ///
    /// Ordered from most to least frequent. May be empty when clues contradict
    /// each other.
    #[must_use]
    pub fn matches(&self) -> &[Word] {
        self.state.matches.get_or_init(|| {
            let corpus = self.corpus();
            let matches: Vec<Word> = corpus
                .iter_weighted_head(
                    self.config().min_freq_ratio,
                    self.clues().iter_matches(corpus.iter()),
                )
                .cloned()
                .collect();
            debug!(
                "{} clues leave {} matches of {} corpus words",
                self.clues().len(),
                matches.len(),
                corpus.len()
            );
            matches
        })
    }

    /// Words worth guessing
    ///
    /// In hard mode, or before two clues are known, these are the matches. In
    /// soft mode they are extended by the weighted head of words that satisfy
    /// at least one clue, which may be informative without being possible.
    #[must_use]
    pub fn choices(&self) -> &[Word] {
        if self.config().hard_mode || self.clues().len() < 2 {
            return self.matches();
        }
        self.state.choices.get_or_init(|| {
            let corpus = self.corpus();
            let matches = self.matches();
            let mut seen: FxHashSet<&Word> = matches.iter().collect();

            let mut choices = matches.to_vec();
            choices.extend(
                corpus
                    .iter_weighted_head(
                        self.config().min_freq_ratio,
                        self.clues().iter_fuzzy_matches(corpus.iter()),
                    )
                    .filter(|word| seen.insert(*word))
                    .cloned(),
            );
            debug!(
                "{} choices ({} beyond the matches)",
                choices.len(),
                choices.len() - matches.len()
            );
            choices
        })
    }

    /// Score a guess against the current matches
    ///
    /// In `[0, 1]`, and `0.0` when nothing matches.
    #[must_use]
    pub fn score(&self, guess: &Word) -> f64 {
        score_guess(guess, self.matches(), self.corpus())
    }

    /// Choices with a positive score, best first
    ///
    /// Equal scores keep their choice order.
    #[must_use]
    pub fn best_guesses(&self) -> &[(Word, f64)] {
        self.state.best_guesses.get_or_init(|| {
            let matches = self.matches();
            let corpus = self.corpus().as_ref();

            let mut scored: Vec<(Word, f64)> = self
                .choices()
                .par_iter()
                .map(|guess| (guess.clone(), score_guess(guess, matches, corpus)))
                .filter(|(_, score)| *score > 0.0)
                .collect();
            scored.sort_by(|a, b| b.1.total_cmp(&a.1));

            if let Some((best, score)) = scored.first() {
                debug!("best of {} guesses: {best} ({score:.4})", scored.len());
            }
            scored
        })
    }

    /// Top-ranked guess, if any
    #[must_use]
    pub fn best_guess(&self) -> Option<&Word> {
        self.best_guesses().first().map(|(word, _)| word)
    }

    /// State after learning `clue`
    ///
    /// Results are memoized per clue, and a clue already known returns an
    /// equal state. The guess must have the corpus word length; see
    /// [`Solver::try_with_clue`] for a checked version.
    #[must_use]
    pub fn with_clue(&self, clue: Clue) -> Self {
        debug_assert_eq!(
            clue.guess().len(),
            self.corpus().word_len(),
            "clue length differs from corpus word length"
        );
        if self.clues().contains(&clue) {
            return self.clone();
        }

        let mut successors = self
            .state
            .successors
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        successors
            .entry(clue)
            .or_insert_with_key(|clue| {
                debug!("applying clue {clue}");
                Self::from_parts(
                    self.clues().with(clue.clone()),
                    Arc::clone(self.corpus()),
                    self.config(),
                )
            })
            .clone()
    }

    /// [`Solver::with_clue`], rejecting guesses of the wrong length
    ///
    /// # Errors
    /// Returns `ClueError::WrongWordLength` if the guess length differs from the
    /// corpus word length.
    pub fn try_with_clue(&self, clue: Clue) -> Result<Self, ClueError> {
        let expected = self.corpus().word_len();
        let actual = clue.guess().len();
        if actual != expected {
            return Err(ClueError::WrongWordLength { expected, actual });
        }
        Ok(self.with_clue(clue))
    }

    /// State after learning every clue in `clues`
    #[must_use]
    pub fn with_clues(&self, clues: &ClueSet) -> Self {
        if clues.iter().all(|clue| self.clues().contains(clue)) {
            return self.clone();
        }
        Self::from_parts(
            self.clues().union(clues),
            Arc::clone(self.corpus()),
            self.config(),
        )
    }

    /// Simulate play toward a known answer
    ///
    /// Each step plays the best guess, yields its clue, and moves to the state
    /// with that clue. Stops once the answer is guessed, nothing matches, or
    /// after `max_guesses` steps.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use wordle_solver::core::Word;
    /// use wordle_solver::corpus::{Corpus, CorpusConfig, FrequencyTable};
    /// use wordle_solver::solver::{Solver, SolverConfig};
    ///
    /// let corpus = Corpus::new(&FrequencyTable::embedded(), CorpusConfig::default());
    /// let solver = Solver::new(Arc::new(corpus), SolverConfig::default());
    ///
    /// let target = Word::new("snake").unwrap();
    /// let path: Vec<_> = solver.path_to(&target, 6).collect();
    /// assert_eq!(path.last().unwrap().guess(), &target);
    /// ```
    #[must_use]
    pub fn path_to(&self, target: &Word, max_guesses: usize) -> Path {
        Path::new(self.clone(), target.clone(), max_guesses)
    }
}

impl PartialEq for Solver {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
            || (self.state.clues == other.state.clues
                && (Arc::ptr_eq(&self.state.corpus, &other.state.corpus)
                    || self.state.corpus == other.state.corpus)
                && self.state.config.hard_mode == other.state.config.hard_mode
                && self.state.config.min_freq_ratio.to_bits()
                    == other.state.config.min_freq_ratio.to_bits())
    }
}

impl Eq for Solver {}

impl Hash for Solver {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.clues.hash(state);
        self.state.corpus.word_len().hash(state);
        self.state.corpus.len().hash(state);
        self.state.config.hard_mode.hash(state);
        self.state.config.min_freq_ratio.to_bits().hash(state);
    }
}

impl fmt::Debug for Solver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Solver")
            .field("clues", &self.state.clues)
            .field("corpus_len", &self.state.corpus.len())
            .field("config", &self.state.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{CorpusConfig, FrequencyTable};

    fn english() -> Arc<Corpus> {
        Arc::new(Corpus::new(
            &FrequencyTable::embedded(),
            CorpusConfig::default(),
        ))
    }

    fn solver(hard_mode: bool) -> Solver {
        Solver::new(
            english(),
            SolverConfig {
                hard_mode,
                min_freq_ratio: 0.5,
            },
        )
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn clue(guess: &str, target: &str) -> Clue {
        Clue::from_target(word(guess), &word(target))
    }

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn matches_without_clues_are_the_weighted_head() {
        let s = solver(false);
        assert_eq!(
            texts(s.matches()),
            vec!["about", "there", "their", "which", "would"]
        );
        assert_eq!(s.choices(), s.matches());
    }

    #[test]
    fn matches_satisfy_every_clue() {
        let c = clue("crane", "snake");
        let s = solver(false).with_clue(c.clone());
        assert!(!s.matches().is_empty());
        assert!(s.matches().iter().all(|w| c.matches(w)));
    }

    #[test]
    fn with_clue_leaves_receiver_untouched() {
        let start = solver(false);
        let before = start.matches().to_vec();
        let next = start.with_clue(clue("there", "snake"));

        assert!(start.clues().is_empty());
        assert_eq!(start.matches(), before.as_slice());
        assert_eq!(next.clues().len(), 1);
        assert_ne!(start, next);
    }

    #[test]
    fn with_clue_is_memoized_and_idempotent() {
        let start = solver(false);
        let a = start.with_clue(clue("there", "snake"));
        let b = start.with_clue(clue("there", "snake"));
        assert!(Arc::ptr_eq(&a.state, &b.state));

        let again = a.with_clue(clue("there", "snake"));
        assert_eq!(again, a);
        assert_eq!(again.matches(), a.matches());
    }

    #[test]
    fn with_clues_matches_chained_with_clue() {
        let start = solver(false);
        let chained = start
            .with_clue(clue("there", "snake"))
            .with_clue(clue("cause", "snake"));
        let set = ClueSet::new()
            .with(clue("cause", "snake"))
            .with(clue("there", "snake"));
        let bulk = start.with_clues(&set);

        assert_eq!(chained, bulk);
        assert_eq!(chained.matches(), bulk.matches());
    }

    #[test]
    fn try_with_clue_rejects_wrong_length() {
        let s = solver(false);
        let short = Clue::parse("snak", "0000").unwrap();
        assert!(matches!(
            s.try_with_clue(short),
            Err(ClueError::WrongWordLength {
                expected: 5,
                actual: 4
            })
        ));
        assert!(s.try_with_clue(clue("there", "snake")).is_ok());
    }

    #[test]
    fn hard_mode_choices_are_matches() {
        let s = solver(true)
            .with_clue(clue("there", "snake"))
            .with_clue(clue("cause", "snake"));
        assert_eq!(s.choices(), s.matches());
    }

    #[test]
    fn soft_mode_choices_extend_matches_without_duplicates() {
        let s = solver(false)
            .with_clue(clue("there", "snake"))
            .with_clue(clue("cause", "snake"));
        let matches = s.matches();
        let choices = s.choices();

        assert_eq!(&choices[..matches.len()], matches);
        assert!(choices.len() > matches.len());
        let unique: FxHashSet<&Word> = choices.iter().collect();
        assert_eq!(unique.len(), choices.len());
        assert!(choices.iter().all(|w| s.clues().any_match(w)));
    }

    #[test]
    fn best_guesses_sorted_and_positive() {
        let s = solver(false).with_clue(clue("there", "snake"));
        let best = s.best_guesses();
        assert!(!best.is_empty());
        assert!(best.iter().all(|(_, score)| *score > 0.0 && *score <= 1.0));
        assert!(best.windows(2).all(|pair| pair[0].1 >= pair[1].1));
        assert_eq!(s.best_guess(), Some(&best[0].0));
    }

    #[test]
    fn best_guesses_scores_agree_with_score() {
        let s = solver(false).with_clue(clue("there", "snake"));
        for (guess, score) in s.best_guesses() {
            assert!((s.score(guess) - score).abs() < 1e-12);
        }
    }

    #[test]
    fn scores_stay_in_unit_interval() {
        let s = solver(false);
        for guess in s.corpus().words().iter().take(50) {
            let score = s.score(guess);
            assert!((0.0..=1.0).contains(&score), "{guess}: {score}");
        }
    }

    #[test]
    fn contradictory_clues_degrade_to_empty() {
        let s = solver(false).with_clue(Clue::parse("zzzzz", "22222").unwrap());
        assert!(s.matches().is_empty());
        assert!(s.choices().is_empty());
        assert!(s.best_guesses().is_empty());
        assert!(s.score(&word("snake")).abs() < f64::EPSILON);
        assert_eq!(s.path_to(&word("snake"), 6).count(), 0);
    }

    #[test]
    fn path_to_snake_soft_mode() {
        let path: Vec<String> = solver(false)
            .path_to(&word("snake"), 6)
            .map(|clue| clue.to_string())
            .collect();
        assert_eq!(
            path,
            vec![
                "there\t00002",
                "cause\t01012",
                "place\t00202",
                "snake\t22222"
            ]
        );
    }

    #[test]
    fn path_to_snake_hard_mode() {
        let path: Vec<Clue> = solver(true).path_to(&word("snake"), 6).collect();
        let guesses: Vec<&str> = path.iter().map(|c| c.guess().text()).collect();
        assert_eq!(guesses, vec!["there", "cause", "slave", "snake"]);
        assert!(path.last().unwrap().is_solved());

        // Hard mode only ever guesses words that were still possible
        let mut state = solver(true);
        for step in &path {
            assert!(state.matches().contains(step.guess()));
            state = state.with_clue(step.clone());
        }
        assert!(state.is_solved());
    }

    #[test]
    fn path_to_word_outside_corpus_stops_early() {
        for hard_mode in [false, true] {
            let path: Vec<Clue> = solver(hard_mode).path_to(&word("abcde"), 6).collect();
            assert!(path.len() > 1);
            assert!(path.len() < 6);
            assert!(path.iter().all(|c| !c.is_solved()));
        }
    }

    #[test]
    fn path_respects_guess_budget() {
        assert_eq!(solver(false).path_to(&word("snake"), 2).count(), 2);
        assert_eq!(solver(false).path_to(&word("snake"), 0).count(), 0);
    }

    #[test]
    fn path_is_restartable() {
        let s = solver(false);
        let first: Vec<Clue> = s.path_to(&word("crane"), 6).collect();
        let second: Vec<Clue> = s.path_to(&word("crane"), 6).collect();
        assert_eq!(first, second);
        assert_eq!(first.last().unwrap().guess().text(), "crane");
    }

    #[test]
    fn solvers_compare_by_value() {
        let corpus = english();
        let a = Solver::new(Arc::clone(&corpus), SolverConfig::default());
        let b = Solver::new(Arc::clone(&corpus), SolverConfig::default());
        let hard = Solver::new(
            corpus,
            SolverConfig {
                hard_mode: true,
                ..SolverConfig::default()
            },
        );
        assert_eq!(a, b);
        assert_ne!(a, hard);

        let mut cache: FxHashMap<Solver, usize> = FxHashMap::default();
        cache.insert(a, 1);
        assert_eq!(cache.get(&b), Some(&1));
    }
}
