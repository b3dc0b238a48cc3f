//! Default settings shared by the library and the command line

/// Letters per word
pub const DEFAULT_WORD_LEN: usize = 5;

/// Guesses allowed in a game
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Corpus words must be strictly more frequent than this
pub const DEFAULT_MIN_FREQ: f64 = 1e-6;

/// Weighted-head cutoff: a word is kept while its frequency divided by the
/// running mean frequency exceeds this ratio
///
/// Lower values keep more candidates (slower, more precise).
pub const DEFAULT_MIN_FREQ_RATIO: f64 = 0.5;

/// Suggestions printed per turn
pub const DEFAULT_TOP_N: usize = 10;
