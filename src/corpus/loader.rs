//! Frequency list loading utilities
//!
//! Reads `word<TAB>frequency` lines. Blank lines and lines starting with `#`
//! are skipped.

use super::FrequencyTable;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for frequency list files
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// Load a frequency table from a file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read and `LoadError::Parse`
/// for the first malformed line.
///
/// # Examples
/// ```no_run
/// use wordle_solver::corpus::loader::load_from_file;
///
/// let table = load_from_file("data/frequencies.tsv").unwrap();
/// println!("Loaded {} words", table.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<FrequencyTable, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_entries(&content)
}

/// Parse frequency list text
///
/// # Errors
///
/// Returns `LoadError::Parse` naming the first line without exactly a word and
/// a finite, non-negative frequency.
///
/// # Examples
/// ```
/// use wordle_solver::corpus::FrequencySource;
/// use wordle_solver::corpus::loader::parse_entries;
///
/// let table = parse_entries("# ranked\nabout\t0.0012\nsnake\t6.6e-6\n").unwrap();
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.frequency("snake"), 6.6e-6);
/// ```
pub fn parse_entries(content: &str) -> Result<FrequencyTable, LoadError> {
    let mut entries = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let parse_error = |message: String| LoadError::Parse {
            line: i + 1,
            message,
        };

        let mut fields = trimmed.split_whitespace();
        let (Some(word), Some(freq), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(parse_error(format!(
                "expected `word<TAB>frequency`, got {trimmed:?}"
            )));
        };
        let freq: f64 = freq
            .parse()
            .map_err(|e| parse_error(format!("bad frequency {freq:?}: {e}")))?;
        if !freq.is_finite() || freq < 0.0 {
            return Err(parse_error(format!(
                "frequency must be finite and non-negative, got {freq}"
            )));
        }
        entries.push((word.to_string(), freq));
    }

    Ok(FrequencyTable::new(entries))
}
