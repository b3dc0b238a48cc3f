//! Clue parsing for the command line and interactive input

use crate::core::{Clue, ClueError, ClueSet};
use anyhow::{Context, Result, bail};

/// Parse `guess pattern` token pairs into a clue set
///
/// Every guess must have `word_len` letters.
///
/// # Errors
///
/// Returns an error for an odd number of tokens or for any pair that is not a
/// valid clue of the right length.
///
/// # Examples
/// ```
/// use wordle_solver::commands::parse_clues;
///
/// let clues = parse_clues(&["crane", "00212", "slate", "20202"], 5).unwrap();
/// assert_eq!(clues.len(), 2);
/// assert!(parse_clues(&["crane"], 5).is_err());
/// ```
pub fn parse_clues<S: AsRef<str>>(tokens: &[S], word_len: usize) -> Result<ClueSet> {
    if tokens.len() % 2 != 0 {
        bail!(
            "clues come in `guess pattern` pairs, got {} tokens",
            tokens.len()
        );
    }
    tokens
        .chunks_exact(2)
        .map(|pair| {
            let (guess, pattern) = (pair[0].as_ref(), pair[1].as_ref());
            parse_clue(guess, pattern, word_len)
                .with_context(|| format!("invalid clue `{guess} {pattern}`"))
        })
        .collect()
}

/// Parse one line of interactive input, `guess pattern`
///
/// # Errors
///
/// Returns an error unless the line holds exactly a guess and a pattern that
/// form a valid clue of `word_len` letters.
pub fn parse_clue_line(line: &str, word_len: usize) -> Result<Clue> {
    let mut fields = line.split_whitespace();
    let (Some(guess), Some(pattern), None) = (fields.next(), fields.next(), fields.next()) else {
        bail!("expected `guess pattern`, got {:?}", line.trim());
    };
    Ok(parse_clue(guess, pattern, word_len)?)
}

fn parse_clue(guess: &str, pattern: &str, word_len: usize) -> Result<Clue, ClueError> {
    let clue = Clue::parse(guess, pattern)?;
    if clue.guess().len() != word_len {
        return Err(ClueError::WrongWordLength {
            expected: word_len,
            actual: clue.guess().len(),
        });
    }
    Ok(clue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_become_clues() {
        let clues = parse_clues(&["crane", "00212", "slate", "20202"], 5).unwrap();
        assert_eq!(clues.len(), 2);
        assert!(clues.contains(&Clue::parse("crane", "00212").unwrap()));
    }

    #[test]
    fn no_tokens_is_empty_set() {
        let tokens: [&str; 0] = [];
        assert!(parse_clues(&tokens, 5).unwrap().is_empty());
    }

    #[test]
    fn odd_token_count_is_error() {
        let err = parse_clues(&["crane", "00212", "slate"], 5).unwrap_err();
        assert!(err.to_string().contains("3 tokens"), "{err}");
    }

    #[test]
    fn bad_pair_names_the_clue() {
        let err = parse_clues(&["crane", "00x12"], 5).unwrap_err();
        assert!(err.to_string().contains("crane 00x12"), "{err}");
        assert!(parse_clues(&["crane", "0021"], 5).is_err());
        assert!(parse_clues(&["cranes", "002120"], 5).is_err());
    }

    #[test]
    fn clue_lines() {
        let clue = parse_clue_line("  snake 01210\n", 5).unwrap();
        assert_eq!(clue.to_string(), "snake\t01210");

        assert!(parse_clue_line("", 5).is_err());
        assert!(parse_clue_line("snake", 5).is_err());
        assert!(parse_clue_line("snake 01210 extra", 5).is_err());
        assert!(parse_clue_line("snake 01230", 5).is_err());
        assert!(parse_clue_line("snake 01210", 4).is_err());
    }
}
