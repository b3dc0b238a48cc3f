//! Display functions for command results

use super::formatters::{emoji_trail, guesses_noun};
use crate::commands::SolveResult;
use colored::Colorize;
use std::io::{self, Write};

/// Write a simulated game: one `guess<TAB>pattern` line per step, then a summary
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_solve_result<W: Write>(out: &mut W, result: &SolveResult) -> io::Result<()> {
    for clue in &result.clues {
        writeln!(out, "{clue}")?;
    }

    let count = result.guess_count();
    let summary = if result.success() {
        format!("Solved {} in {count} {}", result.target, guesses_noun(count))
            .green()
            .bold()
    } else {
        format!(
            "Did not solve {} in {count} {}",
            result.target,
            guesses_noun(count)
        )
        .red()
        .bold()
    };
    writeln!(out, "{summary}  {}", emoji_trail(&result.clues))
}

/// Write the notice shown when the clues leave nothing to guess
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_no_guesses<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        "No candidates match these clues.".yellow().bold()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Clue, Word};

    fn result(target: &str, steps: &[(&str, &str)]) -> SolveResult {
        SolveResult {
            target: Word::new(target).unwrap(),
            clues: steps
                .iter()
                .map(|(guess, pattern)| Clue::parse(guess, pattern).unwrap())
                .collect(),
        }
    }

    #[test]
    fn solved_result_lists_steps_and_summary() {
        let mut out = Vec::new();
        let solved = result("snake", &[("there", "00002"), ("snake", "22222")]);
        write_solve_result(&mut out, &solved).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "there\t00002");
        assert_eq!(lines[1], "snake\t22222");
        assert!(lines[2].contains("Solved snake in 2 guesses"));
        assert!(lines[2].ends_with("⬜⬜⬜⬜🟩 🟩🟩🟩🟩🟩"));
    }

    #[test]
    fn failed_result_says_so() {
        let mut out = Vec::new();
        let failed = result("abcde", &[("there", "00002")]);
        write_solve_result(&mut out, &failed).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Did not solve abcde in 1 guess"));
    }

    #[test]
    fn no_guesses_notice() {
        let mut out = Vec::new();
        write_no_guesses(&mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("No candidates"));
    }
}
