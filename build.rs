//! Build script to generate the embedded frequency list
//!
//! Reads `word<TAB>frequency` lines and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_frequency_list(
        "data/frequencies.tsv",
        &Path::new(&out_dir).join("frequencies.rs"),
        "FREQUENCIES",
        "English five-letter words with usage frequencies, most common first",
    );

    // Rebuild if the list changes
    println!("cargo:rerun-if-changed=data/frequencies.tsv");
}

fn generate_frequency_list(
    input_path: &str,
    output_path: &Path,
    const_name: &str,
    doc_comment: &str,
) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let entries: Vec<(&str, f64)> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let (word, freq) = line
                .split_once('\t')
                .unwrap_or_else(|| panic!("Missing tab in {input_path}: {line:?}"));
            let freq: f64 = freq
                .trim()
                .parse()
                .unwrap_or_else(|e| panic!("Bad frequency in {input_path}: {line:?}: {e}"));
            (word.trim(), freq)
        })
        .collect();
    let count = entries.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated frequency list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, f64)] = &[").unwrap();

    for (word, freq) in entries {
        writeln!(output, "    ({word:?}, {freq:?}),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
