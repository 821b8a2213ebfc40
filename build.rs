//! Build script to generate the embedded seed corpus
//!
//! Reads `word frequency` lines and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_seed_corpus(
        "data/words.txt",
        &Path::new(&out_dir).join("seed_words.rs"),
        "SEED_WORDS",
        "Seed corpus of common Korean nouns with usage frequencies",
    );

    // Rebuild if the word list changes
    println!("cargo:rerun-if-changed=data/words.txt");
}

fn generate_seed_corpus(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let entries: Vec<(&str, u64)> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let mut parts = line.split_whitespace();
            let word = parts.next().unwrap_or_default();
            let frequency = parts
                .next()
                .and_then(|f| f.parse().ok())
                .unwrap_or_else(|| panic!("Bad frequency in {input_path}: {line}"));
            (word, frequency)
        })
        .collect();
    let count = entries.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated seed corpus").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, u64)] = &[").unwrap();

    for (word, frequency) in entries {
        writeln!(output, "    (\"{word}\", {frequency}),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
