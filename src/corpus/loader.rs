//! Corpus loading utilities
//!
//! Word lists are plain text, one `word frequency` pair per line. Blank lines
//! and `#` comments are skipped; a bare word gets frequency 0.

use super::embedded::SEED_WORDS;
use super::store::{Corpus, CorpusBuilder, LoadReport};
use crate::error::CorpusError;
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

/// One parsed line of a word list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Blank or comment
    Skip,
    Entry { word: &'a str, frequency: u64 },
    /// Unparseable frequency or trailing fields
    Malformed,
}

/// Parse a single word list line
///
/// # Examples
/// ```
/// use hongdle::corpus::loader::{Line, parse_line};
///
/// assert_eq!(parse_line("사람 9120"), Line::Entry { word: "사람", frequency: 9120 });
/// assert_eq!(parse_line("사람"), Line::Entry { word: "사람", frequency: 0 });
/// assert_eq!(parse_line("# comment"), Line::Skip);
/// assert_eq!(parse_line("사람 many"), Line::Malformed);
/// ```
#[must_use]
pub fn parse_line(line: &str) -> Line<'_> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Line::Skip;
    }

    let mut fields = line.split_whitespace();
    let (Some(word), frequency, None) = (fields.next(), fields.next(), fields.next()) else {
        return Line::Malformed;
    };

    match frequency.map(str::parse::<u64>) {
        None => Line::Entry { word, frequency: 0 },
        Some(Ok(frequency)) => Line::Entry { word, frequency },
        Some(Err(_)) => Line::Malformed,
    }
}

/// Feed every line of a word list into a builder
pub fn load_from_str(content: &str, builder: &mut CorpusBuilder) {
    for (number, line) in content.lines().enumerate() {
        match parse_line(line) {
            Line::Skip => {}
            Line::Entry { word, frequency } => {
                builder.insert(word, frequency);
            }
            Line::Malformed => {
                log::warn!("Skipping malformed line {}: {line:?}", number + 1);
                builder.note_malformed();
            }
        }
    }
}

/// Feed a word list file into a builder
///
/// # Errors
/// Returns `CorpusError::Read` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use hongdle::corpus::CorpusBuilder;
/// use hongdle::corpus::loader::load_from_file;
///
/// let mut builder = CorpusBuilder::default();
/// load_from_file("words.txt", &mut builder).unwrap();
/// println!("{}", builder.report());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, builder: &mut CorpusBuilder) -> Result<(), CorpusError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&content, builder);
    Ok(())
}

/// Feed the seed corpus compiled into the binary
pub fn load_embedded(builder: &mut CorpusBuilder) {
    for &(word, frequency) in SEED_WORDS {
        builder.insert(word, frequency);
    }
}

/// Build a corpus from a word list file, or the seed corpus when `path` is `None`
///
/// # Errors
/// Returns `CorpusError::Read` if the file cannot be read.
pub fn load_corpus(
    path: Option<&Path>,
    jamo_range: RangeInclusive<usize>,
) -> Result<(Corpus, LoadReport), CorpusError> {
    let mut builder = CorpusBuilder::new(jamo_range);
    match path {
        Some(path) => load_from_file(path, &mut builder)?,
        None => load_embedded(&mut builder),
    }

    let report = builder.report();
    let corpus = builder.build();
    log::info!(
        "Loaded corpus from {}: {report}; {}",
        path.map_or_else(|| "seed list".to_string(), |p| p.display().to_string()),
        corpus.statistics()
    );
    Ok((corpus, report))
}
