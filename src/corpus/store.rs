//! In-memory word corpus indexed by jamo length
//!
//! The corpus is built once with a [`CorpusBuilder`] and is read-only
//! afterwards, so it can be shared by any number of game sessions.

use crate::core::{Jamo, Word};
use crate::error::{CorpusError, WordError};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;
use std::ops::RangeInclusive;

/// Default accepted jamo length range
pub const DEFAULT_JAMO_RANGE: RangeInclusive<usize> = 5..=7;

/// Why a word was refused by the builder
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    #[error(transparent)]
    Invalid(#[from] WordError),

    #[error("{jamo_count} jamo is outside the accepted range {min}..={max}")]
    Length {
        jamo_count: usize,
        min: usize,
        max: usize,
    },
}

/// Result of a single insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// The word was already present; the first insertion is kept
    Duplicate,
    Rejected(RejectReason),
}

/// Counters accumulated while building a corpus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub inserted: usize,
    pub duplicated: usize,
    pub rejected: usize,
    pub malformed: usize,
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} inserted, {} duplicates, {} rejected, {} malformed",
            self.inserted, self.duplicated, self.rejected, self.malformed
        )
    }
}

/// Collects `(word, frequency)` pairs and produces a sorted [`Corpus`]
#[derive(Debug)]
pub struct CorpusBuilder {
    jamo_range: RangeInclusive<usize>,
    seen: FxHashSet<String>,
    words: Vec<Word>,
    report: LoadReport,
}

impl Default for CorpusBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_JAMO_RANGE)
    }
}

impl CorpusBuilder {
    #[must_use]
    pub fn new(jamo_range: RangeInclusive<usize>) -> Self {
        Self {
            jamo_range,
            seen: FxHashSet::default(),
            words: Vec::new(),
            report: LoadReport::default(),
        }
    }

    /// Insert a word, keeping the first occurrence of duplicates
    ///
    /// # Examples
    /// ```
    /// use hongdle::corpus::{CorpusBuilder, InsertOutcome};
    ///
    /// let mut builder = CorpusBuilder::default();
    /// assert_eq!(builder.insert("사람", 9120), InsertOutcome::Inserted);
    /// assert_eq!(builder.insert("사람", 1), InsertOutcome::Duplicate);
    /// assert!(matches!(builder.insert("물", 10), InsertOutcome::Rejected(_)));
    /// ```
    pub fn insert(&mut self, text: &str, frequency: u64) -> InsertOutcome {
        let outcome = match self.validate(text, frequency) {
            Err(reason) => InsertOutcome::Rejected(reason),
            Ok(_) if self.seen.contains(text) => InsertOutcome::Duplicate,
            Ok(word) => {
                self.seen.insert(text.to_string());
                self.words.push(word);
                InsertOutcome::Inserted
            }
        };

        match &outcome {
            InsertOutcome::Inserted => self.report.inserted += 1,
            InsertOutcome::Duplicate => self.report.duplicated += 1,
            InsertOutcome::Rejected(reason) => {
                log::debug!("Rejected {text}: {reason}");
                self.report.rejected += 1;
            }
        }
        outcome
    }

    fn validate(&self, text: &str, frequency: u64) -> Result<Word, RejectReason> {
        let word = Word::with_frequency(text, frequency)?;
        if !self.jamo_range.contains(&word.len()) {
            return Err(RejectReason::Length {
                jamo_count: word.len(),
                min: *self.jamo_range.start(),
                max: *self.jamo_range.end(),
            });
        }
        Ok(word)
    }

    /// Count a source line that could not be parsed
    pub fn note_malformed(&mut self) {
        self.report.malformed += 1;
    }

    #[must_use]
    pub const fn report(&self) -> LoadReport {
        self.report
    }

    /// Sort each length bucket by frequency descending, then word ascending
    #[must_use]
    pub fn build(self) -> Corpus {
        let mut by_length: BTreeMap<usize, Vec<Word>> = BTreeMap::new();
        for word in self.words {
            by_length.entry(word.len()).or_default().push(word);
        }

        let mut index = FxHashMap::default();
        for (&length, bucket) in &mut by_length {
            bucket.sort_by(|a, b| {
                b.frequency()
                    .cmp(&a.frequency())
                    .then_with(|| a.text().cmp(b.text()))
            });
            for (position, word) in bucket.iter().enumerate() {
                index.insert(word.text().to_string(), (length, position));
            }
        }

        Corpus {
            by_length,
            index,
            jamo_range: self.jamo_range,
        }
    }
}

/// Word count summary of a corpus
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CorpusStatistics {
    pub total: usize,
    /// Words per jamo length, ascending by length
    pub by_length: BTreeMap<usize, usize>,
}

impl fmt::Display for CorpusStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} words", self.total)?;
        for (length, count) in &self.by_length {
            write!(f, ", {length} jamo: {count}")?;
        }
        Ok(())
    }
}

/// Read-only word index queried by jamo length
#[derive(Debug, Clone)]
pub struct Corpus {
    by_length: BTreeMap<usize, Vec<Word>>,
    index: FxHashMap<String, (usize, usize)>,
    jamo_range: RangeInclusive<usize>,
}

impl Default for Corpus {
    fn default() -> Self {
        CorpusBuilder::default().build()
    }
}

impl Corpus {
    /// Words with exactly `length` jamo, most frequent first
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> &[Word] {
        self.by_length.get(&length).map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        let &(length, position) = self.index.get(text)?;
        self.by_length.get(&length)?.get(position)
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.index.contains_key(text)
    }

    /// Lengths that have at least one word, ascending
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.by_length.keys().copied()
    }

    /// All words, grouped by ascending length
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.by_length.values().flatten()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// The jamo length range this corpus was built with
    #[must_use]
    pub const fn jamo_range(&self) -> &RangeInclusive<usize> {
        &self.jamo_range
    }

    #[must_use]
    pub fn statistics(&self) -> CorpusStatistics {
        CorpusStatistics {
            total: self.len(),
            by_length: self
                .by_length
                .iter()
                .map(|(&length, words)| (length, words.len()))
                .collect(),
        }
    }

    /// Count of each jamo at each position over the words of one length
    ///
    /// Entry `i` maps a jamo to the number of words holding it at position
    /// `i`. Empty when no word has `length` jamo.
    #[must_use]
    pub fn jamo_frequency_by_position(&self, length: usize) -> Vec<BTreeMap<Jamo, usize>> {
        let words = self.words_of_length(length);
        if words.is_empty() {
            return Vec::new();
        }
        let mut positions = vec![BTreeMap::new(); length];
        for word in words {
            for (counts, &jamo) in positions.iter_mut().zip(word.jamo()) {
                *counts.entry(jamo).or_default() += 1;
            }
        }
        positions
    }

    /// Write records as a JSON array, optionally limited to one length
    ///
    /// # Errors
    /// Returns `CorpusError::Export` if serialization or the write fails.
    pub fn export_json<W: Write>(
        &self,
        writer: W,
        length: Option<usize>,
    ) -> Result<(), CorpusError> {
        let records: Vec<_> = match length {
            Some(length) => self.words_of_length(length).iter().map(Word::record).collect(),
            None => self.iter().map(Word::record).collect(),
        };
        serde_json::to_writer_pretty(writer, &records)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(entries: &[(&str, u64)]) -> Corpus {
        let mut builder = CorpusBuilder::default();
        for &(word, frequency) in entries {
            builder.insert(word, frequency);
        }
        builder.build()
    }

    #[test]
    fn builder_rejects_invalid_and_out_of_range() {
        let mut builder = CorpusBuilder::default();
        assert!(matches!(
            builder.insert("사람1", 10),
            InsertOutcome::Rejected(RejectReason::Invalid(_))
        ));
        // 물 ㅁㅜㄹ is 3 jamo
        assert_eq!(
            builder.insert("물", 10),
            InsertOutcome::Rejected(RejectReason::Length {
                jamo_count: 3,
                min: 5,
                max: 7
            })
        );
        // 대한민국 is 12 jamo
        assert!(matches!(
            builder.insert("대한민국", 10),
            InsertOutcome::Rejected(RejectReason::Length { jamo_count: 12, .. })
        ));
        assert_eq!(builder.report().rejected, 3);
        assert_eq!(builder.report().inserted, 0);
    }

    #[test]
    fn builder_first_insertion_wins() {
        let mut builder = CorpusBuilder::default();
        builder.insert("국군", 2150);
        assert_eq!(builder.insert("국군", 5), InsertOutcome::Duplicate);
        let report = builder.report();
        let corpus = builder.build();

        assert_eq!(report.inserted, 1);
        assert_eq!(report.duplicated, 1);
        assert_eq!(corpus.find("국군").map(Word::frequency), Some(2150));
    }

    #[test]
    fn buckets_sorted_by_frequency_then_word() {
        let corpus = corpus(&[("시간", 10), ("사람", 50), ("사회", 10), ("국군", 7)]);

        let five: Vec<_> = corpus.words_of_length(5).iter().map(Word::text).collect();
        assert_eq!(five, ["사람", "사회", "시간"]);
        let six: Vec<_> = corpus.words_of_length(6).iter().map(Word::text).collect();
        assert_eq!(six, ["국군"]);
        assert!(corpus.words_of_length(7).is_empty());
    }

    #[test]
    fn find_after_sorting() {
        let corpus = corpus(&[("시간", 10), ("사람", 50), ("사회", 20)]);
        for text in ["시간", "사람", "사회"] {
            assert_eq!(corpus.find(text).map(Word::text), Some(text));
        }
        assert!(corpus.find("국군").is_none());
        assert!(corpus.contains("사람"));
    }

    #[test]
    fn statistics_by_length() {
        let corpus = corpus(&[("시간", 10), ("사람", 50), ("국군", 7)]);
        let stats = corpus.statistics();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.by_length, BTreeMap::from([(5, 2), (6, 1)]));
        assert_eq!(stats.to_string(), "3 words, 5 jamo: 2, 6 jamo: 1");
        assert_eq!(corpus.lengths().collect::<Vec<_>>(), [5, 6]);
    }

    #[test]
    fn jamo_frequency_by_position_counts_each_slot() {
        use Jamo::*;
        let corpus = corpus(&[("사람", 50), ("시간", 10), ("국군", 7)]);
        let positions = corpus.jamo_frequency_by_position(5);

        // 사람 ㅅㅏㄹㅏㅁ, 시간 ㅅㅣㄱㅏㄴ
        assert_eq!(positions.len(), 5);
        assert_eq!(positions[0], BTreeMap::from([(S, 2)]));
        assert_eq!(positions[1], BTreeMap::from([(A, 1), (I, 1)]));
        assert_eq!(positions[2], BTreeMap::from([(R, 1), (G, 1)]));
        assert_eq!(positions[3], BTreeMap::from([(A, 2)]));
        assert_eq!(positions[4], BTreeMap::from([(M, 1), (N, 1)]));

        let six = corpus.jamo_frequency_by_position(6);
        assert_eq!(six[0], BTreeMap::from([(G, 1)]));
        assert!(corpus.jamo_frequency_by_position(7).is_empty());
    }

    #[test]
    fn export_json_one_length() {
        let corpus = corpus(&[("사람", 50), ("국군", 7)]);
        let mut buffer = Vec::new();
        corpus.export_json(&mut buffer, Some(6)).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["word"], "국군");
        assert_eq!(records[0]["length"], 6);
        assert_eq!(records[0]["jamos"], "ㄱㅜㄱㄱㅜㄴ");
        assert_eq!(records[0]["frequency"], 7);
    }

    #[test]
    fn export_json_everything() {
        let corpus = corpus(&[("사람", 50), ("국군", 7)]);
        let mut buffer = Vec::new();
        corpus.export_json(&mut buffer, None).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn empty_corpus() {
        let corpus = Corpus::default();
        assert!(corpus.is_empty());
        assert_eq!(corpus.statistics().total, 0);
        assert!(corpus.words_of_length(5).is_empty());
    }
}
