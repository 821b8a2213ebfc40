//! Hongdle word representation
//!
//! A Word stores the Hangul text, its decomposed jamo sequence and its corpus
//! frequency. The jamo count is the word's length for every game purpose.

use super::jamo::{Jamo, decompose, jamo_string};
use crate::error::WordError;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt;

/// A Hangul word with its jamo decomposition
///
/// Immutable once built; `len()` always equals the number of jamo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    jamo: Vec<Jamo>,
    frequency: u64,
}

/// Serializable view of a word used for JSON export
#[derive(Debug, Serialize)]
pub struct WordRecord<'a> {
    pub word: &'a str,
    pub length: usize,
    pub jamos: String,
    pub frequency: u64,
}

impl Word {
    /// Create a new Word from Hangul text with frequency 0
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains anything other
    /// than precomposed Hangul syllables (digits, Latin, punctuation, spaces,
    /// standalone jamo).
    ///
    /// # Examples
    /// ```
    /// use hongdle::core::Word;
    ///
    /// let word = Word::new("국군").unwrap();
    /// assert_eq!(word.len(), 6);
    ///
    /// assert!(Word::new("국군1").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        Self::with_frequency(text, 0)
    }

    /// Create a new Word carrying a corpus frequency
    ///
    /// # Errors
    /// Same as [`Word::new`].
    pub fn with_frequency(text: impl Into<String>, frequency: u64) -> Result<Self, WordError> {
        let text: String = text.into();
        let jamo = decompose(&text)?;

        Ok(Self {
            text,
            jamo,
            frequency,
        })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The decomposed base jamo sequence
    #[inline]
    #[must_use]
    pub fn jamo(&self) -> &[Jamo] {
        &self.jamo
    }

    /// Number of jamo (not syllables)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.jamo.len()
    }

    /// Always false for a constructed word; present for API symmetry
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.jamo.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn frequency(&self) -> u64 {
        self.frequency
    }

    /// Get the jamo at a specific position
    ///
    /// # Panics
    /// Panics if position >= `len()`
    #[inline]
    #[must_use]
    pub fn jamo_at(&self, position: usize) -> Jamo {
        self.jamo[position]
    }

    /// Check whether every jamo in the word is distinct
    #[must_use]
    pub fn has_unique_jamo(&self) -> bool {
        self.jamo_counts().values().all(|&count| count == 1)
    }

    /// Count occurrences of each jamo
    #[must_use]
    pub fn jamo_counts(&self) -> FxHashMap<Jamo, usize> {
        let mut counts = FxHashMap::default();
        for &jamo in &self.jamo {
            *counts.entry(jamo).or_insert(0) += 1;
        }
        counts
    }

    /// Compact jamo string, e.g. "ㄱㅜㄱㄱㅜㄴ"
    #[must_use]
    pub fn jamo_string(&self) -> String {
        jamo_string(&self.jamo)
    }

    #[must_use]
    pub fn record(&self) -> WordRecord<'_> {
        WordRecord {
            word: &self.text,
            length: self.len(),
            jamos: self.jamo_string(),
            frequency: self.frequency,
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::with_frequency("사람", 9120).unwrap();
        assert_eq!(word.text(), "사람");
        assert_eq!(word.len(), 5);
        assert_eq!(word.frequency(), 9120);
        assert_eq!(word.jamo_string(), "ㅅㅏㄹㅏㅁ");
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("사람1").is_err()); // Digit
        assert!(Word::new("사 람").is_err()); // Space
        assert!(Word::new("love").is_err()); // Latin
        assert!(Word::new("사람!").is_err()); // Punctuation
        assert!(matches!(Word::new(""), Err(WordError::Empty)));
    }

    #[test]
    fn word_jamo_at() {
        let word = Word::new("국군").unwrap();
        assert_eq!(word.jamo_at(0), Jamo::G);
        assert_eq!(word.jamo_at(1), Jamo::U);
        assert_eq!(word.jamo_at(5), Jamo::N);
    }

    #[test]
    fn word_jamo_counts() {
        let word = Word::new("국군").unwrap();
        let counts = word.jamo_counts();
        assert_eq!(counts.get(&Jamo::G), Some(&3));
        assert_eq!(counts.get(&Jamo::U), Some(&2));
        assert_eq!(counts.get(&Jamo::N), Some(&1));
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn word_unique_jamo() {
        assert!(Word::new("시간").unwrap().has_unique_jamo());
        assert!(!Word::new("사람").unwrap().has_unique_jamo()); // ㅏ twice
    }

    #[test]
    fn word_record_view() {
        let word = Word::with_frequency("앉다", 3).unwrap();
        let record = word.record();
        assert_eq!(record.word, "앉다");
        assert_eq!(record.length, 6);
        assert_eq!(record.jamos, "ㅇㅏㄴㅈㄷㅏ");
        assert_eq!(record.frequency, 3);
    }

    #[test]
    fn word_display() {
        let word = Word::new("사랑").unwrap();
        assert_eq!(format!("{word}"), "사랑");
    }
}
