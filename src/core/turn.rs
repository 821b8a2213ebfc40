//! A single scored guess

use super::{Feedback, Jamo, Pattern, decompose};
use crate::error::SessionError;
use std::fmt;

/// One guess with its feedback, never mutated once created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    index: usize,
    word: String,
    jamo: Vec<Jamo>,
    pattern: Pattern,
}

impl Turn {
    /// Build a turn, checking that the pattern covers every jamo of the guess
    ///
    /// # Errors
    /// Returns `SessionError::Word` if the guess is not Hangul, and
    /// `SessionError::LengthMismatch` if the pattern length differs from the
    /// guess's jamo count.
    pub fn new(index: usize, word: &str, pattern: Pattern) -> Result<Self, SessionError> {
        let jamo = decompose(word)?;
        if jamo.len() != pattern.len() {
            return Err(SessionError::LengthMismatch {
                jamo_count: jamo.len(),
                pattern_len: pattern.len(),
            });
        }

        Ok(Self {
            index,
            word: word.to_string(),
            jamo,
            pattern,
        })
    }

    /// 1-based turn number
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn jamo(&self) -> &[Jamo] {
        &self.jamo
    }

    #[inline]
    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Jamo paired with their feedback, position by position
    pub fn scored(&self) -> impl Iterator<Item = (usize, Jamo, Feedback)> + '_ {
        self.jamo
            .iter()
            .zip(self.pattern.symbols())
            .enumerate()
            .map(|(position, (&jamo, &feedback))| (position, jamo, feedback))
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} → {}", self.index, self.word, self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_pairs_jamo_with_feedback() {
        let turn = Turn::new(1, "국군", "YBBBBY".parse().unwrap()).unwrap();
        let scored: Vec<_> = turn.scored().collect();
        assert_eq!(scored.len(), 6);
        assert_eq!(scored[0], (0, Jamo::G, Feedback::Yellow));
        assert_eq!(scored[5], (5, Jamo::N, Feedback::Yellow));
        assert_eq!(turn.to_string(), "1: 국군 → YBBBBY");
    }

    #[test]
    fn turn_rejects_pattern_length_mismatch() {
        let result = Turn::new(1, "국군", "YBBBB".parse().unwrap());
        assert_eq!(
            result,
            Err(SessionError::LengthMismatch {
                jamo_count: 6,
                pattern_len: 5
            })
        );
    }

    #[test]
    fn turn_rejects_non_hangul_guess() {
        let result = Turn::new(1, "abc", "GGG".parse().unwrap());
        assert!(matches!(result, Err(SessionError::Word(_))));
    }
}
