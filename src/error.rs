//! Error types for the Hongdle engine
//!
//! One enum per concern. Every error is local to a single operation: a
//! rejected operation leaves the session, constraint set and corpus untouched.

use crate::core::Jamo;
use crate::session::SessionState;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised when a word cannot be used as a Hangul word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word is empty")]
    Empty,

    #[error("Word must contain only Hangul syllables, found '{ch}' at position {position}")]
    NotHangul { ch: char, position: usize },
}

/// Errors raised when parsing a feedback pattern
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("Pattern is empty")]
    Empty,

    #[error("Invalid feedback symbol '{symbol}' at position {position} (use G, Y or B)")]
    InvalidSymbol { symbol: char, position: usize },
}

/// Contradictory feedback detected while merging a turn into a constraint set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintError {
    #[error("{jamo} was resolved to exactly {recorded} occurrence(s), this turn implies {implied}")]
    ExactCountConflict {
        jamo: Jamo,
        recorded: usize,
        implied: usize,
    },

    #[error("{jamo} is marked both absent from the word and present in it")]
    PresenceConflict { jamo: Jamo },

    #[error("Position {position} is already green as {recorded}, this turn says {implied}")]
    GreenConflict {
        position: usize,
        recorded: Jamo,
        implied: Jamo,
    },
}

/// Errors raised by a game session operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Word(#[from] WordError),

    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    Constraint(#[from] ConstraintError),

    #[error("Word decomposes into {jamo_count} jamo but the pattern has {pattern_len} symbols")]
    LengthMismatch {
        jamo_count: usize,
        pattern_len: usize,
    },

    #[error("This game uses {expected}-jamo words, got a {actual}-jamo word")]
    WordLengthMismatch { expected: usize, actual: usize },

    #[error("Nothing to undo")]
    NothingToUndo,

    #[error("Game is over ({state}); undo or reset to continue")]
    GameOver { state: SessionState },
}

/// Errors raised while loading or exporting a corpus
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("Failed to read corpus {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to export corpus")]
    Export(#[from] serde_json::Error),
}

/// Errors raised while loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid jamo length range: min {min} > max {max}")]
    InvalidRange { min: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_error_wraps_sources_transparently() {
        let err: SessionError = PatternError::InvalidSymbol {
            symbol: 'X',
            position: 2,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid feedback symbol 'X' at position 2 (use G, Y or B)"
        );
    }

    #[test]
    fn conflict_message_names_the_jamo() {
        let err = ConstraintError::ExactCountConflict {
            jamo: Jamo::G,
            recorded: 1,
            implied: 2,
        };
        assert!(err.to_string().starts_with("ㄱ was resolved to exactly 1"));
    }
}
