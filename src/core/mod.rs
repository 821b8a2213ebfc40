//! Core domain types for Hongdle
//!
//! Jamo decomposition, words, feedback patterns and turns. Everything here is
//! pure and has no knowledge of corpora or sessions.

mod analysis;
mod jamo;
mod pattern;
mod turn;
mod word;

pub use analysis::{Expansion, SyllableAnalysis, WordAnalysis, analyze_word};
pub use jamo::{Jamo, Slot, Syllable, decompose, is_hangul_word, jamo_string};
pub use pattern::{Feedback, Pattern};
pub use turn::Turn;
pub use word::{Word, WordRecord};
