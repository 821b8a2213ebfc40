//! Word decomposition report

use super::jamo::{Jamo, Slot, Syllable, jamo_string};
use crate::error::WordError;
use std::ops::RangeInclusive;

/// How a multi-atom slot was expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expansion {
    /// ㄲ ㄸ ㅃ ㅆ ㅉ
    DoubleConsonant,
    /// ㅐ ㅘ ㅙ ...
    CompoundVowel,
    /// ㄳ ㄵ ㄶ ...
    ConsonantCluster,
}

impl Expansion {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::DoubleConsonant => "double consonant",
            Self::CompoundVowel => "compound vowel",
            Self::ConsonantCluster => "consonant cluster",
        }
    }

    fn classify(slot: Slot, atoms: &[Jamo]) -> Self {
        match slot {
            Slot::Vowel => Self::CompoundVowel,
            Slot::Initial => Self::DoubleConsonant,
            Slot::Final if atoms.windows(2).all(|pair| pair[0] == pair[1]) => Self::DoubleConsonant,
            Slot::Final => Self::ConsonantCluster,
        }
    }
}

/// Decomposition of one syllable block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyllableAnalysis {
    pub syllable: char,
    pub jamo: Vec<Jamo>,
    pub expansions: Vec<(Slot, Expansion, &'static [Jamo])>,
}

/// Full decomposition of a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordAnalysis {
    pub word: String,
    pub jamo: Vec<Jamo>,
    pub syllables: Vec<SyllableAnalysis>,
    /// Whether the jamo count falls in the accepted range
    pub playable: bool,
}

impl WordAnalysis {
    #[must_use]
    pub fn len(&self) -> usize {
        self.jamo.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.jamo.is_empty()
    }

    #[must_use]
    pub fn jamo_string(&self) -> String {
        jamo_string(&self.jamo)
    }

    /// True when any syllable needed expansion
    #[must_use]
    pub fn has_expansions(&self) -> bool {
        self.syllables.iter().any(|s| !s.expansions.is_empty())
    }
}

/// Break a word down syllable by syllable
///
/// # Errors
/// Returns `WordError` for empty or non-Hangul input.
///
/// # Examples
/// ```
/// use hongdle::core::{Expansion, analyze_word};
///
/// let analysis = analyze_word("앉다", &(5..=7)).unwrap();
/// assert_eq!(analysis.jamo_string(), "ㅇㅏㄴㅈㄷㅏ");
/// assert!(analysis.playable);
/// assert_eq!(analysis.syllables[0].expansions[0].1, Expansion::ConsonantCluster);
/// ```
pub fn analyze_word(word: &str, jamo_range: &RangeInclusive<usize>) -> Result<WordAnalysis, WordError> {
    if word.is_empty() {
        return Err(WordError::Empty);
    }

    let syllables = word
        .chars()
        .enumerate()
        .map(|(position, ch)| {
            let parts = Syllable::split(ch).ok_or(WordError::NotHangul { ch, position })?;
            Ok(SyllableAnalysis {
                syllable: ch,
                jamo: parts.atoms().collect(),
                expansions: parts
                    .expanded_slots()
                    .map(|(slot, atoms)| (slot, Expansion::classify(slot, atoms), atoms))
                    .collect(),
            })
        })
        .collect::<Result<Vec<_>, WordError>>()?;

    let jamo: Vec<Jamo> = syllables.iter().flat_map(|s| s.jamo.iter().copied()).collect();
    Ok(WordAnalysis {
        word: word.to_string(),
        playable: jamo_range.contains(&jamo.len()),
        jamo,
        syllables,
    })
}
