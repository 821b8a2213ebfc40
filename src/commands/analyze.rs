//! Word analysis command
//!
//! Shows how a word decomposes into jamo and where it sits in the corpus.

use crate::core::{WordAnalysis, analyze_word};
use crate::corpus::Corpus;
use crate::error::WordError;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub analysis: WordAnalysis,
    /// Corpus frequency, if the word is in the corpus
    pub frequency: Option<u64>,
    /// 1-based frequency rank among words of the same jamo length
    pub rank: Option<usize>,
    /// Words of the same jamo length in the corpus
    pub same_length: usize,
}

/// Analyze a word against the corpus's accepted length range
///
/// # Errors
/// Returns `WordError` if the word is empty or not Hangul.
pub fn analyze(word: &str, corpus: &Corpus) -> Result<AnalysisResult, WordError> {
    let analysis = analyze_word(word, corpus.jamo_range())?;
    let same_length = corpus.words_of_length(analysis.len());
    let rank = same_length
        .iter()
        .position(|candidate| candidate.text() == word)
        .map(|index| index + 1);

    Ok(AnalysisResult {
        frequency: corpus.find(word).map(|w| w.frequency()),
        rank,
        same_length: same_length.len(),
        analysis,
    })
}
