//! Starting-word suggestions
//!
//! A first guess with no repeated jamo tests the most distinct atoms. Among
//! those, the corpus order already puts the most frequent words first.

use super::Corpus;
use crate::core::Word;

/// The first `limit` words of `length` jamo whose jamo are all distinct
///
/// # Examples
/// ```
/// use hongdle::corpus::{CorpusBuilder, starting_words};
///
/// let mut builder = CorpusBuilder::default();
/// builder.insert("사람", 50); // ㅏ twice
/// builder.insert("시간", 10);
/// let corpus = builder.build();
///
/// let starters = starting_words(&corpus, 5, 3);
/// assert_eq!(starters.len(), 1);
/// assert_eq!(starters[0].text(), "시간");
/// ```
#[must_use]
pub fn starting_words(corpus: &Corpus, length: usize, limit: usize) -> Vec<&Word> {
    corpus
        .words_of_length(length)
        .iter()
        .filter(|word| word.has_unique_jamo())
        .take(limit)
        .collect()
}
