//! Word corpus: loading, indexing and querying by jamo length

mod embedded;
pub mod loader;
mod starters;
mod store;

pub use embedded::{SEED_WORDS, SEED_WORDS_COUNT};
pub use starters::starting_words;
pub use store::{
    Corpus, CorpusBuilder, CorpusStatistics, DEFAULT_JAMO_RANGE, InsertOutcome, LoadReport,
    RejectReason,
};
