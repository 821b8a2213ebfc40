//! JSON export of the corpus

use crate::corpus::Corpus;
use crate::error::CorpusError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the corpus (or one length of it) to `path` as JSON
///
/// Returns the number of records written.
///
/// # Errors
/// Returns `CorpusError::Write` if the file cannot be created or flushed, and
/// `CorpusError::Export` if serialization fails.
pub fn export_corpus(corpus: &Corpus, path: &Path, length: Option<usize>) -> Result<usize, CorpusError> {
    let write_error = |source| CorpusError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    corpus.export_json(&mut writer, length)?;
    writer.flush().map_err(write_error)?;

    let count = length.map_or_else(|| corpus.len(), |n| corpus.words_of_length(n).len());
    log::info!("Exported {count} words to {}", path.display());
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::loader::load_corpus;

    #[test]
    fn export_writes_json_file() {
        let (corpus, _) = load_corpus(None, 5..=7).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.json");

        let count = export_corpus(&corpus, &path, Some(7)).unwrap();
        assert_eq!(count, 23);

        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(23));
        assert_eq!(value[0]["length"], 7);
    }

    #[test]
    fn export_everything() {
        let (corpus, _) = load_corpus(None, 5..=7).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("all.json");
        assert_eq!(export_corpus(&corpus, &path, None).unwrap(), 146);
    }

    #[test]
    fn export_to_missing_directory_fails() {
        let (corpus, _) = load_corpus(None, 5..=7).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("words.json");
        assert!(matches!(
            export_corpus(&corpus, &path, None),
            Err(CorpusError::Write { .. })
        ));
    }
}
