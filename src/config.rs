//! Game configuration loaded from a JSON file
//!
//! The file path is always given explicitly; a missing field takes its default.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

/// Hongdle settings
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Shortest accepted word, in jamo
    #[serde(default = "default_min_jamo")]
    pub min_jamo: usize,
    /// Longest accepted word, in jamo
    #[serde(default = "default_max_jamo")]
    pub max_jamo: usize,
    /// Primary word list; the embedded seed list when absent
    #[serde(default)]
    pub wordlist: Option<PathBuf>,
    /// Word list searched when the primary one has no candidate
    #[serde(default)]
    pub fallback_wordlist: Option<PathBuf>,
    /// Candidates shown per page
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,
}

const fn default_min_jamo() -> usize {
    5
}

const fn default_max_jamo() -> usize {
    7
}

const fn default_display_limit() -> usize {
    20
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_jamo: default_min_jamo(),
            max_jamo: default_max_jamo(),
            wordlist: None,
            fallback_wordlist: None,
            display_limit: default_display_limit(),
        }
    }
}

impl GameConfig {
    /// Read and validate a config file
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read or parsed, or if the
    /// jamo range is empty.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        log::debug!("Loaded config from {}: {config:?}", path.display());
        Ok(config)
    }

    /// Config from `path` when given, defaults otherwise
    ///
    /// # Errors
    /// Same as [`GameConfig::load`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// # Errors
    /// Returns `ConfigError::InvalidRange` when `min_jamo > max_jamo`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_jamo > self.max_jamo {
            return Err(ConfigError::InvalidRange {
                min: self.min_jamo,
                max: self.max_jamo,
            });
        }
        Ok(())
    }

    #[must_use]
    pub const fn jamo_range(&self) -> RangeInclusive<usize> {
        self.min_jamo..=self.max_jamo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.jamo_range(), 5..=7);
        assert_eq!(config.display_limit, 20);
        assert!(config.wordlist.is_none());
    }

    #[test]
    fn missing_fields_use_defaults() {
        let file = write_config(r#"{"max_jamo": 6, "wordlist": "words.txt"}"#);
        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.min_jamo, 5);
        assert_eq!(config.max_jamo, 6);
        assert_eq!(config.wordlist, Some(PathBuf::from("words.txt")));
        assert_eq!(config.display_limit, 20);
    }

    #[test]
    fn invalid_range_is_rejected() {
        let file = write_config(r#"{"min_jamo": 8, "max_jamo": 6}"#);
        assert!(matches!(
            GameConfig::load(file.path()),
            Err(ConfigError::InvalidRange { min: 8, max: 6 })
        ));
    }

    #[test]
    fn unparseable_file_is_rejected() {
        let file = write_config("min_jamo = 5");
        assert!(matches!(
            GameConfig::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn no_path_means_defaults() {
        assert_eq!(
            GameConfig::load_or_default(None).unwrap(),
            GameConfig::default()
        );
    }

    #[test]
    fn serialize_round_trip() {
        let config = GameConfig {
            display_limit: 5,
            ..GameConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
