use crate::error::{FilterError, Result};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Looked up in the working directory by the binaries.
pub const DEFAULT_CONFIG_FILE: &str = "line_filter.toml";

/// Where the benchmark reads from and writes to, and how the buffered
/// strategy batches its writes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    pub corpus_path: PathBuf,
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub buffer_threshold: usize,
    /// Write whatever is left in the buffer once the corpus is exhausted.
    /// `false` leaves that tail unwritten.
    pub flush_tail: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            corpus_path: PathBuf::from("rockyou.txt"),
            data_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("data").join("filtered"),
            buffer_threshold: 100_000,
            flush_tail: true,
        }
    }
}

impl BenchConfig {
    /// Load from a TOML file, falling back to defaults when it does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(FilterError::io(path, e)),
        };
        Self::from_toml(&text).map_err(|source| FilterError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Directories that must exist before any strategy writes.
    pub fn dirs(&self) -> [&Path; 2] {
        [self.data_dir.as_path(), self.output_dir.as_path()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = BenchConfig::default();
        assert_eq!(config.corpus_path, PathBuf::from("rockyou.txt"));
        assert_eq!(config.output_dir, Path::new("data").join("filtered"));
        assert_eq!(config.buffer_threshold, 100_000);
        assert!(config.flush_tail);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = BenchConfig::from_toml("buffer_threshold = 10\nflush_tail = false\n").unwrap();
        assert_eq!(config.buffer_threshold, 10);
        assert!(!config.flush_tail);
        assert_eq!(config.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(BenchConfig::from_toml("buffer_size = 10").is_err());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = BenchConfig::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, BenchConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "corpus_path = \"words.txt\"").unwrap();
        writeln!(file, "output_dir = \"out\"").unwrap();

        let config = BenchConfig::load(file.path()).unwrap();
        assert_eq!(config.corpus_path, PathBuf::from("words.txt"));
        assert_eq!(config.dirs(), [Path::new("data"), Path::new("out")]);
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "buffer_threshold = \"many\"").unwrap();

        let err = BenchConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, FilterError::Config { .. }));
    }
}
