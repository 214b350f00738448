use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Everything that can abort a benchmark run.
///
/// None of these are recovered from: a failing strategy stops the run and
/// the error travels up to `main`.
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Corpus file not found: {}", path.display())]
    CorpusNotFound { path: PathBuf },

    #[error("Permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Search pattern must not be empty")]
    EmptyPattern,

    #[error("Search pattern '{0}' cannot be used as a file name")]
    InvalidPattern(String),

    #[error("Failed to parse config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, FilterError>;

impl FilterError {
    /// Classify an I/O failure on an output or intermediate path.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match source.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source },
        }
    }

    /// Classify an I/O failure while opening or reading the corpus.
    pub fn corpus(path: impl AsRef<Path>, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::CorpusNotFound {
                path: path.as_ref().to_path_buf(),
            },
            _ => Self::io(path, source),
        }
    }
}
