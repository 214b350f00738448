use crate::error::{FilterError, Result};
use std::path::{Path, PathBuf};

/// A case-insensitive substring pattern.
///
/// The raw text names the output file; matching uses the lowercased needle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    raw: String,
    needle: String,
}

impl Pattern {
    /// Build a pattern from user input, dropping a trailing line terminator.
    pub fn parse(input: &str) -> Result<Self> {
        let raw = input.trim_end_matches(&['\n', '\r'][..]);
        if raw.is_empty() {
            return Err(FilterError::EmptyPattern);
        }
        if raw.contains(&['/', '\\', '\0'][..]) || raw == "." || raw == ".." {
            return Err(FilterError::InvalidPattern(raw.to_string()));
        }
        Ok(Pattern {
            raw: raw.to_string(),
            needle: raw.to_lowercase(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn matches(&self, line: &str) -> bool {
        line.to_lowercase().contains(&self.needle)
    }

    /// `<dir>/<pattern>.txt`
    pub fn output_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.txt", self.raw))
    }
}
