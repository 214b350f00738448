use crate::error::{FilterError, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// A result file that is truncated on open and closed before it is measured.
///
/// Dropping it without calling [`OutputFile::finish`] still closes the
/// handle, so error paths never leak it.
pub struct OutputFile {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl OutputFile {
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = File::create(&path).map_err(|e| FilterError::io(&path, e))?;
        Ok(OutputFile {
            path,
            writer: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_line(&mut self, line: &str) -> Result<()> {
        self.writer
            .write_all(line.as_bytes())
            .map_err(|e| FilterError::io(&self.path, e))
    }

    pub fn write_lines(&mut self, lines: &[String]) -> Result<()> {
        lines.iter().try_for_each(|line| self.write_line(line))
    }

    /// Flush, close, then return the size on disk in bytes.
    pub fn finish(self) -> Result<u64> {
        let OutputFile { path, writer } = self;
        let file = writer
            .into_inner()
            .map_err(|e| FilterError::io(&path, e.into_error()))?;
        file.sync_all().map_err(|e| FilterError::io(&path, e))?;
        drop(file);

        let metadata = fs::metadata(&path).map_err(|e| FilterError::io(&path, e))?;
        Ok(metadata.len())
    }
}
