// Corpus reading and generation

use crate::error::{FilterError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Forward-only cursor over the lines of a corpus.
///
/// Each `next()` reads exactly one line from the underlying reader, so the
/// corpus is never held in memory as a whole. Lines keep their `\n`. Once
/// exhausted the cursor stays exhausted; call [`read_lines`] again to start
/// over.
pub struct CorpusLines<R = BufReader<File>> {
    reader: R,
    path: PathBuf,
    buf: Vec<u8>,
    done: bool,
}

/// Open `path` and return a lazy line cursor over it.
pub fn read_lines(path: impl AsRef<Path>) -> Result<CorpusLines> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| FilterError::corpus(path, e))?;
    Ok(CorpusLines::with_path(BufReader::new(file), path))
}

impl<R: BufRead> CorpusLines<R> {
    pub fn from_reader(reader: R) -> Self {
        Self::with_path(reader, "<memory>")
    }

    fn with_path(reader: R, path: impl Into<PathBuf>) -> Self {
        CorpusLines {
            reader,
            path: path.into(),
            buf: Vec::new(),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for CorpusLines<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => Some(Ok(String::from_utf8_lossy(&self.buf).into_owned())),
            Err(e) => {
                self.done = true;
                Some(Err(FilterError::corpus(&self.path, e)))
            }
        }
    }
}

/// Read the whole corpus into memory at once.
///
/// The eager counterpart to [`read_lines`]; every line is retained.
pub fn load_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    read_lines(path)?.collect()
}

const STEMS: &[&str] = &[
    "love", "dragon", "monkey", "shadow", "sunshine", "princess", "football", "master", "pass",
    "angel", "tiger", "summer", "apple", "qwerty", "secret", "hunter", "star", "baby",
];

/// Write `lines` password-like words to `path`.
///
/// The output is the same for the same `seed`.
pub fn generate(path: impl AsRef<Path>, lines: usize, seed: u64) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| FilterError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    let mut rng = StdRng::seed_from_u64(seed);

    for _ in 0..lines {
        let stem = STEMS[rng.gen_range(0..STEMS.len())];
        let word = match rng.gen_range(0..4) {
            0 => stem.to_uppercase(),
            1 => {
                let mut chars = stem.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
            _ => stem.to_string(),
        };
        let suffix: u32 = rng.gen_range(0..10_000);
        writeln!(writer, "{}{}", word, suffix).map_err(|e| FilterError::io(path, e))?;
    }

    writer.flush().map_err(|e| FilterError::io(path, e))?;
    Ok(())
}
