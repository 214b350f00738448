// =============================================================================
// Filter strategies: same match set, different write cadence
// =============================================================================

use crate::error::Result;
use crate::footprint;
use crate::output::OutputFile;
use crate::pattern::Pattern;
use std::fmt;
use std::path::Path;

/// What one strategy run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StrategyResult {
    /// Size of the output file on disk, in bytes.
    pub total_size: u64,
    pub lines_count: usize,
    /// Approximate bytes held for matched lines, see [`crate::footprint`].
    pub memory_size: usize,
}

/// How matching lines reach the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Write every match immediately, retain nothing.
    Streaming,
    /// Collect matches and write the batch whenever it holds more than
    /// `threshold` lines.
    Buffered { threshold: usize, flush_tail: bool },
    /// Keep every match and write them all once the corpus is exhausted.
    FullAccumulation,
}

impl Strategy {
    /// The three strategies in benchmark order.
    pub fn all(threshold: usize, flush_tail: bool) -> [Strategy; 3] {
        [
            Strategy::Streaming,
            Strategy::Buffered { threshold, flush_tail },
            Strategy::FullAccumulation,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Streaming => "filter_file_flow_write",
            Strategy::Buffered { .. } => "filter_file_buffered_flow_write",
            Strategy::FullAccumulation => "filter_file_array_write",
        }
    }

    /// Filter `corpus` into `<output_dir>/<pattern>.txt`.
    ///
    /// The output file is closed before its size is read, on every path.
    pub fn run<I>(&self, pattern: &Pattern, corpus: I, output_dir: &Path) -> Result<StrategyResult>
    where
        I: IntoIterator<Item = Result<String>>,
    {
        let out = OutputFile::create(pattern.output_path(output_dir))?;
        match *self {
            Strategy::Streaming => streaming(pattern, corpus, out),
            Strategy::Buffered { threshold, flush_tail } => {
                buffered(pattern, corpus, out, threshold, flush_tail)
            }
            Strategy::FullAccumulation => accumulated(pattern, corpus, out),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Streaming => write!(f, "streaming write"),
            Strategy::Buffered { threshold, .. } => {
                write!(f, "buffered write (batches of {})", threshold)
            }
            Strategy::FullAccumulation => write!(f, "full accumulation"),
        }
    }
}

fn streaming<I>(pattern: &Pattern, corpus: I, mut out: OutputFile) -> Result<StrategyResult>
where
    I: IntoIterator<Item = Result<String>>,
{
    let mut lines_count = 0;
    let mut memory_size = 0;

    for line in corpus {
        let line = line?;
        if pattern.matches(&line) {
            out.write_line(&line)?;
            lines_count += 1;
            // Per-line accumulator, not a watermark: nothing is retained.
            memory_size += footprint::line(&line);
        }
    }

    Ok(StrategyResult {
        total_size: out.finish()?,
        lines_count,
        memory_size,
    })
}

fn buffered<I>(
    pattern: &Pattern,
    corpus: I,
    mut out: OutputFile,
    threshold: usize,
    flush_tail: bool,
) -> Result<StrategyResult>
where
    I: IntoIterator<Item = Result<String>>,
{
    let mut lines_count = 0;
    let mut memory_size = 0;
    let mut buffer: Vec<String> = Vec::new();

    for line in corpus {
        let line = line?;
        if pattern.matches(&line) {
            buffer.push(line);
            lines_count += 1;
        }

        if buffer.len() > threshold {
            memory_size += flush(&mut buffer, &mut out)?;
        }
    }

    if !buffer.is_empty() {
        if flush_tail {
            memory_size += flush(&mut buffer, &mut out)?;
        } else {
            tracing::debug!(dropped = buffer.len(), "leaving final partial buffer unwritten");
        }
    }

    Ok(StrategyResult {
        total_size: out.finish()?,
        lines_count,
        memory_size,
    })
}

/// Write and clear `buffer`, returning its footprint before clearing.
fn flush(buffer: &mut Vec<String>, out: &mut OutputFile) -> Result<usize> {
    let size = footprint::lines(buffer);
    out.write_lines(buffer)?;
    tracing::debug!(lines = buffer.len(), bytes = size, "flushed buffer");
    buffer.clear();
    Ok(size)
}

fn accumulated<I>(pattern: &Pattern, corpus: I, mut out: OutputFile) -> Result<StrategyResult>
where
    I: IntoIterator<Item = Result<String>>,
{
    let mut data = Vec::new();
    for line in corpus {
        let line = line?;
        if pattern.matches(&line) {
            data.push(line);
        }
    }

    out.write_lines(&data)?;
    let memory_size = footprint::lines(&data);

    Ok(StrategyResult {
        total_size: out.finish()?,
        lines_count: data.len(),
        memory_size,
    })
}
