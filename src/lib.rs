//! # Line-Filter Benchmark
//!
//! Reads a large newline-delimited corpus, keeps the lines containing a
//! case-insensitive pattern and writes them to `<output_dir>/<pattern>.txt`
//! with one of three write strategies:
//!
//! - Streaming: write every match as soon as it is seen
//! - Buffered: batch matches and write once the batch grows past a threshold
//! - Full accumulation: keep every match in memory and write once at the end
//!
//! Each run reports output size, matched line count and an approximate
//! memory footprint so the strategies can be compared side by side.

pub mod bench;
pub mod config;
pub mod corpus;
pub mod dirs;
pub mod error;
pub mod footprint;
pub mod logging;
pub mod output;
pub mod pattern;
pub mod report;
pub mod strategy;
pub mod timing;

pub use bench::{check_consistency, run_all, StrategyRun};
pub use config::BenchConfig;
pub use corpus::{load_lines, read_lines, CorpusLines};
pub use dirs::ensure_dirs;
pub use error::{FilterError, Result};
pub use pattern::Pattern;
pub use strategy::{Strategy, StrategyResult};
pub use timing::{measure, timeit};
