// Writes a synthetic word list to the configured corpus path so lesson_04
// has something to filter.

use line_filter_bench::config::DEFAULT_CONFIG_FILE;
use line_filter_bench::{corpus, logging, BenchConfig};
use std::error::Error;

const LINES: usize = 1_000_000;
const SEED: u64 = 2009;

fn main() -> Result<(), Box<dyn Error>> {
    logging::init();

    let config = BenchConfig::load(DEFAULT_CONFIG_FILE)?;
    corpus::generate(&config.corpus_path, LINES, SEED)?;

    let size = std::fs::metadata(&config.corpus_path)?.len();
    println!(
        "Generated {} lines ({} bytes) in {}",
        LINES,
        size,
        config.corpus_path.display()
    );
    Ok(())
}
