use crate::config::BenchConfig;
use crate::corpus::read_lines;
use crate::dirs::ensure_dirs;
use crate::error::Result;
use crate::pattern::Pattern;
use crate::strategy::{Strategy, StrategyResult};
use crate::timing::timeit;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyRun {
    pub strategy: Strategy,
    pub result: StrategyResult,
}

/// Run one strategy over a freshly opened corpus, timed.
pub fn run_strategy(config: &BenchConfig, pattern: &Pattern, strategy: Strategy) -> Result<StrategyRun> {
    let mut timed = timeit(strategy.name(), |corpus: &Path| -> Result<StrategyResult> {
        strategy.run(pattern, read_lines(corpus)?, &config.output_dir)
    });
    let result = timed(config.corpus_path.as_path())?;
    Ok(StrategyRun { strategy, result })
}

/// Prepare the output directories, then run all three strategies in order
/// for the same pattern.
///
/// Stops at the first failing strategy.
pub fn run_all(config: &BenchConfig, pattern: &Pattern) -> Result<Vec<StrategyRun>> {
    ensure_dirs(config.dirs())?;

    Strategy::all(config.buffer_threshold, config.flush_tail)
        .into_iter()
        .map(|strategy| run_strategy(config, pattern, strategy))
        .collect()
}

/// Whether every run saw the same match set.
///
/// Line counts and output sizes must agree; memory and time may not.
pub fn check_consistency(runs: &[StrategyRun]) -> bool {
    let Some(first) = runs.first() else {
        return true;
    };

    let mut consistent = true;
    for run in &runs[1..] {
        if run.result.lines_count != first.result.lines_count
            || run.result.total_size != first.result.total_size
        {
            tracing::warn!(
                expected = first.strategy.name(),
                actual = run.strategy.name(),
                expected_lines = first.result.lines_count,
                actual_lines = run.result.lines_count,
                expected_bytes = first.result.total_size,
                actual_bytes = run.result.total_size,
                "strategies disagree on the filtered output"
            );
            consistent = false;
        }
    }
    consistent
}
