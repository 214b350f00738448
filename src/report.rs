use crate::bench::StrategyRun;
use crate::strategy::StrategyResult;
use colored::Colorize;
use std::fmt;

pub const SEPARATOR: &str = "-------------------------------------------------";

impl fmt::Display for StrategyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Lines matched: {}", self.lines_count)?;
        writeln!(f, "Total size in Bytes: {}", self.total_size)?;
        write!(f, "Memory used for filtered data in Bytes: {}", self.memory_size)
    }
}

/// Heading plus metrics for one run.
pub fn render(run: &StrategyRun) -> String {
    format!("{}\n{}", run.strategy.to_string().bold().cyan(), run.result)
}

/// All runs, separated by dashed lines.
pub fn render_all(runs: &[StrategyRun]) -> String {
    runs.iter()
        .map(render)
        .collect::<Vec<_>>()
        .join(format!("\n{}\n", SEPARATOR).as_str())
}
