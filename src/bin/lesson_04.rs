use colored::Colorize;
use line_filter_bench::config::DEFAULT_CONFIG_FILE;
use line_filter_bench::report::render_all;
use line_filter_bench::{check_consistency, logging, run_all, BenchConfig, Pattern};
use std::error::Error;
use std::io::{self, BufRead, Write};

/// Show the prompt on `output` and parse one line of `input` as the pattern.
fn prompt_pattern<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<Pattern, Box<dyn Error>> {
    write!(output, "Enter search pattern:")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(Pattern::parse(&line)?)
}

fn main() -> Result<(), Box<dyn Error>> {
    logging::init();

    let config = BenchConfig::load(DEFAULT_CONFIG_FILE)?;
    tracing::debug!(?config, "loaded configuration");

    let pattern = prompt_pattern(io::stdin().lock(), io::stdout())?;
    let runs = run_all(&config, &pattern)?;

    println!("{}", render_all(&runs));

    if !check_consistency(&runs) {
        println!("{}", "Strategies produced different output files".yellow());
    }

    Ok(())
}
