//! Command line definition and handler.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use typestat_core::run_pipeline;
use typestat_types::{
    AnalysisConfig, DEFAULT_DATASET_PATH, DEFAULT_MIN_OCCURRENCES, DEFAULT_OUTPUT_PATH,
    DEFAULT_RANK_FIELD, DEFAULT_TEXT_COLUMN, DEFAULT_TOP_N,
};

/// Parse a count that must be at least 1.
fn parse_positive<T>(s: &str) -> Result<T, String>
where
    T: std::str::FromStr + PartialOrd + From<u8>,
{
    let n: T = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < T::from(1) {
        Err("value must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

/// typestat - which words slow you down?
///
/// Reads a typing-test export, averages the typing speed of every word that
/// appears in the typed text, and prints the words most associated with slow
/// (1) and fast (2) typing, each repeated once per occurrence.
#[derive(Parser, Debug)]
#[command(name = "typestat")]
#[command(
    version,
    after_help = "\
Examples:
  typestat races.csv                          Report on races.csv
  typestat races.csv --rank-field Accuracy    Rank by another numeric column
  typestat races.csv --emit-full-table        Also write outfile.csv"
)]
pub struct Cli {
    /// Typing-test dataset (CSV with a header row)
    #[arg(env = "TYPESTAT_DATASET", default_value = DEFAULT_DATASET_PATH)]
    pub dataset: PathBuf,

    /// Typing-test dataset; takes precedence over the positional form
    #[arg(long = "dataset", value_name = "DATASET")]
    pub dataset_flag: Option<PathBuf>,

    /// Column holding the typed text
    #[arg(long, env = "TYPESTAT_TEXT_COLUMN", default_value = DEFAULT_TEXT_COLUMN)]
    pub text_column: String,

    /// Numeric column used to rank words ("count" ranks by frequency)
    #[arg(long, env = "TYPESTAT_RANK_FIELD", default_value = DEFAULT_RANK_FIELD)]
    pub rank_field: String,

    /// Number of words per report
    #[arg(long, env = "TYPESTAT_TOP_N", default_value_t = DEFAULT_TOP_N, value_parser = parse_positive::<usize>)]
    pub top_n: usize,

    /// Minimum number of occurrences for a word to be reported
    #[arg(long, env = "TYPESTAT_MIN_OCCURRENCES", default_value_t = DEFAULT_MIN_OCCURRENCES, value_parser = parse_positive::<u32>)]
    pub min_occurrences: u32,

    /// Write the full word table to --output and print it
    #[arg(long, env = "TYPESTAT_EMIT_FULL_TABLE")]
    pub emit_full_table: bool,

    /// Destination of the full word table
    #[arg(long, short, env = "TYPESTAT_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,
}

impl Cli {
    /// Builds the analysis configuration from the parsed arguments.
    pub fn config(&self) -> AnalysisConfig {
        AnalysisConfig {
            dataset_path: self
                .dataset_flag
                .clone()
                .unwrap_or_else(|| self.dataset.clone()),
            text_column: self.text_column.clone(),
            rank_field: self.rank_field.clone(),
            top_n: self.top_n,
            min_occurrences: self.min_occurrences,
            emit_full_table: self.emit_full_table,
            output_path: self.output.clone(),
        }
    }
}

/// Runs the analysis and writes the reports to stdout.
pub fn run(cli: Cli) -> Result<()> {
    let config = cli.config();
    let stdout = io::stdout();
    run_to(&config, &mut stdout.lock())
}

/// Runs the analysis and writes the reports to `out`.
///
/// With `emit_full_table` set, the word table is also exported to
/// `output_path` and dumped after the reports.
pub fn run_to<W: Write>(config: &AnalysisConfig, out: &mut W) -> Result<()> {
    debug!(?config, "starting analysis");

    let analysis = run_pipeline(config)
        .with_context(|| format!("analysis of {} failed", config.dataset_path.display()))?;

    for line in analysis.report.lines() {
        writeln!(out, "{line}")?;
    }

    if config.emit_full_table {
        writeln!(out, "Saving File!")?;
        analysis.words.export(&config.output_path)?;
        writeln!(out, "{}", analysis.words)?;
        writeln!(out, "\t~ Finished")?;
    }

    out.flush()?;
    Ok(())
}
