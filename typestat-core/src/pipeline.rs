//! End-to-end word analysis.
//!
//! `normalize -> explode-join -> aggregate -> report`, in one synchronous
//! pass. [`analyze`] works on an already loaded [`Dataset`]; [`run_pipeline`]
//! loads it from the configured path first.

use tracing::{debug, info};

use crate::analyzer::{TextNormalizer, Tokenizer};
use crate::dataset::Dataset;
use crate::error::Result;
use crate::report::Report;
use crate::words::{aggregate, TokenTable, WordTable};
use typestat_types::{AnalysisConfig, SchemaError, OCCURRENCE_FIELD};

/// Everything a run produces.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Samples in the dataset.
    pub samples: usize,
    /// (sample, token) rows before aggregation.
    pub token_rows: usize,
    /// Qualifying word aggregates, sorted by token.
    pub words: WordTable,
    /// Worst and best rendered reports.
    pub report: Report,
}

/// Checks that the text column exists and that the rank field is a numeric
/// column (or the occurrence count).
pub fn validate(dataset: &Dataset, config: &AnalysisConfig) -> Result<(), SchemaError> {
    dataset.require(&config.text_column)?;

    if config.rank_field == config.text_column {
        return Err(SchemaError::not_numeric(&config.rank_field));
    }

    match dataset.column(&config.rank_field) {
        Some(column) if column.to_numeric().is_none() => {
            Err(SchemaError::not_numeric(&config.rank_field))
        }
        Some(_) => Ok(()),
        None if config.rank_field == OCCURRENCE_FIELD => Ok(()),
        None => Err(SchemaError::missing(&config.rank_field)),
    }
}

/// Runs the word pipeline over `dataset`.
///
/// The text column is normalized in place.
///
/// # Errors
///
/// Returns a `SchemaError` if the text column or rank field is missing, or
/// the rank field is not numeric.
pub fn analyze(dataset: &mut Dataset, config: &AnalysisConfig) -> Result<Analysis, SchemaError> {
    validate(dataset, config)?;

    let normalized = dataset.normalize_column(&config.text_column, &TextNormalizer::new())?;
    debug!(column = %config.text_column, normalized, "normalized text");

    let dataset = &*dataset;
    let tokens = TokenTable::join(dataset, &config.text_column, Tokenizer::WORDS)?;
    let words = aggregate(&tokens, &config.text_column, config.min_occurrences);
    let report = Report::build(&words, &config.rank_field, config.top_n)?;

    info!(
        samples = dataset.len(),
        token_rows = tokens.len(),
        words = words.len(),
        rank_field = %config.rank_field,
        "word analysis complete"
    );

    Ok(Analysis {
        samples: dataset.len(),
        token_rows: tokens.len(),
        words,
        report,
    })
}

/// Loads the configured dataset and analyses it.
///
/// # Errors
///
/// Returns `AnalysisError::Load`/`Read`/`Malformed` if the dataset cannot
/// be read and `AnalysisError::Schema` if it lacks a required column.
pub fn run_pipeline(config: &AnalysisConfig) -> Result<Analysis> {
    let mut dataset = Dataset::from_path(config.dataset_path())?;
    Ok(analyze(&mut dataset, config)?)
}
