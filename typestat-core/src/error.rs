//! Error type for loading, analysing and exporting.

use std::path::PathBuf;

use thiserror::Error;
use typestat_types::SchemaError;

/// Errors surfaced by the word pipeline.
///
/// All of them are fatal for the run; there is no retry or partial
/// recovery.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("cannot open dataset {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to read dataset: {0}")]
    Read(#[from] csv::Error),

    #[error("malformed dataset: record on line {line} has {found} fields, expected {expected}")]
    Malformed {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("cannot write word table to {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T, E = AnalysisError> = std::result::Result<T, E>;
