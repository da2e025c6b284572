//! Core types and configuration for the typestat word-speed analyzer.
//!
//! This crate holds the vocabulary shared by the library and the CLI.
//! Keeping it separate ensures:
//!
//! - **Small surface**: the CLI can build a config without pulling in the
//!   CSV and aggregation machinery
//! - **Clean boundaries**: no circular dependencies between crates

#![warn(missing_docs)]

use core::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Identity of a sample: its row position in the source table.
///
/// A 32-bit index keeps token rows compact; typing-test exports are far
/// below four billion rows.
pub type SampleId = u32;

/// Default dataset location.
pub const DEFAULT_DATASET_PATH: &str = "type_racer.csv";

/// Default name of the free-text column.
pub const DEFAULT_TEXT_COLUMN: &str = "Text";

/// Default numeric column used for ranking.
pub const DEFAULT_RANK_FIELD: &str = "Speed (WPM)";

/// Default number of tokens per report.
pub const DEFAULT_TOP_N: usize = 10;

/// Default minimum number of occurrences for a token to be reported.
pub const DEFAULT_MIN_OCCURRENCES: u32 = 2;

/// Default location of the full word table export.
pub const DEFAULT_OUTPUT_PATH: &str = "outfile.csv";

/// Name under which the occurrence count is exposed as a field.
pub const OCCURRENCE_FIELD: &str = "count";

/// Direction in which word aggregates are ranked.
///
/// `#[repr(u8)]` pins the discriminants to the tags printed in front of
/// each report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RankOrder {
    /// Lowest values first: the words most associated with slow typing.
    Ascending = 1,
    /// Highest values first: the words most associated with fast typing.
    Descending = 2,
}

impl RankOrder {
    /// Both orders, in the order reports are printed.
    pub const BOTH: [RankOrder; 2] = [RankOrder::Ascending, RankOrder::Descending];

    /// Integer tag printed in front of the rendered report.
    #[must_use]
    #[inline(always)]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Human readable name of the report this order produces.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            RankOrder::Ascending => "worst",
            RankOrder::Descending => "best",
        }
    }
}

impl fmt::Display for RankOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Analysis configuration options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Location of the delimited dataset.
    pub dataset_path: PathBuf,
    /// Name of the free-text column that is tokenized.
    pub text_column: String,
    /// Numeric column used to rank word aggregates.
    pub rank_field: String,
    /// Number of tokens per report.
    /// Default: 10
    pub top_n: usize,
    /// Minimum occurrence count for a token to survive aggregation.
    /// Default: 2 (tokens seen once are dropped)
    pub min_occurrences: u32,
    /// Whether to write and print the full word table after the reports.
    pub emit_full_table: bool,
    /// Where the full word table is written when `emit_full_table` is set.
    pub output_path: PathBuf,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            text_column: DEFAULT_TEXT_COLUMN.to_string(),
            rank_field: DEFAULT_RANK_FIELD.to_string(),
            top_n: DEFAULT_TOP_N,
            min_occurrences: DEFAULT_MIN_OCCURRENCES,
            emit_full_table: false,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl AnalysisConfig {
    /// Creates a default configuration reading from `dataset_path`.
    pub fn new(dataset_path: impl Into<PathBuf>) -> Self {
        Self {
            dataset_path: dataset_path.into(),
            ..Self::default()
        }
    }

    /// Sets the free-text column name.
    #[must_use]
    pub fn with_text_column(mut self, column: impl Into<String>) -> Self {
        self.text_column = column.into();
        self
    }

    /// Sets the numeric column used for ranking.
    #[must_use]
    pub fn with_rank_field(mut self, field: impl Into<String>) -> Self {
        self.rank_field = field.into();
        self
    }

    /// Sets the number of tokens per report.
    #[must_use]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Sets the minimum occurrence threshold.
    #[must_use]
    pub fn with_min_occurrences(mut self, min: u32) -> Self {
        self.min_occurrences = min;
        self
    }

    /// Enables the full table export to `path`.
    #[must_use]
    pub fn with_full_table(mut self, path: impl Into<PathBuf>) -> Self {
        self.emit_full_table = true;
        self.output_path = path.into();
        self
    }

    /// Returns the dataset location.
    #[inline]
    pub fn dataset_path(&self) -> &Path {
        &self.dataset_path
    }
}

/// Errors raised when the dataset does not have the shape the analysis needs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A required column is not present in the header.
    #[error("required column '{column}' not found in dataset")]
    MissingColumn {
        /// Name of the missing column.
        column: String,
    },
    /// A column used for ranking holds non-numeric values.
    #[error("column '{column}' is not numeric and cannot be ranked")]
    NotNumeric {
        /// Name of the offending column.
        column: String,
    },
}

impl SchemaError {
    /// Shorthand for [`SchemaError::MissingColumn`].
    pub fn missing(column: &str) -> Self {
        SchemaError::MissingColumn {
            column: column.to_string(),
        }
    }

    /// Shorthand for [`SchemaError::NotNumeric`].
    pub fn not_numeric(column: &str) -> Self {
        SchemaError::NotNumeric {
            column: column.to_string(),
        }
    }
}
