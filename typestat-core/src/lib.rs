//! Per-word typing speed analysis.
//!
//! Given a table of typing-test results, computes the mean of every numeric
//! measurement for each word that was typed and reports the words most
//! associated with slow and fast typing.
//!
//! ```
//! use typestat_core::dataset::{Column, Dataset};
//! use typestat_core::pipeline::analyze;
//! use typestat_types::AnalysisConfig;
//!
//! let mut dataset = Dataset::new(vec![
//!     Column::from_text("Text", [Some("hello world"), Some("hello there"), Some("world peace")]),
//!     Column::from_values("Speed (WPM)", [50.0, 60.0, 70.0]),
//! ]);
//!
//! let analysis = analyze(&mut dataset, &AnalysisConfig::default()).unwrap();
//! assert_eq!(analysis.report.worst, "hello hello world world ");
//! assert_eq!(analysis.report.best, "world world hello hello ");
//! ```
//!
//! Threading: everything is single-threaded and synchronous; a run owns its
//! dataset from load to report.

pub mod analyzer;
pub mod dataset;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod words;

pub use error::{AnalysisError, Result};
pub use pipeline::{analyze, run_pipeline, Analysis};
pub use report::Report;
pub use words::{WordAggregate, WordTable};
