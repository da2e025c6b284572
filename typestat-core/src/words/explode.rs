//! Explode-join: one row per (sample, piece) pair.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::analyzer::Tokenizer;
use crate::dataset::{Column, Dataset};
use crate::words::types::{Exploded, TokenRow, TokenTable};
use typestat_types::SchemaError;

/// Splits every non-null cell of `column` and emits one row per piece.
///
/// Null cells are dropped before splitting and never produce a row. Each
/// row keeps the identity of the sample it came from so it can be joined
/// back to that sample's other columns.
pub fn explode<'a>(column: &'a Column, tokenizer: Tokenizer<'_>) -> Vec<Exploded<'a>> {
    let mut out = Vec::with_capacity(column.len());
    for (sample, cell) in column.non_null() {
        tokenizer.tokenize(cell, |value, _| out.push(Exploded { sample, value }));
    }
    out
}

/// Explodes a `"a, b, c"` list column of `dataset`.
pub fn comma_values<'a>(dataset: &'a Dataset, key: &str) -> Result<Vec<Exploded<'a>>, SchemaError> {
    Ok(explode(dataset.require(key)?, Tokenizer::COMMA_LIST))
}

/// Counts how many rows carry each distinct value.
pub fn value_counts<'a>(rows: &[Exploded<'a>]) -> FxHashMap<&'a str, u32> {
    let mut counts: FxHashMap<&'a str, u32> = FxHashMap::default();
    for row in rows {
        *counts.entry(row.value).or_insert(0) += 1;
    }
    counts
}

impl<'a> TokenTable<'a> {
    /// Tokenizes `text_column` and joins each token with the numeric columns
    /// of its sample, then tags every row with its token's global
    /// occurrence count.
    ///
    /// A sample whose text splits into `k` tokens contributes `k` rows.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::MissingColumn` if `text_column` is absent.
    pub fn join(
        dataset: &'a Dataset,
        text_column: &str,
        tokenizer: Tokenizer<'_>,
    ) -> Result<Self, SchemaError> {
        let exploded = explode(dataset.require(text_column)?, tokenizer);
        let counts = value_counts(&exploded);

        let rows: Vec<TokenRow<'a>> = exploded
            .into_iter()
            .map(|e| TokenRow {
                sample: e.sample,
                token: e.value,
                occurrences: counts.get(e.value).copied().unwrap_or(0),
            })
            .collect();

        debug!(
            samples = dataset.len(),
            token_rows = rows.len(),
            distinct = counts.len(),
            "exploded text column"
        );

        Ok(Self {
            fields: dataset.numeric_columns(text_column),
            rows,
        })
    }
}
