//! Word pipeline types.

use smallvec::SmallVec;

use crate::dataset::NumericColumn;
use typestat_types::{SampleId, OCCURRENCE_FIELD};

/// Inline capacity for per-word means; typing-test exports carry a handful
/// of numeric columns.
pub const INLINE_FIELDS: usize = 4;

/// One piece of a split cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Exploded<'a> {
    pub sample: SampleId,
    pub value: &'a str,
}

/// A token joined back to its sample.
///
/// The sample's numeric values are reached through [`TokenTable::value`]
/// rather than copied, so every row of a sample sees the same values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenRow<'a> {
    pub sample: SampleId,
    pub token: &'a str,
    /// Total number of rows in the table carrying `token`.
    pub occurrences: u32,
}

/// Every (sample, token) pair with access to the sample's numeric fields.
#[derive(Debug, Clone)]
pub struct TokenTable<'a> {
    pub(crate) fields: Vec<NumericColumn>,
    pub(crate) rows: Vec<TokenRow<'a>>,
}

impl<'a> TokenTable<'a> {
    /// Number of token rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if no token rows were produced.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[inline]
    pub fn rows(&self) -> &[TokenRow<'a>] {
        &self.rows
    }

    /// Names of the joined numeric fields, in dataset order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Value of numeric field `field` for `row`'s sample.
    #[inline(always)]
    pub fn value(&self, row: &TokenRow<'_>, field: usize) -> Option<f64> {
        self.fields.get(field)?.get(row.sample)
    }
}

/// Per-token summary: mean of every numeric field plus occurrence count.
#[derive(Debug, Clone, PartialEq)]
pub struct WordAggregate {
    pub token: String,
    /// Means aligned with [`WordTable::fields`]; NaN when the token has no
    /// non-null value for a field.
    pub means: SmallVec<[f64; INLINE_FIELDS]>,
    pub occurrences: u32,
}

impl WordAggregate {
    /// Mean of field `index`, NaN if out of range.
    #[inline]
    pub fn mean(&self, index: usize) -> f64 {
        self.means.get(index).copied().unwrap_or(f64::NAN)
    }
}

/// The aggregated word table, sorted by token.
#[derive(Debug, Clone, PartialEq)]
pub struct WordTable {
    pub(crate) key: String,
    pub(crate) fields: Vec<String>,
    pub(crate) words: Vec<WordAggregate>,
}

impl WordTable {
    /// Name of the column the tokens came from.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Numeric field names, aligned with every aggregate's `means`.
    #[inline]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    #[inline]
    pub fn words(&self) -> &[WordAggregate] {
        &self.words
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Index of a numeric field by name.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f == name)
    }

    /// Looks up a token.
    pub fn get(&self, token: &str) -> Option<&WordAggregate> {
        self.words
            .binary_search_by(|w| w.token.as_str().cmp(token))
            .ok()
            .map(|i| &self.words[i])
    }

    /// Removes a token, returning it if it was present.
    ///
    /// Absence is not an error.
    pub fn remove(&mut self, token: &str) -> Option<WordAggregate> {
        let index = self
            .words
            .binary_search_by(|w| w.token.as_str().cmp(token))
            .ok()?;
        Some(self.words.remove(index))
    }

    /// Header of the exported table: key, numeric fields, occurrence count.
    pub fn header(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.key.as_str())
            .chain(self.fields.iter().map(String::as_str))
            .chain(std::iter::once(OCCURRENCE_FIELD))
    }
}
