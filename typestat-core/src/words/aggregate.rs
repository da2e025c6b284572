//! Grouping token rows into per-word means.

use rustc_hash::FxHashMap;
use smallvec::{smallvec, SmallVec};
use tracing::debug;

use crate::words::types::{TokenRow, TokenTable, WordAggregate, WordTable, INLINE_FIELDS};

struct Accumulator<'a> {
    token: &'a str,
    sums: SmallVec<[f64; INLINE_FIELDS]>,
    counts: SmallVec<[u32; INLINE_FIELDS]>,
    rows: u32,
    occurrences: u32,
}

impl<'a> Accumulator<'a> {
    fn new(row: &TokenRow<'a>, width: usize) -> Self {
        Self {
            token: row.token,
            sums: smallvec![0.0; width],
            counts: smallvec![0; width],
            rows: 0,
            occurrences: row.occurrences,
        }
    }

    fn finish(self) -> WordAggregate {
        debug_assert_eq!(
            self.rows, self.occurrences,
            "occurrence tag disagrees with group size for {:?}",
            self.token
        );

        let means = self
            .sums
            .iter()
            .zip(&self.counts)
            .map(|(&sum, &n)| if n == 0 { f64::NAN } else { sum / n as f64 })
            .collect();

        WordAggregate {
            token: self.token.to_string(),
            means,
            occurrences: self.occurrences,
        }
    }
}

/// Groups token rows by token and averages every numeric field.
///
/// Nulls are skipped per field. Nothing is filtered: the result includes
/// singletons and the empty token. Words come out sorted by token.
pub fn group(tokens: &TokenTable<'_>, key: &str) -> WordTable {
    let width = tokens.fields.len();
    let mut slots: FxHashMap<&str, usize> = FxHashMap::default();
    let mut groups: Vec<Accumulator<'_>> = Vec::new();

    for row in &tokens.rows {
        let slot = *slots.entry(row.token).or_insert_with(|| {
            groups.push(Accumulator::new(row, width));
            groups.len() - 1
        });

        let acc = &mut groups[slot];
        acc.rows += 1;
        for field in 0..width {
            if let Some(value) = tokens.value(row, field) {
                acc.sums[field] += value;
                acc.counts[field] += 1;
            }
        }
    }

    groups.sort_unstable_by(|a, b| a.token.cmp(b.token));

    WordTable {
        key: key.to_string(),
        fields: tokens.fields.iter().map(|f| f.name.clone()).collect(),
        words: groups.into_iter().map(Accumulator::finish).collect(),
    }
}

impl WordTable {
    /// Drops words seen fewer than `min_occurrences` times.
    ///
    /// Returns the number of words dropped.
    pub fn retain_supported(&mut self, min_occurrences: u32) -> usize {
        let before = self.words.len();
        self.words.retain(|w| w.occurrences >= min_occurrences);
        before - self.words.len()
    }
}

/// Groups, then keeps words seen at least `min_occurrences` times, then
/// removes the empty token if present.
pub fn aggregate(tokens: &TokenTable<'_>, key: &str, min_occurrences: u32) -> WordTable {
    let mut table = group(tokens, key);
    let distinct = table.len();

    let dropped = table.retain_supported(min_occurrences);
    let empty_removed = table.remove("").is_some();

    debug!(
        distinct,
        dropped,
        empty_removed,
        kept = table.len(),
        "aggregated words"
    );

    table
}
