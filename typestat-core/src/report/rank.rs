//! Ranking and frequency-weighted rendering.

use core::cmp::Ordering;

use crate::words::{WordAggregate, WordTable};
use typestat_types::{RankOrder, SchemaError, OCCURRENCE_FIELD};

/// What word aggregates are ranked by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankKey {
    /// Mean of the numeric field at this index.
    Field(usize),
    /// Occurrence count.
    Occurrences,
}

impl RankKey {
    #[inline(always)]
    fn value(self, word: &WordAggregate) -> f64 {
        match self {
            RankKey::Field(index) => word.mean(index),
            RankKey::Occurrences => f64::from(word.occurrences),
        }
    }
}

impl WordTable {
    /// Resolves a field name to a rank key.
    ///
    /// `count` falls back to the occurrence count when no numeric column of
    /// that name exists.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::MissingColumn` if the name matches nothing.
    pub fn rank_key(&self, name: &str) -> Result<RankKey, SchemaError> {
        match self.field_index(name) {
            Some(index) => Ok(RankKey::Field(index)),
            None if name == OCCURRENCE_FIELD => Ok(RankKey::Occurrences),
            None => Err(SchemaError::missing(name)),
        }
    }
}

/// Orders two rank values; NaN sorts last in either direction.
#[inline]
fn compare(a: f64, b: f64, order: RankOrder) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
            match order {
                RankOrder::Ascending => ord,
                RankOrder::Descending => ord.reverse(),
            }
        }
    }
}

/// Returns the first `top_n` words under `order`.
///
/// The sort is stable, so ties keep the table's token order. Fewer than
/// `top_n` words is not an error: all of them are returned.
pub fn rank(table: &WordTable, key: RankKey, order: RankOrder, top_n: usize) -> Vec<&WordAggregate> {
    let mut ranked: Vec<&WordAggregate> = table.words().iter().collect();
    ranked.sort_by(|a, b| compare(key.value(a), key.value(b), order));
    ranked.truncate(top_n);
    ranked
}

/// Concatenates `token + " "` repeated once per occurrence, for every word
/// in order.
///
/// A word seen 40 times appears 40 times, which gives the output a crude
/// word-cloud weighting.
pub fn render(words: &[&WordAggregate]) -> String {
    let len = words
        .iter()
        .map(|w| (w.token.len() + 1) * w.occurrences as usize)
        .sum();
    let mut out = String::with_capacity(len);

    for word in words {
        for _ in 0..word.occurrences {
            out.push_str(&word.token);
            out.push(' ');
        }
    }

    out
}
