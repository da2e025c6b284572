//! Worst/best word reports.
//!
//! Word aggregates are ranked by one numeric field, the top words are
//! taken in each direction, and each list is rendered as a single string
//! where every word repeats once per occurrence.

mod export;
mod rank;

pub use export::format_float;
pub use rank::{rank, render, RankKey};

use core::fmt;

use crate::words::WordTable;
use typestat_types::{RankOrder, SchemaError};

/// The two rendered reports.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    /// Ascending ranking: words most associated with slow typing.
    pub worst: String,
    /// Descending ranking: words most associated with fast typing.
    pub best: String,
}

impl Report {
    /// Ranks `table` by `rank_field` and renders the top `top_n` words in
    /// each direction.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::MissingColumn` if `rank_field` is not a field of
    /// the table.
    pub fn build(table: &WordTable, rank_field: &str, top_n: usize) -> Result<Self, SchemaError> {
        let key = table.rank_key(rank_field)?;
        let render_order = |order| render(&rank(table, key, order, top_n));

        Ok(Self {
            worst: render_order(RankOrder::Ascending),
            best: render_order(RankOrder::Descending),
        })
    }

    /// Rendered string for `order`.
    #[inline]
    pub fn rendered(&self, order: RankOrder) -> &str {
        match order {
            RankOrder::Ascending => &self.worst,
            RankOrder::Descending => &self.best,
        }
    }

    /// Output lines, each prefixed with its order's tag.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        RankOrder::BOTH
            .into_iter()
            .map(move |order| format!("{} {}", order.tag(), self.rendered(order)))
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::WordAggregate;
    use smallvec::smallvec;

    fn table() -> WordTable {
        let word = |token: &str, speed: f64| WordAggregate {
            token: token.to_string(),
            means: smallvec![speed],
            occurrences: 2,
        };
        WordTable {
            key: "Text".to_string(),
            fields: vec!["Speed (WPM)".to_string()],
            words: vec![word("hello", 55.0), word("world", 60.0)],
        }
    }

    #[test]
    fn builds_both_directions() {
        let report = Report::build(&table(), "Speed (WPM)", 10).expect("report");
        assert_eq!(report.worst, "hello hello world world ");
        assert_eq!(report.best, "world world hello hello ");
        assert_eq!(report.rendered(RankOrder::Ascending), report.worst);
    }

    #[test]
    fn lines_are_tagged() {
        let report = Report::build(&table(), "Speed (WPM)", 1).expect("report");
        let lines: Vec<String> = report.lines().collect();
        assert_eq!(lines, ["1 hello hello ", "2 world world "]);
        assert_eq!(report.to_string(), "1 hello hello \n2 world world \n");
    }

    #[test]
    fn empty_table_renders_empty_strings() {
        let empty = WordTable {
            key: "Text".to_string(),
            fields: vec!["Speed (WPM)".to_string()],
            words: Vec::new(),
        };
        let report = Report::build(&empty, "Speed (WPM)", 10).expect("report");
        assert_eq!(report, Report::default());
        assert_eq!(report.lines().collect::<Vec<_>>(), ["1 ", "2 "]);
    }

    #[test]
    fn zero_top_n_is_empty() {
        let report = Report::build(&table(), "Speed (WPM)", 0).expect("report");
        assert!(report.worst.is_empty());
        assert!(report.best.is_empty());
    }

    #[test]
    fn missing_rank_field() {
        assert!(matches!(
            Report::build(&table(), "Accuracy", 10),
            Err(SchemaError::MissingColumn { .. })
        ));
    }
}
