//! Per-word aggregation.
//!
//! Text is exploded into (sample, token) rows, each row is tagged with the
//! global occurrence count of its token, and rows are grouped by token into
//! [`WordAggregate`]s holding the mean of every numeric field.
//!
//! Word tables are kept sorted by token, which is the tie-break order the
//! reporter relies on.

mod aggregate;
mod explode;
mod types;

pub use aggregate::{aggregate, group};
pub use explode::{comma_values, explode, value_counts};
pub use types::{Exploded, TokenRow, TokenTable, WordAggregate, WordTable, INLINE_FIELDS};
