//! In-memory tabular dataset.
//!
//! Cells are kept as text with an explicit null marker; numeric views are
//! derived on demand. Rows are identified by their position
//! ([`SampleId`]).

mod loader;

pub use loader::{is_null_marker, NULL_MARKERS};

use crate::analyzer::TextNormalizer;
use typestat_types::{SampleId, SchemaError};

/// A named column of nullable text cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    cells: Vec<Option<String>>,
}

impl Column {
    /// Creates a column from raw cells.
    pub fn new(name: impl Into<String>, cells: Vec<Option<String>>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    /// Builds a text column from optional string slices.
    pub fn from_text<'a, I>(name: impl Into<String>, cells: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        Self::new(
            name,
            cells.into_iter().map(|c| c.map(str::to_string)).collect(),
        )
    }

    /// Builds a fully populated numeric column.
    pub fn from_values<I>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        Self::new(
            name,
            values.into_iter().map(|v| Some(v.to_string())).collect(),
        )
    }

    /// Column name as it appears in the header.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All cells, `None` for null.
    #[inline]
    pub fn cells(&self) -> &[Option<String>] {
        &self.cells
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the column has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the cell at `row`, `None` if null or out of range.
    #[inline]
    pub fn get(&self, row: SampleId) -> Option<&str> {
        self.cells.get(row as usize)?.as_deref()
    }

    /// Iterates over non-null cells with their row identity.
    pub fn non_null(&self) -> impl Iterator<Item = (SampleId, &str)> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(row, cell)| Some((row as SampleId, cell.as_deref()?)))
    }

    /// Parses every cell as a float.
    ///
    /// Returns `None` if any non-null cell is not a number. A column with
    /// only null cells is numeric.
    pub fn to_numeric(&self) -> Option<NumericColumn> {
        let values = self
            .cells
            .iter()
            .map(|cell| match cell {
                None => Some(None),
                Some(text) => text.trim().parse::<f64>().ok().map(Some),
            })
            .collect::<Option<Vec<_>>>()?;

        Some(NumericColumn {
            name: self.name.clone(),
            values,
        })
    }
}

/// A parsed numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericColumn {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

impl NumericColumn {
    /// Value at `row`, `None` if null or out of range.
    #[inline(always)]
    pub fn get(&self, row: SampleId) -> Option<f64> {
        self.values.get(row as usize).copied().flatten()
    }
}

/// The loaded table of samples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
    rows: usize,
}

impl Dataset {
    /// Creates a dataset, padding short columns with nulls.
    pub fn new(mut columns: Vec<Column>) -> Self {
        let rows = columns.iter().map(Column::len).max().unwrap_or(0);
        for column in &mut columns {
            column.cells.resize(rows, None);
        }
        Self { columns, rows }
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows
    }

    /// Returns `true` if there are no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Column names in header order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(Column::name)
    }

    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Looks up a column that must exist.
    pub fn require(&self, name: &str) -> Result<&Column, SchemaError> {
        self.column(name).ok_or_else(|| SchemaError::missing(name))
    }

    fn require_mut(&mut self, name: &str) -> Result<&mut Column, SchemaError> {
        self.columns
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| SchemaError::missing(name))
    }

    /// Normalizes every non-null cell of `name` in place.
    ///
    /// Returns the number of cells rewritten.
    pub fn normalize_column(
        &mut self,
        name: &str,
        normalizer: &TextNormalizer,
    ) -> Result<usize, SchemaError> {
        let column = self.require_mut(name)?;
        let mut scratch = String::new();
        let mut rewritten = 0usize;

        for text in column.cells.iter_mut().flatten() {
            normalizer.normalize_in_place(text, &mut scratch);
            rewritten += 1;
        }

        Ok(rewritten)
    }

    /// Numeric views of every numeric column except `excluding`.
    pub fn numeric_columns(&self, excluding: &str) -> Vec<NumericColumn> {
        self.columns
            .iter()
            .filter(|c| c.name != excluding)
            .filter_map(Column::to_numeric)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::new(vec![
            Column::from_text("Text", [Some("Hello, World"), None, Some("A-B")]),
            Column::from_values("Speed (WPM)", [50.0, 60.0, 70.0]),
            Column::from_text("Tags", [Some("x"), Some("y"), None]),
        ])
    }

    #[test]
    fn lookup_by_name() {
        let ds = sample();
        assert_eq!(ds.len(), 3);
        assert_eq!(
            ds.column_names().collect::<Vec<_>>(),
            ["Text", "Speed (WPM)", "Tags"]
        );
        assert_eq!(ds.column("Tags").and_then(|c| c.get(1)), Some("y"));
        assert!(ds.column("Nope").is_none());
    }

    #[test]
    fn require_reports_missing_column() {
        let ds = sample();
        assert_eq!(
            ds.require("Accuracy").unwrap_err(),
            SchemaError::missing("Accuracy")
        );
    }

    #[test]
    fn short_columns_are_padded_with_nulls() {
        let ds = Dataset::new(vec![
            Column::from_text("Text", [Some("a")]),
            Column::from_values("Speed", [1.0, 2.0]),
        ]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.column("Text").map(Column::len), Some(2));
        assert_eq!(ds.column("Text").and_then(|c| c.get(1)), None);
    }

    #[test]
    fn normalize_skips_null_cells() {
        let mut ds = sample();
        let n = ds
            .normalize_column("Text", &TextNormalizer::new())
            .expect("text column exists");
        assert_eq!(n, 2);

        let text = ds.column("Text").expect("text column exists");
        assert_eq!(text.get(0), Some("hello  world"));
        assert_eq!(text.get(1), None);
        assert_eq!(text.get(2), Some("a b"));
    }

    #[test]
    fn normalize_missing_column_fails() {
        let mut ds = sample();
        assert!(ds.normalize_column("Body", &TextNormalizer::new()).is_err());
    }

    #[test]
    fn numeric_detection() {
        let ds = sample();
        let numeric = ds.numeric_columns("Text");
        assert_eq!(numeric.len(), 1);
        assert_eq!(numeric[0].name, "Speed (WPM)");
        assert_eq!(numeric[0].get(2), Some(70.0));
    }

    #[test]
    fn numeric_with_nulls() {
        let col = Column::new(
            "Accuracy",
            vec![Some(" 97.5 ".into()), None, Some("100".into())],
        );
        let numeric = col.to_numeric().expect("numeric");
        assert_eq!(numeric.values, [Some(97.5), None, Some(100.0)]);
        assert_eq!(numeric.get(1), None);
        assert_eq!(numeric.get(9), None);
    }

    #[test]
    fn all_null_column_is_numeric() {
        let col = Column::new("Empty", vec![None, None]);
        assert!(col.to_numeric().is_some());
    }

    #[test]
    fn non_null_iterates_with_identity() {
        let ds = sample();
        let text = ds.column("Text").expect("text column exists");
        let rows: Vec<_> = text.non_null().map(|(row, _)| row).collect();
        assert_eq!(rows, [0, 2]);
    }
}
