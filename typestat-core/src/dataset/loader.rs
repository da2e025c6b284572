//! CSV loading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use super::{Column, Dataset};
use crate::error::{AnalysisError, Result};

/// Cell contents treated as missing values, in addition to the empty cell.
pub const NULL_MARKERS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Returns `true` if a raw cell should load as null.
#[inline]
pub fn is_null_marker(cell: &str) -> bool {
    cell.is_empty() || NULL_MARKERS.contains(&cell)
}

/// Header names with blanks filled in and duplicates suffixed (`a`, `a.1`).
fn header_names(raw: &csv::StringRecord) -> Vec<String> {
    let mut seen: FxHashMap<String, usize> = FxHashMap::default();
    let mut names = Vec::with_capacity(raw.len());

    for (i, name) in raw.iter().enumerate() {
        let base = if name.is_empty() {
            format!("Unnamed: {i}")
        } else {
            name.to_string()
        };

        let mut candidate = base.clone();
        while let Some(n) = seen.get_mut(&candidate) {
            *n += 1;
            candidate = format!("{base}.{n}");
        }
        seen.insert(candidate.clone(), 0);
        names.push(candidate);
    }

    names
}

impl Dataset {
    /// Loads a comma-delimited file with a header row.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::Load` if the file cannot be opened and
    /// `AnalysisError::Read` / `AnalysisError::Malformed` if its contents
    /// cannot be parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| AnalysisError::Load {
            path: path.to_path_buf(),
            source: csv::Error::from(e),
        })?;

        let dataset = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            rows = dataset.len(),
            columns = dataset.columns.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Loads CSV data from any reader.
    ///
    /// Records shorter than the header are padded with nulls; longer ones
    /// are rejected.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let names = header_names(reader.headers()?);
        let width = names.len();
        let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); width];

        for record in reader.records() {
            let record = record?;
            if record.len() > width {
                return Err(AnalysisError::Malformed {
                    line: record.position().map_or(0, csv::Position::line),
                    expected: width,
                    found: record.len(),
                });
            }

            for (i, column) in cells.iter_mut().enumerate() {
                let cell = record.get(i).filter(|c| !is_null_marker(c));
                column.push(cell.map(str::to_string));
            }
        }

        debug!(columns = width, "parsed csv records");

        Ok(Dataset::new(
            names
                .into_iter()
                .zip(cells)
                .map(|(name, cells)| Column::new(name, cells))
                .collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(csv: &str) -> Dataset {
        Dataset::from_reader(csv.as_bytes()).expect("valid csv")
    }

    #[test]
    fn loads_header_and_rows() {
        let ds = load("Text,Speed (WPM)\nhello world,50\nhello there,60\n");
        assert_eq!(ds.len(), 2);
        assert_eq!(
            ds.column("Text").and_then(|c| c.get(1)),
            Some("hello there")
        );
        assert_eq!(
            ds.column("Speed (WPM)")
                .and_then(Column::to_numeric)
                .and_then(|c| c.get(0)),
            Some(50.0)
        );
    }

    #[test]
    fn quoted_fields_keep_commas() {
        let ds = load("Text,Speed\n\"Well, hello\",42\n");
        assert_eq!(ds.column("Text").and_then(|c| c.get(0)), Some("Well, hello"));
    }

    #[test]
    fn empty_and_marker_cells_are_null() {
        let ds = load("Text,Speed\n,1\nNaN,2\nN/A,3\nnull,4\nreal,5\n");
        let text = ds.column("Text").expect("text column");
        let present: Vec<_> = text.non_null().collect();
        assert_eq!(present, [(4, "real")]);
    }

    #[test]
    fn null_markers() {
        assert!(is_null_marker(""));
        assert!(is_null_marker("NA"));
        assert!(is_null_marker("<NA>"));
        assert!(!is_null_marker("na"));
        assert!(!is_null_marker("none"));
        assert!(!is_null_marker(" "));
    }

    #[test]
    fn short_records_are_padded() {
        let ds = load("Text,Speed,Accuracy\nhi,10\n");
        assert_eq!(ds.column("Accuracy").and_then(|c| c.get(0)), None);
        assert_eq!(ds.column("Speed").and_then(|c| c.get(0)), Some("10"));
    }

    #[test]
    fn long_records_are_rejected() {
        let err = Dataset::from_reader("Text,Speed\nhi,10,extra\n".as_bytes()).unwrap_err();
        match err {
            AnalysisError::Malformed {
                line,
                expected,
                found,
            } => {
                assert_eq!(line, 2);
                assert_eq!(expected, 2);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn blank_and_duplicate_headers() {
        let ds = load(",Speed,Speed,Speed\n0,1,2,3\n");
        assert_eq!(
            ds.column_names().collect::<Vec<_>>(),
            ["Unnamed: 0", "Speed", "Speed.1", "Speed.2"]
        );
    }

    #[test]
    fn header_only_is_empty() {
        let ds = load("Text,Speed\n");
        assert!(ds.is_empty());
        assert!(ds.column("Text").is_some());
    }

    #[test]
    fn missing_file_is_load_error() {
        let err = Dataset::from_path("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, AnalysisError::Load { .. }));
        assert!(err.to_string().contains("/definitely/not/here.csv"));
    }
}
