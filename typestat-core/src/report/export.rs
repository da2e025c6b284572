//! Full word table output: CSV file and a text dump.

use core::fmt;
use std::io;
use std::path::Path;

use tracing::info;

use crate::error::{AnalysisError, Result};
use crate::words::WordTable;

/// Formats a float the way the exported table shows it.
///
/// Whole numbers keep one decimal (`55.0`) and NaN becomes an empty cell.
/// Whole numbers of 1e16 and above print as plain digits, where pandas
/// would write `1e+16`.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

impl WordTable {
    fn record(&self, index: usize) -> Vec<String> {
        let word = &self.words[index];
        let mut record = Vec::with_capacity(self.fields.len() + 2);
        record.push(word.token.clone());
        record.extend(word.means.iter().map(|&m| format_float(m)));
        record.push(format_float(f64::from(word.occurrences)));
        record
    }

    /// Writes the table as CSV: key column, field means, occurrence count.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> csv::Result<()> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(self.header())?;
        for index in 0..self.words.len() {
            writer.write_record(self.record(index))?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Writes the table as CSV to `path`.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::Export` if the file cannot be created or
    /// written.
    pub fn export(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let to_error = |source| AnalysisError::Export {
            path: path.to_path_buf(),
            source,
        };

        let file = std::fs::File::create(path).map_err(|e| to_error(csv::Error::from(e)))?;
        self.write_csv(io::BufWriter::new(file)).map_err(to_error)?;

        info!(path = %path.display(), words = self.len(), "wrote word table");
        Ok(())
    }
}

/// Aligned text dump: key column left-aligned, numbers right-aligned,
/// followed by a `[rows x columns]` footer.
impl fmt::Display for WordTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<&str> = self.header().collect();
        let rows: Vec<Vec<String>> = (0..self.words.len()).map(|i| self.record(i)).collect();

        let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        for (i, name) in header.iter().enumerate() {
            if i == 0 {
                write!(f, "{name:<w$}", w = widths[0])?;
            } else {
                write!(f, "  {name:>w$}", w = widths[i])?;
            }
        }
        writeln!(f)?;

        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                if i == 0 {
                    write!(f, "{cell:<w$}", w = widths[0])?;
                } else {
                    write!(f, "  {cell:>w$}", w = widths[i])?;
                }
            }
            writeln!(f)?;
        }

        write!(f, "\n[{} rows x {} columns]", rows.len(), header.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::WordAggregate;
    use smallvec::smallvec;

    fn sample() -> WordTable {
        WordTable {
            key: "Text".to_string(),
            fields: vec!["Speed (WPM)".to_string(), "Accuracy".to_string()],
            words: vec![
                WordAggregate {
                    token: "hello".to_string(),
                    means: smallvec![55.0, f64::NAN],
                    occurrences: 2,
                },
                WordAggregate {
                    token: "world".to_string(),
                    means: smallvec![60.5, 98.25],
                    occurrences: 2,
                },
            ],
        }
    }

    #[test]
    fn float_formatting() {
        assert_eq!(format_float(55.0), "55.0");
        assert_eq!(format_float(60.5), "60.5");
        assert_eq!(format_float(-3.0), "-3.0");
        assert_eq!(format_float(f64::NAN), "");
        assert_eq!(format_float(1e16), "10000000000000000");
    }

    #[test]
    fn csv_layout() {
        let mut out = Vec::new();
        sample().write_csv(&mut out).expect("write to vec");
        let text = String::from_utf8(out).expect("utf8");

        assert_eq!(
            text,
            "Text,Speed (WPM),Accuracy,count\n\
             hello,55.0,,2.0\n\
             world,60.5,98.25,2.0\n"
        );
    }

    #[test]
    fn empty_table_writes_header_only() {
        let table = WordTable {
            key: "Text".to_string(),
            fields: vec!["Speed (WPM)".to_string()],
            words: Vec::new(),
        };
        let mut out = Vec::new();
        table.write_csv(&mut out).expect("write to vec");
        assert_eq!(String::from_utf8(out).expect("utf8"), "Text,Speed (WPM),count\n");
    }

    #[test]
    fn display_is_aligned() {
        let dump = sample().to_string();
        let lines: Vec<&str> = dump.lines().collect();

        assert_eq!(lines[0], "Text   Speed (WPM)  Accuracy  count");
        assert_eq!(lines[1], "hello         55.0              2.0");
        assert_eq!(lines[2], "world         60.5     98.25    2.0");
        assert_eq!(lines.last(), Some(&"[2 rows x 3 columns]"));
    }

    #[test]
    fn export_writes_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("outfile.csv");

        sample().export(&path).expect("export");
        let written = std::fs::read_to_string(&path).expect("read back");
        assert!(written.starts_with("Text,Speed (WPM),Accuracy,count\n"));
        assert_eq!(written.lines().count(), 3);
    }

    #[test]
    fn export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nope").join("outfile.csv");

        let err = sample().export(&path).unwrap_err();
        assert!(matches!(err, AnalysisError::Export { .. }));
    }
}
