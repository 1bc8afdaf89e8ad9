//! In-memory table loaded from a simulator CSV file.

use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};

use crate::core::{Result, VisualizerError, VisualizerErrorKind};

/// Rows of trimmed string cells under named columns, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    path: PathBuf,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(path: impl Into<PathBuf>, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            path: path.into(),
            headers,
            rows,
        }
    }

    /// Read a CSV file with a header row.
    ///
    /// A file without any header is reported as empty, a file that does not
    /// parse as CSV as malformed, and anything else that goes wrong while
    /// reading as a read failure. A header-only file is a valid table with no rows.
    pub fn from_csv(path: &Path) -> Result<Table> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_path(path)
            .map_err(|source| read_error(path, source))?;

        let headers: Vec<String> = reader
            .headers()
            .map_err(|source| read_error(path, source))?
            .iter()
            .map(str::to_string)
            .collect();

        if headers.iter().all(String::is_empty) {
            return Err(VisualizerErrorKind::EmptyCsv {
                path: path.to_path_buf(),
            }
            .into());
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|source| read_error(path, source))?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        tracing::debug!(
            "Loaded {} rows with columns {:?} from {}",
            rows.len(),
            headers,
            path.display()
        );

        Ok(Table::new(path, headers, rows))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, column: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|header| header == column)
            .ok_or_else(|| {
                VisualizerError::from(VisualizerErrorKind::MissingColumn {
                    column: column.to_string(),
                    path: self.path.clone(),
                })
                .with_hint(Some(format!("Available columns: {}", self.headers.join(", "))))
            })
    }

    /// All cells of a column as text
    pub fn text_column(&self, column: &str) -> Result<Vec<String>> {
        let index = self.column_index(column)?;
        Ok(self
            .rows
            .iter()
            .map(|row| row.get(index).cloned().unwrap_or_default())
            .collect())
    }

    /// All cells of a column parsed as numbers
    pub fn numeric_column(&self, column: &str) -> Result<Vec<f64>> {
        let index = self.column_index(column)?;
        self.rows
            .iter()
            .enumerate()
            .map(|(row, cells)| self.parse_cell(cells, index, column, row))
            .collect()
    }

    pub(crate) fn parse_cell(
        &self,
        cells: &[String],
        index: usize,
        column: &str,
        row: usize,
    ) -> Result<f64> {
        let value = cells.get(index).map(String::as_str).unwrap_or_default();
        value.parse::<f64>().map_err(|_| {
            VisualizerErrorKind::InvalidValue {
                column: column.to_string(),
                row: row + 1,
                value: value.to_string(),
                path: self.path.clone(),
            }
            .into()
        })
    }

    pub(crate) fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

fn read_error(path: &Path, source: csv::Error) -> VisualizerError {
    let path = path.to_path_buf();
    if source.is_io_error() {
        VisualizerErrorKind::CsvRead { path, source }.into()
    } else {
        VisualizerErrorKind::MalformedCsv { path, source }.into()
    }
}
