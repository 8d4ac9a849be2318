use std::collections::HashSet;
use std::fmt;

use super::display::RowSlice;
use super::{stats, Column, ColumnType, Value};
use crate::error::{FrameError, Result};

/// An ordered collection of same-length [`Column`]s, addressable by label or
/// by position.
#[derive(Debug, Clone, PartialEq)]
pub struct DataFrame {
    labels: Vec<String>,
    columns: Vec<Column>,
}

impl DataFrame {
    /// Build a frame from a label → values mapping.
    ///
    /// Columns are created in the iteration order of `mapping` with an
    /// [`Unspecified`](ColumnType::Unspecified) type. Every column must have
    /// the same length as the first one.
    pub fn from_map<I, K, V, T>(mapping: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let columns = mapping
            .into_iter()
            .map(|(label, values)| Column::untyped(label, values))
            .collect();
        Self::from_columns(columns)
    }

    /// Build a frame from pre-built columns, keeping their declared types.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        check_labels(columns.iter().map(Column::name))?;
        if let Some(first) = columns.first() {
            let expected = first.len();
            if let Some(bad) = columns.iter().find(|c| c.len() != expected) {
                return Err(FrameError::ColumnLengthMismatch {
                    column: bad.name().to_string(),
                    expected,
                    found: bad.len(),
                });
            }
        }

        let labels: Vec<String> = columns.iter().map(|c| c.name().to_string()).collect();
        let mut seen = HashSet::new();
        for label in &labels {
            if !seen.insert(label.as_str()) {
                log::warn!("duplicate column label '{}'; lookups resolve to the last one", label);
            }
        }

        let frame = DataFrame { labels, columns };
        log::debug!(
            "built frame with {} columns and {} rows",
            frame.width(),
            frame.columns.first().map_or(0, Column::len)
        );
        Ok(frame)
    }

    pub(crate) fn with_header(types: Vec<ColumnType>, labels: Vec<String>) -> Self {
        let columns = labels
            .iter()
            .zip(types)
            .map(|(label, dtype)| Column::new(label.clone(), dtype, Vec::new()))
            .collect();
        DataFrame { labels, columns }
    }

    pub(crate) fn push_row<'r>(&mut self, row: impl IntoIterator<Item = &'r str>) {
        for (column, field) in self.columns.iter_mut().zip(row) {
            column.push(Value::Utf8(field.to_string()));
        }
    }

    /// Column labels in construction order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Declared type of each column, aligned with [`labels`](Self::labels).
    pub fn types(&self) -> Vec<ColumnType> {
        self.columns.iter().map(Column::dtype).collect()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn contains_label(&self, label: &str) -> bool {
        self.columns.iter().any(|c| c.name() == label)
    }

    /// Number of rows, i.e. the length of the first column.
    pub fn size(&self) -> Result<usize> {
        self.columns
            .first()
            .map(Column::len)
            .ok_or(FrameError::EmptyDataFrame)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Get shape (rows, columns)
    pub fn shape(&self) -> Result<(usize, usize)> {
        Ok((self.size()?, self.width()))
    }

    /// The column registered last under `label`.
    pub fn get_column(&self, label: &str) -> Result<&Column> {
        self.columns
            .iter()
            .rev()
            .find(|c| c.name() == label)
            .ok_or_else(|| FrameError::LabelNotFound(label.to_string()))
    }

    /// The column at position `index`, counted over columns.
    pub fn column_at(&self, index: usize) -> Result<&Column> {
        self.columns.get(index).ok_or(FrameError::IndexOutOfRange {
            index,
            len: self.columns.len(),
        })
    }

    /// View over rows `[start, end)`.
    pub fn fetch_range(&self, start: usize, end: usize) -> Result<RowSlice<'_>> {
        let size = self.size()?;
        if start > end || end > size {
            return Err(FrameError::InvalidRange { start, end, size });
        }
        Ok(RowSlice::new(self, start, end))
    }

    pub fn fetch_all(&self) -> Result<RowSlice<'_>> {
        self.fetch_range(0, self.size()?)
    }

    /// First `n` rows.
    pub fn head(&self, n: usize) -> Result<RowSlice<'_>> {
        let size = self.size()?;
        if n > size {
            return Err(FrameError::InvalidRange {
                start: 0,
                end: n,
                size,
            });
        }
        self.fetch_range(0, n)
    }

    /// Last `n` rows.
    pub fn tail(&self, n: usize) -> Result<RowSlice<'_>> {
        let size = self.size()?;
        if n > size {
            return Err(FrameError::InvalidRange {
                start: 0,
                end: n,
                size,
            });
        }
        self.fetch_range(size - n, size)
    }

    pub fn sum(&self, label: &str) -> Result<f64> {
        stats::sum(self.get_column(label)?)
    }

    pub fn min(&self, label: &str) -> Result<f64> {
        stats::min(self.get_column(label)?)
    }

    pub fn max(&self, label: &str) -> Result<f64> {
        stats::max(self.get_column(label)?)
    }

    pub fn mean(&self, label: &str) -> Result<f64> {
        stats::mean(self.get_column(label)?)
    }

    // Mutations are refused: a built frame stays read-only.

    pub fn insert_row(&mut self, _row: Vec<Value>) -> Result<()> {
        Err(FrameError::Unsupported {
            operation: "insert_row",
        })
    }

    pub fn insert_column(&mut self, _column: Column) -> Result<()> {
        Err(FrameError::Unsupported {
            operation: "insert_column",
        })
    }

    pub fn drop_column(&mut self, _label: &str) -> Result<()> {
        Err(FrameError::Unsupported {
            operation: "drop_column",
        })
    }

    pub fn drop_column_at(&mut self, _index: usize) -> Result<()> {
        Err(FrameError::Unsupported {
            operation: "drop_column_at",
        })
    }

    pub fn pop(&mut self, _label: &str) -> Result<Column> {
        Err(FrameError::Unsupported { operation: "pop" })
    }
}

/// Every label must be non-empty once trimmed.
pub(crate) fn check_labels<'l>(labels: impl IntoIterator<Item = &'l str>) -> Result<()> {
    match labels.into_iter().position(|l| l.trim().is_empty()) {
        Some(position) => Err(FrameError::EmptyLabel { position }),
        None => Ok(()),
    }
}

impl fmt::Display for DataFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fetch_all() {
            Ok(rows) => write!(f, "{}", rows),
            // no columns: nothing to draw
            Err(FrameError::EmptyDataFrame) => Ok(()),
            Err(_) => Err(fmt::Error),
        }
    }
}
