use thiserror::Error;

use crate::dataframe::ColumnType;

/// Errors raised while building or querying a [`DataFrame`](crate::DataFrame).
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("'{0}' is not a column name")]
    LabelNotFound(String),

    #[error("column index {index} is out of range for {len} columns")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid row range {start}..{end} for a frame of {size} rows")]
    InvalidRange {
        start: usize,
        end: usize,
        size: usize,
    },

    #[error("operation is undefined on a frame with no columns")]
    EmptyDataFrame,

    #[error("column '{0}' has no values")]
    EmptyColumn(String),

    #[error("column '{column}' holds a non-numeric value {value:?} at row {row}")]
    NotANumber {
        column: String,
        row: usize,
        value: String,
    },

    #[error("column '{column}' has {found} values, expected {expected}")]
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("line {line} has {found} fields, expected {expected}")]
    MalformedInput {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("header declares {types} types but {labels} labels")]
    MalformedHeader { types: usize, labels: usize },

    #[error("column {position} has an empty label")]
    EmptyLabel { position: usize },

    #[error("missing header line {line}")]
    MissingHeader { line: u64 },

    #[error("unknown column type '{tag}'")]
    UnknownColumnType { tag: String },

    #[error("line {line}: value {value:?} in column '{column}' is not a valid {expected}")]
    TypeMismatch {
        line: u64,
        column: String,
        expected: ColumnType,
        value: String,
    },

    #[error("{operation} is not supported")]
    Unsupported { operation: &'static str },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl FrameError {
    /// True for failures reading the source or its header, as opposed to
    /// failures of the data it holds.
    pub fn is_io(&self) -> bool {
        match self {
            FrameError::Io(_)
            | FrameError::MissingHeader { .. }
            | FrameError::MalformedHeader { .. }
            | FrameError::UnknownColumnType { .. } => true,
            FrameError::Csv(err) => err.is_io_error(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, FrameError>;
