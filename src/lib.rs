//! # TinyFrames
//!
//! A small labeled, column-oriented DataFrame.
//!
//! TinyFrames provides:
//! - DataFrames built from a label → values mapping or from typed delimited text
//! - Column lookup by label (last registration wins) or by position
//! - Row-range views rendered through a pluggable table renderer
//! - Checked numeric aggregates (sum, min, max, mean)
//!
//! ## Quick Start
//!
//! ```rust
//! use tinyframes::{CsvOptions, DataFrame, Value};
//!
//! // Create DataFrame
//! let df = DataFrame::from_map(vec![
//!     ("name", vec![Value::from("Alice"), Value::from("Bob"), Value::from("Charlie")]),
//!     ("age", vec![Value::from(25), Value::from(30), Value::from(35)]),
//! ])?;
//!
//! assert_eq!(df.size()?, 3);
//! assert_eq!(df.mean("age")?, 30.0);
//! println!("{}", df.head(2)?);
//!
//! // Typed text: one line of types, one line of labels, then rows
//! let csv = "string,double\nname,score\nAlice,85.5\nBob,92\n";
//! let df = DataFrame::from_csv_str(csv, &CsvOptions::default())?;
//! assert_eq!(df.max("score")?, 92.0);
//! # Ok::<(), tinyframes::FrameError>(())
//! ```

pub mod dataframe;
pub mod error;

// Re-export main types for convenience
pub use dataframe::{
    AsciiGrid, Column, ColumnType, CsvOptions, DataFrame, RowSlice, TableRenderer, Value,
};
pub use error::{FrameError, Result};
