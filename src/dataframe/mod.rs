pub mod column;
pub mod core;
pub mod display;
pub mod io;
pub mod stats;
pub mod value;

pub use column::{Column, ColumnType};
pub use self::core::DataFrame;
pub use display::{AsciiGrid, RowSlice, Rows, TableRenderer};
pub use io::CsvOptions;
pub use value::Value;
