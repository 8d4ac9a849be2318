use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Value;
use crate::error::{FrameError, Result};

/// Declared type of a [`Column`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    String,
    Int,
    Double,
    Boolean,
    /// No declared type; values may be heterogeneous.
    Unspecified,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::String => "string",
            ColumnType::Int => "int",
            ColumnType::Double => "double",
            ColumnType::Boolean => "boolean",
            ColumnType::Unspecified => "unspecified",
        }
    }

    /// Whether a raw text field is representable as this type.
    pub fn accepts(&self, raw: &str) -> bool {
        let raw = raw.trim();
        match self {
            ColumnType::String | ColumnType::Unspecified => true,
            ColumnType::Int => raw.parse::<i64>().is_ok(),
            ColumnType::Double => raw.parse::<f64>().map_or(false, f64::is_finite),
            ColumnType::Boolean => {
                raw.eq_ignore_ascii_case("true") || raw.eq_ignore_ascii_case("false")
            }
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnType {
    type Err = FrameError;

    fn from_str(tag: &str) -> Result<Self> {
        let trimmed = tag.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "" | "unspecified" => Ok(ColumnType::Unspecified),
            "string" | "str" => Ok(ColumnType::String),
            "int" | "integer" | "long" => Ok(ColumnType::Int),
            "double" | "float" => Ok(ColumnType::Double),
            "boolean" | "bool" => Ok(ColumnType::Boolean),
            _ => Err(FrameError::UnknownColumnType {
                tag: trimmed.to_string(),
            }),
        }
    }
}

/// A named, typed, ordered sequence of values.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    dtype: ColumnType,
    values: Vec<Value>,
}

impl Column {
    pub fn new(name: impl Into<String>, dtype: ColumnType, values: Vec<Value>) -> Self {
        Column {
            name: name.into(),
            dtype,
            values,
        }
    }

    /// Column with an [`Unspecified`](ColumnType::Unspecified) type, as built
    /// from a caller-supplied mapping.
    pub fn untyped<I, V>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Column::new(
            name,
            ColumnType::Unspecified,
            values.into_iter().map(Into::into).collect(),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dtype(&self) -> ColumnType {
        self.dtype
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn get(&self, row: usize) -> Option<&Value> {
        self.values.get(row)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Every value coerced to `f64`, failing on the first non-numeric one.
    pub fn numeric_values(&self) -> Result<Vec<f64>> {
        self.values
            .iter()
            .enumerate()
            .map(|(row, value)| {
                value.as_f64().ok_or_else(|| FrameError::NotANumber {
                    column: self.name.clone(),
                    row,
                    value: value.to_string(),
                })
            })
            .collect()
    }

    pub(crate) fn push(&mut self, value: Value) {
        self.values.push(value);
    }
}
