use std::fmt;

/// A single cell of a [`Column`](super::Column).
///
/// Ingested cells are kept as the raw text they were read from (`Utf8`);
/// mapping-built columns keep whatever native scalar the caller supplied.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Utf8(String),
    Int64(i64),
    Float64(f64),
    Bool(bool),
}

impl Value {
    /// Numeric view of the cell.
    ///
    /// Integers and finite floats convert directly. Text converts when its trimmed
    /// form parses as an `i64`, or else as a finite `f64`. Booleans are never
    /// numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int64(v) => Some(*v as f64),
            Value::Float64(v) => Some(*v).filter(|v| v.is_finite()),
            Value::Utf8(s) => parse_numeric(s),
            Value::Bool(_) => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.as_f64().is_some()
    }
}

pub(crate) fn parse_numeric(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if let Ok(v) = trimmed.parse::<i64>() {
        return Some(v as f64);
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Utf8(v) => f.write_str(v),
            Value::Int64(v) => write!(f, "{}", v),
            Value::Float64(v) => write!(f, "{}", v),
            Value::Bool(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int64(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Utf8(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Utf8(v)
    }
}
