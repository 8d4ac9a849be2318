//! Numeric aggregates over a single [`Column`].
//!
//! Each aggregate coerces the whole column through
//! [`Column::numeric_values`] first, so one non-numeric cell fails the call
//! before anything is computed.

use super::Column;
use crate::error::{FrameError, Result};

pub fn sum(column: &Column) -> Result<f64> {
    let values = column.numeric_values()?;
    log::trace!("sum over '{}' ({} values)", column.name(), values.len());
    Ok(values.iter().sum())
}

pub fn mean(column: &Column) -> Result<f64> {
    let values = column.numeric_values()?;
    if values.is_empty() {
        return Err(FrameError::EmptyColumn(column.name().to_string()));
    }
    log::trace!("mean over '{}' ({} values)", column.name(), values.len());
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

pub fn min(column: &Column) -> Result<f64> {
    extremum(column, |best, x| x < best)
}

pub fn max(column: &Column) -> Result<f64> {
    extremum(column, |best, x| x > best)
}

fn extremum(column: &Column, replaces: impl Fn(f64, f64) -> bool) -> Result<f64> {
    let values = column.numeric_values()?;
    let (&seed, rest) = values
        .split_first()
        .ok_or_else(|| FrameError::EmptyColumn(column.name().to_string()))?;
    Ok(rest
        .iter()
        .fold(seed, |best, &x| if replaces(best, x) { x } else { best }))
}
