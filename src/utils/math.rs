//! Small numeric helpers used by the UI layer (stepper progress, input
//! caret positioning).

use thiserror::Error;

/// Returned when a clamp is asked for an inverted range.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("invalid range: min {min} > max {max}")]
pub struct InvalidRange {
    pub min: i64,
    pub max: i64,
}

/// Clamp `value` into `[min, max]`.
///
/// Errors if `min > max` instead of silently picking a boundary.
pub fn clamp(min: i64, max: i64, value: i64) -> Result<i64, InvalidRange> {
    if min > max {
        return Err(InvalidRange { min, max });
    }
    Ok(value.max(min).min(max))
}
