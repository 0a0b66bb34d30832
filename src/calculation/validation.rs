//! Input validation for pay period lookups.
//!
//! These are the only preconditions in the engine; every public operation that
//! takes a year or a month checks it before touching the pattern tables.

use crate::error::{EngineError, EngineResult};

use super::patterns::{PATTERN_SEED_YEAR, YEAR_MAX};

/// The first month number.
pub const MONTH_MIN: u32 = 1;

/// The last month number.
pub const MONTH_MAX: u32 = 12;

/// Validates a pay period year.
///
/// # Errors
///
/// Returns [`EngineError::YearOutOfRange`] when `year` is outside 1994..=2299.
pub fn validate_year(year: i32) -> EngineResult<()> {
    if !(PATTERN_SEED_YEAR..=YEAR_MAX).contains(&year) {
        return Err(EngineError::YearOutOfRange { year });
    }
    Ok(())
}

/// Validates a pay period month.
///
/// # Errors
///
/// Returns [`EngineError::MonthOutOfRange`] when `month` is outside 1..=12.
pub fn validate_month(month: u32) -> EngineResult<()> {
    if !(MONTH_MIN..=MONTH_MAX).contains(&month) {
        return Err(EngineError::MonthOutOfRange { month });
    }
    Ok(())
}
