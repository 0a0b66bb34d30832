//! Pay period construction and year/month listing.
//!
//! This module turns pattern rows into [`PayPeriod`]s for a given year.

use chrono::NaiveDate;
use tracing::error;

use crate::error::{EngineError, EngineResult};
use crate::models::{PatternRow, PayPeriod};

use super::patterns::resolve_year_patterns;
use super::validation::{validate_month, validate_year};

/// Work hours credited for each work day.
pub const HOURS_PER_WORK_DAY: u32 = 8;

/// Builds the pay period described by a pattern row for a year.
///
/// Both the start and end dates use `year`; rows never cross a year boundary.
///
/// # Errors
///
/// Returns [`EngineError::InvariantViolation`] if the row names a day that does
/// not exist in `year` (such as February 29 in a common year).
///
/// # Example
///
/// ```
/// use pay_period_engine::calculation::build_pay_period;
/// use pay_period_engine::models::PatternRow;
/// use chrono::NaiveDate;
///
/// let row = PatternRow::new(7, 2, 2, 1, 3, 1, 21);
/// let period = build_pay_period(1994, &row).unwrap();
///
/// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(1994, 2, 1).unwrap());
/// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(1994, 3, 1).unwrap());
/// assert_eq!(period.month, 2);
/// assert_eq!(period.work_hours, 168);
/// ```
pub fn build_pay_period(year: i32, row: &PatternRow) -> EngineResult<PayPeriod> {
    let start_date = row_date(year, row, row.start_month, row.start_day)?;
    let end_date = row_date(year, row, row.end_month, row.end_day)?;
    let work_days = u32::from(row.work_days);

    Ok(PayPeriod {
        start_date,
        end_date,
        year,
        month: u32::from(row.month),
        work_days,
        work_hours: work_days * HOURS_PER_WORK_DAY,
    })
}

fn row_date(year: i32, row: &PatternRow, month: u8, day: u8) -> EngineResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day)).ok_or_else(|| {
        error!(
            year,
            pattern_number = row.pattern_number,
            pay_period_month = row.month,
            month,
            day,
            "Pattern row names a nonexistent date"
        );
        EngineError::InvariantViolation {
            message: format!(
                "pattern {} month {} names {year}-{month:02}-{day:02}, which is not a calendar date",
                row.pattern_number, row.month
            ),
        }
    })
}

/// Gets the pay periods for a year, optionally restricted to a single month.
///
/// # Arguments
///
/// * `year` - The calendar year (1994..=2299)
/// * `month` - `Some(1..=12)` for a single pay period month, `None` for all twelve
///
/// # Returns
///
/// The pay periods in month order: twelve of them, or one when `month` is given.
///
/// # Errors
///
/// - [`EngineError::YearOutOfRange`] for an unsupported year
/// - [`EngineError::MonthOutOfRange`] for `Some(month)` outside 1..=12, including `Some(0)`
///
/// # Example
///
/// ```
/// use pay_period_engine::calculation::get_pay_periods;
/// use chrono::NaiveDate;
///
/// let periods = get_pay_periods(1994, Some(1)).unwrap();
/// assert_eq!(periods.len(), 1);
/// assert_eq!(periods[0].start_date, NaiveDate::from_ymd_opt(1994, 1, 1).unwrap());
/// assert_eq!(periods[0].end_date, NaiveDate::from_ymd_opt(1994, 1, 31).unwrap());
///
/// assert_eq!(get_pay_periods(2020, None).unwrap().len(), 12);
/// assert!(get_pay_periods(2300, None).is_err());
/// ```
pub fn get_pay_periods(year: i32, month: Option<u32>) -> EngineResult<Vec<PayPeriod>> {
    validate_year(year)?;
    if let Some(month) = month {
        validate_month(month)?;
    }

    let rows = resolve_year_patterns(year)?;
    let rows = match month {
        Some(month) => {
            let index = (month - 1) as usize;
            &rows[index..=index]
        }
        None => rows,
    };

    rows.iter().map(|row| build_pay_period(year, row)).collect()
}
