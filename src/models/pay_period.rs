//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type returned by every pay period
//! lookup. Pay periods are built on demand from a pattern row and a year and
//! are never cached.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A monthly pay period with its date range and work-time totals.
///
/// The `month` field identifies the pay period month, which is not always the
/// calendar month of every date in the range.
///
/// # Example
///
/// ```
/// use pay_period_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let pay_period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(1995, 2, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(1995, 3, 1).unwrap(),
///     year: 1995,
///     month: 2,
///     work_days: 21,
///     work_hours: 168,
/// };
///
/// assert!(pay_period.contains_date(NaiveDate::from_ymd_opt(1995, 3, 1).unwrap()));
/// assert!(!pay_period.contains_date(NaiveDate::from_ymd_opt(1995, 1, 31).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
    /// The pay period year.
    pub year: i32,
    /// The pay period month (1-12).
    pub month: u32,
    /// The number of work days in the pay period.
    pub work_days: u32,
    /// The number of work hours in the pay period, assuming an eight-hour work day.
    pub work_hours: u32,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    ///
    /// # Example
    ///
    /// ```
    /// use pay_period_engine::models::PayPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let period = PayPeriod {
    ///     start_date: NaiveDate::from_ymd_opt(1994, 1, 1).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(1994, 1, 31).unwrap(),
    ///     year: 1994,
    ///     month: 1,
    ///     work_days: 21,
    ///     work_hours: 168,
    /// };
    ///
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(1994, 1, 1).unwrap())); // start date
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(1994, 1, 15).unwrap())); // middle
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(1994, 1, 31).unwrap())); // end date
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(1994, 2, 1).unwrap())); // after
    /// ```
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns the number of calendar days covered by the pay period.
    pub fn calendar_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}
