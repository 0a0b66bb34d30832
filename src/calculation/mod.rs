//! Pay period calculation logic.
//!
//! This module contains the pattern tables and the lookups built on them:
//! resolving the pattern for a year, validating inputs, listing the pay periods
//! of a year or month, and finding the pay period that contains a date.

mod patterns;
mod pay_periods;
mod period_lookup;
mod validation;

pub use patterns::{
    MONTHS_PER_PATTERN, PATTERN_NUMBER_MAX, PATTERN_NUMBER_MIN, PATTERN_SEED_YEAR,
    PATTERN_SEQUENCE, PATTERN_SEQUENCE_LEN, PATTERNS, YEAR_MAX, resolve_pattern_number,
    resolve_year_patterns,
};
pub use pay_periods::{HOURS_PER_WORK_DAY, build_pay_period, get_pay_periods};
pub use period_lookup::{get_pay_period, get_pay_period_for_datetime};
pub use validation::{MONTH_MAX, MONTH_MIN, validate_month, validate_year};
