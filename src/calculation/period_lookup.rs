//! Date to pay period lookup.
//!
//! A pay period can straddle a calendar month boundary, so the calendar month
//! of a date does not always name its pay period. The lookup tries the row for
//! the date's calendar month first, then the previous row, then the next row.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use tracing::{debug, error};

use crate::error::{EngineError, EngineResult};
use crate::models::PayPeriod;

use super::patterns::resolve_year_patterns;
use super::pay_periods::build_pay_period;
use super::validation::validate_year;

/// Gets the pay period containing a calendar date.
///
/// # Errors
///
/// - [`EngineError::YearOutOfRange`] when the date's year is outside 1994..=2299
/// - [`EngineError::InvariantViolation`] if no candidate period contains the date,
///   which only happens with a corrupted pattern table
///
/// # Example
///
/// ```
/// use pay_period_engine::calculation::get_pay_period;
/// use chrono::NaiveDate;
///
/// // February 1995 runs through March 1, so March 1 belongs to February
/// let date = NaiveDate::from_ymd_opt(1995, 3, 1).unwrap();
/// let period = get_pay_period(date).unwrap();
///
/// assert_eq!(period.month, 2);
/// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(1995, 2, 1).unwrap());
/// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(1995, 3, 1).unwrap());
/// ```
pub fn get_pay_period(date: NaiveDate) -> EngineResult<PayPeriod> {
    let year = date.year();
    validate_year(year)?;

    let rows = resolve_year_patterns(year)?;
    let calendar_index = date.month0() as usize;

    for index in candidate_indices(calendar_index) {
        // December has no following row
        let Some(row) = rows.get(index) else {
            continue;
        };
        let period = build_pay_period(year, row)?;
        if period.contains_date(date) {
            debug!(
                %date,
                calendar_month = calendar_index + 1,
                pay_period_month = period.month,
                "Resolved pay period for date"
            );
            return Ok(period);
        }
    }

    error!(%date, "No candidate pay period contains date");
    Err(EngineError::InvariantViolation {
        message: format!("no pay period in {year} contains {date}"),
    })
}

/// Gets the pay period containing an instant.
///
/// The instant is converted to UTC and its time of day is dropped before the
/// lookup.
///
/// # Example
///
/// ```
/// use pay_period_engine::calculation::get_pay_period_for_datetime;
/// use chrono::{FixedOffset, TimeZone};
///
/// // 23:30 on January 31 in UTC-8 is already February 1 in UTC
/// let pacific = FixedOffset::west_opt(8 * 3600).unwrap();
/// let instant = pacific.with_ymd_and_hms(1994, 1, 31, 23, 30, 0).unwrap();
///
/// let period = get_pay_period_for_datetime(&instant).unwrap();
/// assert_eq!(period.month, 2);
/// ```
pub fn get_pay_period_for_datetime<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
) -> EngineResult<PayPeriod> {
    get_pay_period(datetime.with_timezone(&Utc).date_naive())
}

/// Row indices to try, in priority order: same month, previous, next.
fn candidate_indices(calendar_index: usize) -> impl Iterator<Item = usize> {
    [
        Some(calendar_index),
        calendar_index.checked_sub(1),
        Some(calendar_index + 1),
    ]
    .into_iter()
    .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{PATTERN_SEED_YEAR, YEAR_MAX, get_pay_periods};
    use chrono::FixedOffset;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_in_its_own_calendar_month() {
        let period = get_pay_period(date(1994, 1, 15)).unwrap();
        assert_eq!(period.month, 1);
        assert_eq!(period.year, 1994);
    }

    #[test]
    fn test_date_belonging_to_previous_month() {
        // 1995 uses pattern 1: February runs February 1 through March 1
        let period = get_pay_period(date(1995, 3, 1)).unwrap();
        assert_eq!(period.month, 2);
        assert_eq!(period.start_date, date(1995, 2, 1));
        assert_eq!(period.end_date, date(1995, 3, 1));
    }

    #[test]
    fn test_first_of_february_in_seed_year_is_february() {
        // 1994 uses pattern 7: February runs February 1 through March 1
        let period = get_pay_period(date(1994, 2, 1)).unwrap();
        assert_eq!(period.month, 2);
        assert_eq!(period.start_date, date(1994, 2, 1));
        assert_eq!(period.end_date, date(1994, 3, 1));
    }

    #[test]
    fn test_date_belonging_to_next_month() {
        // 2001 uses pattern 2: February starts January 31
        let period = get_pay_period(date(2001, 1, 31)).unwrap();
        assert_eq!(period.month, 2);
        assert_eq!(period.start_date, date(2001, 1, 31));
    }

    #[test]
    fn test_december_first_in_november_period() {
        // 1997 uses pattern 4: November runs October 31 through December 1
        let period = get_pay_period(date(1997, 12, 1)).unwrap();
        assert_eq!(period.month, 11);
        assert_eq!(period.end_date, date(1997, 12, 1));
    }

    #[test]
    fn test_last_day_of_year() {
        let period = get_pay_period(date(2299, 12, 31)).unwrap();
        assert_eq!(period.month, 12);
        assert_eq!(period.year, 2299);
    }

    #[test]
    fn test_first_day_of_seed_year() {
        let period = get_pay_period(date(1994, 1, 1)).unwrap();
        assert_eq!(period.month, 1);
    }

    #[test]
    fn test_out_of_range_dates() {
        assert!(matches!(
            get_pay_period(date(1993, 12, 31)),
            Err(EngineError::YearOutOfRange { year: 1993 })
        ));
        assert!(matches!(
            get_pay_period(date(2300, 1, 1)),
            Err(EngineError::YearOutOfRange { year: 2300 })
        ));
    }

    #[test]
    fn test_datetime_uses_utc_calendar_date() {
        let pacific = FixedOffset::west_opt(8 * 3600).unwrap();

        // Still January 31 in UTC
        let morning = pacific.with_ymd_and_hms(2001, 1, 31, 9, 0, 0).unwrap();
        assert_eq!(get_pay_period_for_datetime(&morning).unwrap().month, 2);

        // 1994-02-01 06:00 UTC
        let late = pacific.with_ymd_and_hms(1994, 1, 31, 22, 0, 0).unwrap();
        let period = get_pay_period_for_datetime(&late).unwrap();
        assert_eq!(period.month, 2);
        assert_eq!(period.start_date, date(1994, 2, 1));
    }

    #[test]
    fn test_datetime_crossing_into_unsupported_year() {
        let pacific = FixedOffset::west_opt(8 * 3600).unwrap();
        let instant = pacific.with_ymd_and_hms(2299, 12, 31, 20, 0, 0).unwrap();
        assert!(matches!(
            get_pay_period_for_datetime(&instant),
            Err(EngineError::YearOutOfRange { year: 2300 })
        ));
    }

    #[test]
    fn test_candidate_order() {
        assert_eq!(candidate_indices(0).collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(candidate_indices(5).collect::<Vec<_>>(), vec![5, 4, 6]);
        assert_eq!(candidate_indices(11).collect::<Vec<_>>(), vec![11, 10, 12]);
    }

    #[test]
    fn test_every_supported_day_has_exactly_one_pay_period() {
        let first = date(PATTERN_SEED_YEAR, 1, 1);
        let last = date(YEAR_MAX, 12, 31);
        let mut year_periods = get_pay_periods(PATTERN_SEED_YEAR, None).unwrap();

        for day in first.iter_days().take_while(|d| *d <= last) {
            if day.ordinal() == 1 {
                year_periods = get_pay_periods(day.year(), None).unwrap();
            }
            let period = get_pay_period(day).unwrap();
            assert!(period.contains_date(day), "{day} not in {period:?}");

            let containing = year_periods.iter().filter(|p| p.contains_date(day)).count();
            assert_eq!(containing, 1, "{day} is in {containing} periods");
        }
    }

    proptest! {
        #[test]
        fn test_resolved_period_matches_year_listing(ordinal in 0i64..111_000) {
            let day = date(PATTERN_SEED_YEAR, 1, 1) + chrono::Duration::days(ordinal);
            prop_assume!(day.year() <= YEAR_MAX);

            let period = get_pay_period(day).unwrap();
            let listed = get_pay_periods(day.year(), Some(period.month)).unwrap();
            prop_assert_eq!(&listed[0], &period);
            prop_assert!(period.contains_date(day));
        }
    }
}
