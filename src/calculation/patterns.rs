//! Pay period pattern sequence and pattern table.
//!
//! Both tables come from the State Administrative Manual section 8500. The
//! sequence repeats every 28 years starting in 1994 and selects one of 14
//! patterns; each pattern lists the pay period ranges for months 1 through 12.

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::PatternRow;

use super::validation::validate_year;

/// The first year covered by the pattern sequence.
pub const PATTERN_SEED_YEAR: i32 = 1994;

/// The last year supported.
pub const YEAR_MAX: i32 = 2299;

/// The first pattern number.
pub const PATTERN_NUMBER_MIN: u8 = 1;

/// The last pattern number.
pub const PATTERN_NUMBER_MAX: u8 = 14;

/// The number of years after which the pattern sequence repeats.
pub const PATTERN_SEQUENCE_LEN: usize = 28;

/// The number of rows (pay period months) in each pattern.
pub const MONTHS_PER_PATTERN: usize = 12;

/// Pattern number for each year, indexed by `(year - 1994) % 28`.
pub const PATTERN_SEQUENCE: [u8; PATTERN_SEQUENCE_LEN] = [
    7, 1, 9, 4, 5, 6, 14, 2, 3, 4, 12, 7, 1, 2, 10, 5, 6, 7, 8, 3, 4, 5, 13, 1, 2, 3, 11, 6,
];

/// All 14 patterns, twelve rows each, stored in pattern then month order.
///
/// Pattern `p` occupies positions `(p - 1) * 12 .. (p - 1) * 12 + 12`.
pub static PATTERNS: [PatternRow; PATTERN_NUMBER_MAX as usize * MONTHS_PER_PATTERN] = [
    PatternRow::new(1, 1, 1, 1, 1, 31, 22),
    PatternRow::new(1, 2, 2, 1, 3, 1, 21),
    PatternRow::new(1, 3, 3, 2, 3, 31, 22),
    PatternRow::new(1, 4, 4, 1, 5, 1, 21),
    PatternRow::new(1, 5, 5, 2, 5, 31, 22),
    PatternRow::new(1, 6, 6, 1, 6, 30, 22),
    PatternRow::new(1, 7, 7, 1, 8, 1, 22),
    PatternRow::new(1, 8, 8, 2, 8, 31, 22),
    PatternRow::new(1, 9, 9, 1, 9, 30, 21),
    PatternRow::new(1, 10, 10, 1, 10, 31, 22),
    PatternRow::new(1, 11, 11, 1, 11, 30, 22),
    PatternRow::new(1, 12, 12, 1, 12, 31, 21),
    PatternRow::new(2, 1, 1, 1, 1, 30, 22),
    PatternRow::new(2, 2, 1, 31, 2, 28, 21),
    PatternRow::new(2, 3, 3, 1, 3, 31, 22),
    PatternRow::new(2, 4, 4, 1, 4, 30, 21),
    PatternRow::new(2, 5, 5, 1, 5, 30, 22),
    PatternRow::new(2, 6, 5, 31, 6, 30, 22),
    PatternRow::new(2, 7, 7, 1, 7, 31, 22),
    PatternRow::new(2, 8, 8, 1, 8, 30, 22),
    PatternRow::new(2, 9, 8, 31, 9, 30, 21),
    PatternRow::new(2, 10, 10, 1, 10, 30, 22),
    PatternRow::new(2, 11, 10, 31, 11, 29, 22),
    PatternRow::new(2, 12, 11, 30, 12, 31, 22),
    PatternRow::new(3, 1, 1, 1, 1, 30, 22),
    PatternRow::new(3, 2, 1, 31, 2, 28, 21),
    PatternRow::new(3, 3, 3, 1, 3, 31, 21),
    PatternRow::new(3, 4, 4, 1, 4, 30, 22),
    PatternRow::new(3, 5, 5, 1, 5, 30, 22),
    PatternRow::new(3, 6, 5, 31, 6, 30, 21),
    PatternRow::new(3, 7, 7, 1, 7, 30, 22),
    PatternRow::new(3, 8, 7, 31, 8, 29, 22),
    PatternRow::new(3, 9, 8, 30, 9, 30, 22),
    PatternRow::new(3, 10, 10, 1, 10, 30, 22),
    PatternRow::new(3, 11, 10, 31, 11, 30, 22),
    PatternRow::new(3, 12, 12, 1, 12, 31, 22),
    PatternRow::new(4, 1, 1, 1, 1, 30, 22),
    PatternRow::new(4, 2, 1, 31, 2, 28, 21),
    PatternRow::new(4, 3, 3, 1, 3, 31, 21),
    PatternRow::new(4, 4, 4, 1, 4, 30, 22),
    PatternRow::new(4, 5, 5, 1, 5, 31, 22),
    PatternRow::new(4, 6, 6, 1, 6, 30, 21),
    PatternRow::new(4, 7, 7, 1, 7, 30, 22),
    PatternRow::new(4, 8, 7, 31, 8, 31, 22),
    PatternRow::new(4, 9, 9, 1, 9, 30, 22),
    PatternRow::new(4, 10, 10, 1, 10, 30, 22),
    PatternRow::new(4, 11, 10, 31, 12, 1, 22),
    PatternRow::new(4, 12, 12, 2, 12, 31, 22),
    PatternRow::new(5, 1, 1, 1, 1, 29, 21),
    PatternRow::new(5, 2, 1, 30, 2, 28, 21),
    PatternRow::new(5, 3, 3, 1, 3, 31, 22),
    PatternRow::new(5, 4, 4, 1, 4, 30, 22),
    PatternRow::new(5, 5, 5, 1, 5, 31, 21),
    PatternRow::new(5, 6, 6, 1, 6, 30, 22),
    PatternRow::new(5, 7, 7, 1, 7, 30, 22),
    PatternRow::new(5, 8, 7, 31, 8, 31, 22),
    PatternRow::new(5, 9, 9, 1, 9, 30, 22),
    PatternRow::new(5, 10, 10, 1, 10, 31, 22),
    PatternRow::new(5, 11, 11, 1, 12, 1, 22),
    PatternRow::new(5, 12, 12, 2, 12, 31, 22),
    PatternRow::new(6, 1, 1, 1, 1, 31, 21),
    PatternRow::new(6, 2, 2, 1, 3, 1, 21),
    PatternRow::new(6, 3, 3, 2, 3, 31, 22),
    PatternRow::new(6, 4, 4, 1, 4, 30, 22),
    PatternRow::new(6, 5, 5, 1, 5, 31, 21),
    PatternRow::new(6, 6, 6, 1, 6, 30, 22),
    PatternRow::new(6, 7, 7, 1, 7, 31, 22),
    PatternRow::new(6, 8, 8, 1, 8, 31, 22),
    PatternRow::new(6, 9, 9, 1, 9, 30, 22),
    PatternRow::new(6, 10, 10, 1, 11, 1, 22),
    PatternRow::new(6, 11, 11, 2, 12, 1, 22),
    PatternRow::new(6, 12, 12, 2, 12, 31, 22),
    PatternRow::new(7, 1, 1, 1, 1, 31, 21),
    PatternRow::new(7, 2, 2, 1, 3, 1, 21),
    PatternRow::new(7, 3, 3, 2, 3, 31, 22),
    PatternRow::new(7, 4, 4, 1, 4, 30, 21),
    PatternRow::new(7, 5, 5, 1, 5, 31, 22),
    PatternRow::new(7, 6, 6, 1, 6, 30, 22),
    PatternRow::new(7, 7, 7, 1, 8, 1, 22),
    PatternRow::new(7, 8, 8, 2, 8, 31, 22),
    PatternRow::new(7, 9, 9, 1, 9, 30, 22),
    PatternRow::new(7, 10, 10, 1, 10, 31, 21),
    PatternRow::new(7, 11, 11, 1, 11, 30, 22),
    PatternRow::new(7, 12, 12, 1, 12, 31, 22),
    PatternRow::new(8, 1, 1, 1, 1, 31, 22),
    PatternRow::new(8, 2, 2, 1, 2, 29, 21),
    PatternRow::new(8, 3, 3, 1, 3, 31, 22),
    PatternRow::new(8, 4, 4, 1, 4, 30, 21),
    PatternRow::new(8, 5, 5, 1, 5, 30, 22),
    PatternRow::new(8, 6, 5, 31, 6, 30, 22),
    PatternRow::new(8, 7, 7, 1, 7, 31, 22),
    PatternRow::new(8, 8, 8, 1, 8, 30, 22),
    PatternRow::new(8, 9, 8, 31, 9, 30, 21),
    PatternRow::new(8, 10, 10, 1, 10, 30, 22),
    PatternRow::new(8, 11, 10, 31, 11, 29, 22),
    PatternRow::new(8, 12, 11, 30, 12, 31, 22),
    PatternRow::new(9, 1, 1, 1, 1, 30, 22),
    PatternRow::new(9, 2, 1, 31, 2, 29, 22),
    PatternRow::new(9, 3, 3, 1, 3, 31, 21),
    PatternRow::new(9, 4, 4, 1, 4, 30, 22),
    PatternRow::new(9, 5, 5, 1, 5, 30, 22),
    PatternRow::new(9, 6, 5, 31, 6, 30, 21),
    PatternRow::new(9, 7, 7, 1, 7, 30, 22),
    PatternRow::new(9, 8, 7, 31, 8, 29, 22),
    PatternRow::new(9, 9, 8, 30, 9, 30, 22),
    PatternRow::new(9, 10, 10, 1, 10, 30, 22),
    PatternRow::new(9, 11, 10, 31, 11, 30, 22),
    PatternRow::new(9, 12, 12, 1, 12, 31, 22),
    PatternRow::new(10, 1, 1, 1, 1, 30, 22),
    PatternRow::new(10, 2, 1, 31, 2, 29, 22),
    PatternRow::new(10, 3, 3, 1, 3, 31, 21),
    PatternRow::new(10, 4, 4, 1, 4, 30, 22),
    PatternRow::new(10, 5, 5, 1, 5, 31, 22),
    PatternRow::new(10, 6, 6, 1, 6, 30, 21),
    PatternRow::new(10, 7, 7, 1, 7, 30, 22),
    PatternRow::new(10, 8, 7, 31, 8, 31, 22),
    PatternRow::new(10, 9, 9, 1, 9, 30, 22),
    PatternRow::new(10, 10, 10, 1, 10, 30, 22),
    PatternRow::new(10, 11, 10, 31, 12, 1, 22),
    PatternRow::new(10, 12, 12, 2, 12, 31, 22),
    PatternRow::new(11, 1, 1, 1, 1, 30, 22),
    PatternRow::new(11, 2, 1, 31, 2, 29, 21),
    PatternRow::new(11, 3, 3, 1, 3, 31, 22),
    PatternRow::new(11, 4, 4, 1, 4, 30, 22),
    PatternRow::new(11, 5, 5, 1, 5, 31, 21),
    PatternRow::new(11, 6, 6, 1, 6, 30, 22),
    PatternRow::new(11, 7, 7, 1, 7, 30, 22),
    PatternRow::new(11, 8, 7, 31, 8, 31, 22),
    PatternRow::new(11, 9, 9, 1, 9, 30, 22),
    PatternRow::new(11, 10, 10, 1, 10, 31, 22),
    PatternRow::new(11, 11, 11, 1, 12, 1, 22),
    PatternRow::new(11, 12, 12, 2, 12, 31, 22),
    PatternRow::new(12, 1, 1, 1, 1, 31, 22),
    PatternRow::new(12, 2, 2, 1, 3, 1, 21),
    PatternRow::new(12, 3, 3, 2, 3, 31, 22),
    PatternRow::new(12, 4, 4, 1, 4, 30, 22),
    PatternRow::new(12, 5, 5, 1, 5, 31, 21),
    PatternRow::new(12, 6, 6, 1, 6, 30, 22),
    PatternRow::new(12, 7, 7, 1, 7, 31, 22),
    PatternRow::new(12, 8, 8, 1, 8, 31, 22),
    PatternRow::new(12, 9, 9, 1, 9, 30, 22),
    PatternRow::new(12, 10, 10, 1, 11, 1, 22),
    PatternRow::new(12, 11, 11, 2, 12, 1, 22),
    PatternRow::new(12, 12, 12, 2, 12, 31, 22),
    PatternRow::new(13, 1, 1, 1, 1, 31, 21),
    PatternRow::new(13, 2, 2, 1, 3, 1, 22),
    PatternRow::new(13, 3, 3, 2, 3, 31, 22),
    PatternRow::new(13, 4, 4, 1, 4, 30, 21),
    PatternRow::new(13, 5, 5, 1, 5, 31, 22),
    PatternRow::new(13, 6, 6, 1, 6, 30, 22),
    PatternRow::new(13, 7, 7, 1, 8, 1, 22),
    PatternRow::new(13, 8, 8, 2, 8, 31, 22),
    PatternRow::new(13, 9, 9, 1, 9, 30, 22),
    PatternRow::new(13, 10, 10, 1, 10, 31, 21),
    PatternRow::new(13, 11, 11, 1, 11, 30, 22),
    PatternRow::new(13, 12, 12, 1, 12, 31, 22),
    PatternRow::new(14, 1, 1, 1, 1, 31, 21),
    PatternRow::new(14, 2, 2, 1, 3, 1, 22),
    PatternRow::new(14, 3, 3, 2, 3, 31, 22),
    PatternRow::new(14, 4, 4, 1, 5, 1, 21),
    PatternRow::new(14, 5, 5, 2, 5, 31, 22),
    PatternRow::new(14, 6, 6, 1, 6, 30, 22),
    PatternRow::new(14, 7, 7, 1, 7, 31, 21),
    PatternRow::new(14, 8, 8, 1, 8, 30, 22),
    PatternRow::new(14, 9, 8, 31, 9, 30, 22),
    PatternRow::new(14, 10, 10, 1, 10, 31, 22),
    PatternRow::new(14, 11, 11, 1, 11, 30, 22),
    PatternRow::new(14, 12, 12, 1, 12, 31, 21),
];

/// Resolves the pattern number that applies to a year.
///
/// # Errors
///
/// Returns [`EngineError::YearOutOfRange`] when `year` is outside 1994..=2299.
///
/// # Example
///
/// ```
/// use pay_period_engine::calculation::resolve_pattern_number;
///
/// assert_eq!(resolve_pattern_number(1994).unwrap(), 7);
/// assert_eq!(resolve_pattern_number(2022).unwrap(), 7);
/// ```
pub fn resolve_pattern_number(year: i32) -> EngineResult<u8> {
    validate_year(year)?;
    let index = (year - PATTERN_SEED_YEAR) as usize % PATTERN_SEQUENCE_LEN;
    let pattern_number = PATTERN_SEQUENCE[index];
    debug!(year, pattern_number, "Resolved pay period pattern");
    Ok(pattern_number)
}

/// Returns the twelve pattern rows for a year, in month order.
///
/// The rows are a view into the static table.
///
/// # Errors
///
/// Returns [`EngineError::YearOutOfRange`] when `year` is outside 1994..=2299, or
/// [`EngineError::InvariantViolation`] if the sequence names a pattern the table lacks.
pub fn resolve_year_patterns(year: i32) -> EngineResult<&'static [PatternRow]> {
    let pattern_number = resolve_pattern_number(year)?;
    let offset = (usize::from(pattern_number) - 1) * MONTHS_PER_PATTERN;
    PATTERNS
        .get(offset..offset + MONTHS_PER_PATTERN)
        .ok_or_else(|| EngineError::InvariantViolation {
            message: format!("pattern {pattern_number} for year {year} is not in the pattern table"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_seed_year_uses_first_sequence_entry() {
        assert_eq!(resolve_pattern_number(1994).unwrap(), 7);
        assert_eq!(resolve_pattern_number(1995).unwrap(), 1);
        assert_eq!(resolve_pattern_number(2021).unwrap(), 6);
    }

    #[test]
    fn test_last_supported_year() {
        // (2299 - 1994) % 28 = 25
        assert_eq!(resolve_pattern_number(2299).unwrap(), 3);
    }

    #[test]
    fn test_resolve_pattern_number_rejects_out_of_range_years() {
        assert!(matches!(
            resolve_pattern_number(1993),
            Err(EngineError::YearOutOfRange { year: 1993 })
        ));
        assert!(matches!(
            resolve_pattern_number(2300),
            Err(EngineError::YearOutOfRange { year: 2300 })
        ));
    }

    #[test]
    fn test_sequence_values_are_pattern_numbers() {
        assert!(
            PATTERN_SEQUENCE
                .iter()
                .all(|p| (PATTERN_NUMBER_MIN..=PATTERN_NUMBER_MAX).contains(p))
        );
    }

    #[test]
    fn test_every_pattern_appears_in_sequence() {
        for pattern in PATTERN_NUMBER_MIN..=PATTERN_NUMBER_MAX {
            assert!(PATTERN_SEQUENCE.contains(&pattern), "pattern {pattern} unused");
        }
    }

    #[test]
    fn test_table_rows_are_grouped_by_pattern_in_month_order() {
        for (position, row) in PATTERNS.iter().enumerate() {
            assert_eq!(
                usize::from(row.pattern_number),
                position / MONTHS_PER_PATTERN + 1
            );
            assert_eq!(usize::from(row.month), position % MONTHS_PER_PATTERN + 1);
        }
    }

    #[test]
    fn test_table_work_days_are_plausible() {
        assert!(PATTERNS.iter().all(|row| (20..=23).contains(&row.work_days)));
    }

    #[test]
    fn test_table_ranges_stay_within_adjacent_months() {
        for row in PATTERNS.iter() {
            assert!(row.start_month <= row.month && row.month - row.start_month <= 1);
            assert!(row.end_month >= row.month && row.end_month - row.month <= 1);
        }
    }

    #[test]
    fn test_resolve_year_patterns_returns_pattern_slice() {
        let rows = resolve_year_patterns(1994).unwrap();
        assert_eq!(rows.len(), 12);
        assert!(rows.iter().all(|row| row.pattern_number == 7));
        assert_eq!(rows[0], PatternRow::new(7, 1, 1, 1, 1, 31, 21));
        assert_eq!(rows[1], PatternRow::new(7, 2, 2, 1, 3, 1, 21));
    }

    #[test]
    fn test_resolve_year_patterns_rejects_out_of_range_years() {
        assert!(resolve_year_patterns(1900).is_err());
    }

    proptest! {
        #[test]
        fn test_pattern_number_repeats_every_28_years(year in PATTERN_SEED_YEAR..=YEAR_MAX - 28) {
            prop_assert_eq!(
                resolve_pattern_number(year).unwrap(),
                resolve_pattern_number(year + 28).unwrap()
            );
        }

        #[test]
        fn test_year_patterns_match_resolved_pattern(year in PATTERN_SEED_YEAR..=YEAR_MAX) {
            let pattern_number = resolve_pattern_number(year).unwrap();
            let rows = resolve_year_patterns(year).unwrap();
            prop_assert!(rows.iter().all(|row| row.pattern_number == pattern_number));
        }
    }
}
