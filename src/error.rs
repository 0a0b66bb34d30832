//! Error types for the pay period engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while resolving pay periods.

use thiserror::Error;

use crate::calculation::{MONTH_MAX, MONTH_MIN, PATTERN_SEED_YEAR, YEAR_MAX};

/// The main error type for the pay period engine.
///
/// # Example
///
/// ```
/// use pay_period_engine::error::EngineError;
///
/// let error = EngineError::YearOutOfRange { year: 1993 };
/// assert_eq!(error.to_string(), "The year must be between 1994 and 2299, got 1993");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The requested year is outside the supported pattern range.
    #[error("The year must be between {min} and {max}, got {year}", min = PATTERN_SEED_YEAR, max = YEAR_MAX)]
    YearOutOfRange {
        /// The rejected year.
        year: i32,
    },

    /// The requested month is not a calendar month number.
    #[error("The month must be between {min} and {max}, got {month}", min = MONTH_MIN, max = MONTH_MAX)]
    MonthOutOfRange {
        /// The rejected month.
        month: u32,
    },

    /// The static pattern tables produced an impossible result.
    ///
    /// This never happens with a correctly populated table and indicates a data defect.
    #[error("Pay period invariant violated: {message}")]
    InvariantViolation {
        /// A description of what was inconsistent.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Returns `true` for the caller-recoverable year and month range errors.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            EngineError::YearOutOfRange { .. } | EngineError::MonthOutOfRange { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
