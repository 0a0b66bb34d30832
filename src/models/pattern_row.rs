//! The fixed-field record stored in the pay period pattern table.

/// One month of one pay period pattern.
///
/// Start and end are month/day pairs within a single calendar year. A row's range
/// may begin in the calendar month before its pay period month (e.g. a February
/// period starting January 31) or end in the month after it (e.g. a January
/// period ending February 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PatternRow {
    /// The pattern this row belongs to (1-14).
    pub pattern_number: u8,
    /// The pay period month (1-12).
    pub month: u8,
    /// The calendar month the pay period starts in.
    pub start_month: u8,
    /// The day of `start_month` the pay period starts on.
    pub start_day: u8,
    /// The calendar month the pay period ends in.
    pub end_month: u8,
    /// The day of `end_month` the pay period ends on.
    pub end_day: u8,
    /// The number of work days in the pay period.
    pub work_days: u8,
}

impl PatternRow {
    /// Creates a row from its seven table columns, in table order.
    pub const fn new(
        pattern_number: u8,
        month: u8,
        start_month: u8,
        start_day: u8,
        end_month: u8,
        end_day: u8,
        work_days: u8,
    ) -> Self {
        Self {
            pattern_number,
            month,
            start_month,
            start_day,
            end_month,
            end_day,
            work_days,
        }
    }
}
