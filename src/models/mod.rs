//! Core data models for the pay period engine.

mod pattern_row;
mod pay_period;

pub use pattern_row::PatternRow;
pub use pay_period::PayPeriod;
