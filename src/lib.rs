//! California State Government monthly pay period engine.
//!
//! This crate maps calendar years, months, and dates onto the monthly pay periods
//! published in the State Administrative Manual section 8500, for every year from
//! 1994 through 2299.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
