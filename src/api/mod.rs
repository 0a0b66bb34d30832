//! HTTP API module for the pay period engine.
//!
//! This module exposes the pay period listing and date lookup over a small
//! read-only JSON API.

mod handlers;
mod request;
mod response;

pub use handlers::create_router;
pub use request::PayPeriodsQuery;
pub use response::{ApiError, ApiErrorResponse};
