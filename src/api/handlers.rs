//! HTTP request handlers for the pay period API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{
        Path, Query,
        rejection::{PathRejection, QueryRejection},
    },
    routing::get,
};
use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{get_pay_period, get_pay_periods};
use crate::models::PayPeriod;

use super::request::PayPeriodsQuery;
use super::response::ApiErrorResponse;

/// Creates the API router with all endpoints.
///
/// - `GET /pay-periods/{year}` lists a year's pay periods; `?month=M` selects one.
/// - `GET /pay-period/{date}` finds the pay period containing a `YYYY-MM-DD` date.
pub fn create_router() -> Router {
    Router::new()
        .route("/pay-periods/:year", get(pay_periods_handler))
        .route("/pay-period/:date", get(pay_period_handler))
}

/// Handler for `GET /pay-periods/{year}`.
async fn pay_periods_handler(
    year: Result<Path<i32>, PathRejection>,
    query: Result<Query<PayPeriodsQuery>, QueryRejection>,
) -> Result<Json<Vec<PayPeriod>>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();

    let Path(year) = year.map_err(|rejection| {
        warn!(correlation_id = %correlation_id, error = %rejection, "Invalid year");
        ApiErrorResponse::bad_request(format!("Invalid year: {}", rejection.body_text()))
    })?;
    let Query(query) = query.map_err(|rejection| {
        warn!(correlation_id = %correlation_id, error = %rejection, "Invalid query string");
        ApiErrorResponse::bad_request(format!("Invalid query: {}", rejection.body_text()))
    })?;

    match get_pay_periods(year, query.month) {
        Ok(periods) => {
            info!(
                correlation_id = %correlation_id,
                year,
                month = ?query.month,
                count = periods.len(),
                "Listed pay periods"
            );
            Ok(Json(periods))
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Pay period listing failed");
            Err(err.into())
        }
    }
}

/// Handler for `GET /pay-period/{date}`.
async fn pay_period_handler(
    date: Result<Path<String>, PathRejection>,
) -> Result<Json<PayPeriod>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();

    let Path(raw_date) = date.map_err(|rejection| {
        warn!(correlation_id = %correlation_id, error = %rejection, "Invalid date path");
        ApiErrorResponse::bad_request(format!("Invalid date: {}", rejection.body_text()))
    })?;
    let date = NaiveDate::parse_from_str(&raw_date, "%Y-%m-%d").map_err(|err| {
        warn!(correlation_id = %correlation_id, date = %raw_date, error = %err, "Unparsable date");
        ApiErrorResponse::bad_request(format!("Invalid date '{}': expected YYYY-MM-DD", raw_date))
    })?;

    match get_pay_period(date) {
        Ok(period) => {
            info!(
                correlation_id = %correlation_id,
                %date,
                pay_period_year = period.year,
                pay_period_month = period.month,
                "Resolved pay period"
            );
            Ok(Json(period))
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, %date, error = %err, "Pay period lookup failed");
            Err(err.into())
        }
    }
}
