//! HTTP request handlers for the Shift Salary Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_shift_salary, derive_end_time, should_apply_break};
use crate::calendar::{calculate_weekly_report, parse_calendar};
use crate::models::ShiftInterval;

use super::request::{CalculationRequest, ImportRequest};
use super::response::{ApiError, ApiErrorResponse, CalculationResponse, ImportResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/import", post(import_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a shift description and returns the itemized salary breakdown.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let config = state.config().config();
    let salary = config.salary();

    // A missing end time means a default-length shift.
    let end_time = match request.end_time {
        Some(end) => end,
        None => match derive_end_time(request.start_time, salary.default_shift_hours) {
            Some(end) => end,
            None => {
                warn!(correlation_id = %correlation_id, "End time derivation overflowed");
                return error_response(
                    StatusCode::BAD_REQUEST,
                    ApiError::validation_error("Cannot derive an end time for this start time"),
                );
            }
        },
    };

    let interval = match ShiftInterval::new(request.start_time, end_time) {
        Ok(interval) => interval,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid interval");
            let api_error: ApiErrorResponse = err.into();
            return error_response(api_error.status, api_error.error);
        }
    };

    let include_break = request
        .include_break
        .unwrap_or_else(|| should_apply_break(&interval, salary.break_minutes));

    let start_time = Instant::now();
    let breakdown = calculate_shift_salary(&interval, config, include_break, request.age);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        total_hours = %breakdown.total_hours,
        gross_salary = %breakdown.gross_salary,
        duration_us = duration.as_micros(),
        "Calculation completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(CalculationResponse {
            calculation_id: correlation_id,
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            breakdown,
        }),
    )
        .into_response()
}

/// Handler for POST /import endpoint.
///
/// Parses an ICS calendar feed, calculates a salary for every shift event
/// and returns the per-week aggregated report.
async fn import_handler(
    State(state): State<AppState>,
    payload: Result<Json<ImportRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calendar import");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let shifts = parse_calendar(&request.calendar_data);
    if shifts.is_empty() {
        warn!(correlation_id = %correlation_id, "No usable events in feed");
        return error_response(StatusCode::BAD_REQUEST, ApiError::no_shifts_found());
    }

    let config = state.config().config();
    let start_time = Instant::now();
    let report = calculate_weekly_report(&shifts, config, request.age);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        shift_count = shifts.len(),
        week_count = report.weeks.len(),
        gross_salary = %report.grand_total.gross_salary,
        duration_us = duration.as_micros(),
        "Import completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(ImportResponse {
            calculation_id: correlation_id,
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            shift_count: shifts.len(),
            report,
        }),
    )
        .into_response()
}

/// Turns a JSON extraction failure into a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    error_response(StatusCode::BAD_REQUEST, error)
}

fn error_response(status: StatusCode, error: ApiError) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
