//! Request types for the Shift Salary Engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! and `/import` endpoints.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Request body for the `/calculate` endpoint.
///
/// Only the start time is required. A missing end time is derived from the
/// configured default shift length; a missing `include_break` is decided
/// automatically from the shift duration; a missing `age` skips the pension
/// deduction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The start of the shift.
    pub start_time: NaiveDateTime,
    /// The end of the shift. Defaults to the start plus the configured
    /// default shift length.
    #[serde(default)]
    pub end_time: Option<NaiveDateTime>,
    /// Whether to deduct the unpaid break. Defaults to deducting it
    /// whenever the shift is at least as long as the break.
    #[serde(default)]
    pub include_break: Option<bool>,
    /// The employee's age, used for the pension band lookup.
    #[serde(default)]
    pub age: Option<u32>,
}

/// Request body for the `/import` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRequest {
    /// The raw ICS calendar feed content.
    pub calendar_data: String,
    /// The employee's age, applied to every imported shift.
    #[serde(default)]
    pub age: Option<u32>,
}
