//! Shift interval model.
//!
//! This module defines the validated time interval that the salary engine
//! operates on. Endpoints are timezone-naive wall-clock instants; day-of-week
//! and hour-of-day are read directly from the wall-clock fields.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A validated shift time interval.
///
/// The only way to construct a `ShiftInterval` is through [`ShiftInterval::new`],
/// which enforces the `end > start` invariant. The calculation engine is
/// therefore never invoked on a reversed or empty interval.
///
/// # Example
///
/// ```
/// use salary_engine::models::ShiftInterval;
/// use chrono::NaiveDateTime;
///
/// let start = NaiveDateTime::parse_from_str("2025-02-11 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2025-02-11 16:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let interval = ShiftInterval::new(start, end).unwrap();
/// assert_eq!(interval.duration_minutes(), 480);
///
/// // Reversed intervals are rejected.
/// assert!(ShiftInterval::new(end, start).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawShiftInterval")]
pub struct ShiftInterval {
    /// The start of the shift.
    pub start: NaiveDateTime,
    /// The end of the shift (strictly after `start`).
    pub end: NaiveDateTime,
}

/// Unvalidated mirror of [`ShiftInterval`] used during deserialization, so
/// that deserialized intervals pass through the same `end > start` check as
/// constructed ones.
#[derive(Deserialize)]
struct RawShiftInterval {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TryFrom<RawShiftInterval> for ShiftInterval {
    type Error = EngineError;

    fn try_from(raw: RawShiftInterval) -> EngineResult<Self> {
        Self::new(raw.start, raw.end)
    }
}

impl ShiftInterval {
    /// Creates a new interval, rejecting `end <= start`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> EngineResult<Self> {
        if end <= start {
            return Err(EngineError::InvalidInterval {
                message: "end time must be after start time".to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Returns the shift duration in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Returns the shift duration in hours as a [`Decimal`].
    pub fn hours(&self) -> Decimal {
        let seconds = (self.end - self.start).num_seconds();
        Decimal::new(seconds, 0) / Decimal::new(3600, 0)
    }
}
