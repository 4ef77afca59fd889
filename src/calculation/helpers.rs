//! Small pure helpers shared by the calculator and the calendar import.

use chrono::{Duration, NaiveDateTime};

use crate::models::ShiftInterval;

/// Derives a shift end time from a start time and a duration in whole hours.
///
/// Returns `None` when the addition would overflow the representable
/// date range.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::derive_end_time;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 2, 11)
///     .unwrap()
///     .and_hms_opt(22, 0, 0)
///     .unwrap();
/// let end = derive_end_time(start, 8).unwrap();
/// assert_eq!(end.to_string(), "2025-02-12 06:00:00");
/// ```
pub fn derive_end_time(start: NaiveDateTime, duration_hours: u32) -> Option<NaiveDateTime> {
    start.checked_add_signed(Duration::hours(i64::from(duration_hours)))
}

/// Decides whether the unpaid lunch break applies to a shift.
///
/// The break applies when the shift is at least as long as the break itself,
/// measured in minutes. Callers that let the user override the decision pass
/// the override instead of calling this.
pub fn should_apply_break(interval: &ShiftInterval, threshold_minutes: u32) -> bool {
    interval.duration_minutes() >= i64::from(threshold_minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    #[test]
    fn test_derive_end_time_same_day() {
        let start = make_datetime("2025-02-11", "08:00:00");
        assert_eq!(
            derive_end_time(start, 8),
            Some(make_datetime("2025-02-11", "16:00:00")),
        );
    }

    #[test]
    fn test_derive_end_time_crosses_midnight() {
        let start = make_datetime("2025-02-11", "22:00:00");
        assert_eq!(
            derive_end_time(start, 8),
            Some(make_datetime("2025-02-12", "06:00:00")),
        );
    }

    #[test]
    fn test_derive_end_time_overflow_is_none() {
        let start = NaiveDateTime::MAX;
        assert_eq!(derive_end_time(start, 1), None);
    }

    #[test]
    fn test_break_applies_at_threshold() {
        let interval = ShiftInterval::new(
            make_datetime("2025-02-11", "08:00:00"),
            make_datetime("2025-02-11", "08:30:00"),
        )
        .unwrap();
        assert!(should_apply_break(&interval, 30));
    }

    #[test]
    fn test_break_skipped_below_threshold() {
        let interval = ShiftInterval::new(
            make_datetime("2025-02-11", "08:00:00"),
            make_datetime("2025-02-11", "08:29:00"),
        )
        .unwrap();
        assert!(!should_apply_break(&interval, 30));
    }

    #[test]
    fn test_break_applies_to_full_shift() {
        let interval = ShiftInterval::new(
            make_datetime("2025-02-11", "08:00:00"),
            make_datetime("2025-02-11", "16:00:00"),
        )
        .unwrap();
        assert!(should_apply_break(&interval, 30));
    }
}
