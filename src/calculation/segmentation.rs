//! Hour-aligned segmentation of shift intervals.
//!
//! Bonus windows are defined per clock hour, so a shift is cut into
//! segments that never cross an hour boundary. Each segment is then
//! evaluated against the bonus rules independently.

use chrono::{Duration, NaiveDateTime, Timelike};
use rust_decimal::Decimal;

use crate::models::ShiftInterval;

/// Splits a shift interval at every clock-hour boundary it crosses.
///
/// The first segment runs from the shift start to the top of the next clock
/// hour (or to the shift end, whichever comes first). Subsequent segments are
/// full hours, except the last, which is clipped to the shift end. Boundaries
/// between adjacent segments always land on exact clock hours, so every
/// segment's starting hour identifies the bucket its bonuses are read from.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::segment_by_hour;
/// use salary_engine::models::ShiftInterval;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 2, 11)
///     .unwrap()
///     .and_hms_opt(21, 30, 0)
///     .unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 2, 11)
///     .unwrap()
///     .and_hms_opt(23, 15, 0)
///     .unwrap();
/// let shift = ShiftInterval::new(start, end).unwrap();
///
/// let segments = segment_by_hour(&shift);
/// assert_eq!(segments.len(), 3); // 21:30-22:00, 22:00-23:00, 23:00-23:15
/// ```
pub fn segment_by_hour(interval: &ShiftInterval) -> Vec<(NaiveDateTime, NaiveDateTime)> {
    let mut segments = Vec::new();
    let mut current = interval.start;

    while current < interval.end {
        let top_of_hour = current
            .date()
            .and_hms_opt(current.hour(), 0, 0)
            .expect("Valid hour boundary time")
            + Duration::hours(1);
        let segment_end = top_of_hour.min(interval.end);
        segments.push((current, segment_end));
        current = segment_end;
    }

    segments
}

/// Returns the length of a time span as a decimal number of hours.
///
/// Exact for any span whose second count divides an hour evenly; spans like
/// 20 minutes produce a repeating fraction truncated to `Decimal` precision.
pub fn fractional_hours(start: NaiveDateTime, end: NaiveDateTime) -> Decimal {
    let seconds = (end - start).num_seconds();
    Decimal::new(seconds, 0) / Decimal::new(3600, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn shift(start: NaiveDateTime, end: NaiveDateTime) -> ShiftInterval {
        ShiftInterval::new(start, end).unwrap()
    }

    #[test]
    fn test_aligned_shift_produces_whole_hours() {
        let interval = shift(
            make_datetime("2025-02-11", "08:00:00"),
            make_datetime("2025-02-11", "16:00:00"),
        );
        let segments = segment_by_hour(&interval);
        assert_eq!(segments.len(), 8);
        for (start, end) in &segments {
            assert_eq!(fractional_hours(*start, *end), dec("1"));
        }
        assert_eq!(segments[0].0, interval.start);
        assert_eq!(segments[7].1, interval.end);
    }

    #[test]
    fn test_first_segment_clipped_to_next_hour() {
        let interval = shift(
            make_datetime("2025-02-11", "21:30:00"),
            make_datetime("2025-02-11", "23:15:00"),
        );
        let segments = segment_by_hour(&interval);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].1, make_datetime("2025-02-11", "22:00:00"));
        assert_eq!(fractional_hours(segments[0].0, segments[0].1), dec("0.5"));
        assert_eq!(fractional_hours(segments[1].0, segments[1].1), dec("1"));
        assert_eq!(fractional_hours(segments[2].0, segments[2].1), dec("0.25"));
    }

    #[test]
    fn test_sub_hour_shift_is_single_segment() {
        let interval = shift(
            make_datetime("2025-02-11", "09:30:00"),
            make_datetime("2025-02-11", "09:45:00"),
        );
        let segments = segment_by_hour(&interval);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0], (interval.start, interval.end));
        assert_eq!(fractional_hours(segments[0].0, segments[0].1), dec("0.25"));
    }

    #[test]
    fn test_overnight_shift_crosses_midnight() {
        let interval = shift(
            make_datetime("2025-02-11", "22:00:00"),
            make_datetime("2025-02-12", "02:00:00"),
        );
        let segments = segment_by_hour(&interval);
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[1].1, make_datetime("2025-02-12", "00:00:00"));
        assert_eq!(segments[2].0, make_datetime("2025-02-12", "00:00:00"));
    }

    #[test]
    fn test_segments_are_contiguous_and_cover_shift() {
        let interval = shift(
            make_datetime("2025-02-15", "13:47:13"),
            make_datetime("2025-02-16", "05:02:41"),
        );
        let segments = segment_by_hour(&interval);
        assert_eq!(segments[0].0, interval.start);
        assert_eq!(segments.last().unwrap().1, interval.end);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
        for (start, end) in &segments[1..] {
            assert_eq!(start.minute(), 0);
            assert_eq!(start.second(), 0);
            let _ = end;
        }
    }

    #[test]
    fn test_fractional_hours_exact_values() {
        let start = make_datetime("2025-02-11", "10:00:00");
        assert_eq!(
            fractional_hours(start, make_datetime("2025-02-11", "10:30:00")),
            dec("0.5"),
        );
        assert_eq!(
            fractional_hours(start, make_datetime("2025-02-11", "10:06:00")),
            dec("0.1"),
        );
        assert_eq!(
            fractional_hours(start, make_datetime("2025-02-11", "11:00:00")),
            dec("1"),
        );
    }
}
