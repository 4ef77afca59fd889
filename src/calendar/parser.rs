//! Lenient ICS event extraction.
//!
//! The parser scans for `BEGIN:VEVENT`/`END:VEVENT` blocks and reads the
//! `SUMMARY`, `DTSTART` and `DTEND` properties. Feeds produced by shift
//! planning tools vary, so anything outside those blocks is ignored, and an
//! event with a missing or malformed timestamp is dropped rather than
//! failing the whole import.

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::ShiftInterval;

/// One shift extracted from a calendar feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarShift {
    /// The event summary, empty when the feed carries none.
    pub summary: String,
    /// The shift interval taken from `DTSTART`/`DTEND`.
    pub interval: ShiftInterval,
}

/// Parses every usable shift event out of an ICS feed.
///
/// Events missing a start or end, carrying a timestamp that does not parse,
/// or whose end is not after the start are skipped. The returned shifts are
/// sorted by start time.
///
/// # Example
///
/// ```
/// use salary_engine::calendar::parse_calendar;
///
/// let feed = "BEGIN:VCALENDAR\r\n\
///             BEGIN:VEVENT\r\n\
///             SUMMARY:Warehouse shift\r\n\
///             DTSTART:20250211T080000Z\r\n\
///             DTEND:20250211T160000Z\r\n\
///             END:VEVENT\r\n\
///             END:VCALENDAR\r\n";
///
/// let shifts = parse_calendar(feed);
/// assert_eq!(shifts.len(), 1);
/// assert_eq!(shifts[0].summary, "Warehouse shift");
/// ```
pub fn parse_calendar(feed: &str) -> Vec<CalendarShift> {
    let mut shifts = Vec::new();

    let mut in_event = false;
    let mut summary = String::new();
    let mut start: Option<NaiveDateTime> = None;
    let mut end: Option<NaiveDateTime> = None;

    for raw_line in feed.lines() {
        let line = raw_line.trim_end_matches('\r').trim();

        if line == "BEGIN:VEVENT" {
            in_event = true;
            summary.clear();
            start = None;
            end = None;
            continue;
        }
        if line == "END:VEVENT" {
            if in_event {
                if let (Some(start), Some(end)) = (start, end) {
                    if let Ok(interval) = ShiftInterval::new(start, end) {
                        shifts.push(CalendarShift {
                            summary: summary.clone(),
                            interval,
                        });
                    }
                }
            }
            in_event = false;
            continue;
        }
        if !in_event {
            continue;
        }

        // Property names may carry parameters: "DTSTART;TZID=...:20250211T080000".
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        let name = name.split(';').next().unwrap_or(name);
        match name {
            "SUMMARY" => summary = value.to_string(),
            "DTSTART" => start = parse_ics_datetime(value),
            "DTEND" => end = parse_ics_datetime(value),
            _ => {}
        }
    }

    shifts.sort_by_key(|shift| shift.interval.start);
    shifts
}

/// Parses an ICS timestamp of the form `YYYYMMDDTHHMMSS`, with an optional
/// trailing `Z`. Date-only values (`YYYYMMDD`, as produced by
/// `VALUE=DATE` properties) parse as midnight. The UTC marker is ignored;
/// timestamps are treated as wall-clock times, matching the rest of the
/// engine.
fn parse_ics_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim().trim_end_matches('Z');
    NaiveDateTime::parse_from_str(value, "%Y%m%dT%H%M%S")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y%m%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    const FEED: &str = "BEGIN:VCALENDAR\r\n\
        VERSION:2.0\r\n\
        PRODID:-//shift planner//EN\r\n\
        BEGIN:VEVENT\r\n\
        UID:2@planner\r\n\
        SUMMARY:Evening shift\r\n\
        DTSTART:20250212T160000Z\r\n\
        DTEND:20250213T000000Z\r\n\
        END:VEVENT\r\n\
        BEGIN:VEVENT\r\n\
        UID:1@planner\r\n\
        SUMMARY:Morning shift\r\n\
        DTSTART;TZID=Europe/Helsinki:20250211T080000\r\n\
        DTEND;TZID=Europe/Helsinki:20250211T160000\r\n\
        END:VEVENT\r\n\
        END:VCALENDAR\r\n";

    #[test]
    fn test_parses_events_and_sorts_by_start() {
        let shifts = parse_calendar(FEED);
        assert_eq!(shifts.len(), 2);
        assert_eq!(shifts[0].summary, "Morning shift");
        assert_eq!(
            shifts[0].interval.start,
            make_datetime("2025-02-11", "08:00:00"),
        );
        assert_eq!(shifts[1].summary, "Evening shift");
        assert_eq!(
            shifts[1].interval.end,
            make_datetime("2025-02-13", "00:00:00"),
        );
    }

    #[test]
    fn test_event_missing_end_is_skipped() {
        let feed = "BEGIN:VEVENT\n\
            SUMMARY:Broken\n\
            DTSTART:20250211T080000\n\
            END:VEVENT\n";
        assert!(parse_calendar(feed).is_empty());
    }

    #[test]
    fn test_date_only_event_parses_as_midnight() {
        // All-day events use VALUE=DATE properties without a time part.
        let feed = "BEGIN:VEVENT\n\
            SUMMARY:All-day shift\n\
            DTSTART;VALUE=DATE:20250211\n\
            DTEND;VALUE=DATE:20250212\n\
            END:VEVENT\n";
        let shifts = parse_calendar(feed);
        assert_eq!(shifts.len(), 1);
        assert_eq!(
            shifts[0].interval.start,
            make_datetime("2025-02-11", "00:00:00"),
        );
        assert_eq!(
            shifts[0].interval.end,
            make_datetime("2025-02-12", "00:00:00"),
        );
    }

    #[test]
    fn test_event_with_malformed_timestamp_is_skipped() {
        let feed = "BEGIN:VEVENT\n\
            DTSTART:tomorrow\n\
            DTEND:20250211T160000\n\
            END:VEVENT\n";
        assert!(parse_calendar(feed).is_empty());
    }

    #[test]
    fn test_event_with_reversed_times_is_skipped() {
        let feed = "BEGIN:VEVENT\n\
            DTSTART:20250211T160000\n\
            DTEND:20250211T080000\n\
            END:VEVENT\n";
        assert!(parse_calendar(feed).is_empty());
    }

    #[test]
    fn test_missing_summary_is_empty_string() {
        let feed = "BEGIN:VEVENT\n\
            DTSTART:20250211T080000\n\
            DTEND:20250211T160000\n\
            END:VEVENT\n";
        let shifts = parse_calendar(feed);
        assert_eq!(shifts.len(), 1);
        assert_eq!(shifts[0].summary, "");
    }

    #[test]
    fn test_properties_outside_events_are_ignored() {
        let feed = "DTSTART:20250211T080000\n\
            DTEND:20250211T160000\n";
        assert!(parse_calendar(feed).is_empty());
    }

    #[test]
    fn test_unix_line_endings_accepted() {
        let feed = FEED.replace("\r\n", "\n");
        assert_eq!(parse_calendar(&feed).len(), 2);
    }
}
