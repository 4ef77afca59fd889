//! Calendar feed import.
//!
//! Parses shift events out of an iCalendar (ICS) feed and aggregates the
//! resulting salary calculations into per-ISO-week batch totals.

mod parser;
mod weekly;

pub use parser::{CalendarShift, parse_calendar};
pub use weekly::{
    PeriodTotals, ShiftEntry, WeekKey, WeekSummary, WeeklyReport, calculate_weekly_report,
    group_by_week,
};
