//! Per-ISO-week aggregation of imported shifts.

use chrono::{Datelike, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use super::parser::CalendarShift;
use crate::calculation::{calculate_shift_salary, should_apply_break};
use crate::config::RateConfig;
use crate::models::{SalaryBreakdown, ShiftInterval};

/// An ISO week identifier.
///
/// Ordering follows the calendar, and the display form is the ISO 8601 week
/// label, e.g. `2025-W07`. A shift belongs to the week containing its start
/// time; overnight shifts are not split at the week boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekKey {
    /// The ISO week-numbering year (may differ from the calendar year
    /// around New Year).
    pub year: i32,
    /// The ISO week number, 1-53.
    pub week: u32,
}

impl WeekKey {
    /// Returns the ISO week containing the given instant.
    pub fn for_date(datetime: NaiveDateTime) -> Self {
        let iso = datetime.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-W{:02}", self.year, self.week)
    }
}

impl Serialize for WeekKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Salary totals accumulated over a group of shifts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PeriodTotals {
    /// Number of shifts in the period.
    pub shift_count: usize,
    /// Total paid hours, after break deductions.
    pub total_hours: Decimal,
    /// Total base salary.
    pub base_salary: Decimal,
    /// Total bonus amount.
    pub bonus_amount: Decimal,
    /// Total gross salary.
    pub gross_salary: Decimal,
    /// Total TyEL pension deductions.
    pub pension_deduction: Decimal,
    /// Total TVM unemployment insurance deductions.
    pub insurance_deduction: Decimal,
    /// Total net salary.
    pub net_salary: Decimal,
}

impl PeriodTotals {
    /// Folds one shift's breakdown into the running totals.
    pub fn accumulate(&mut self, breakdown: &SalaryBreakdown) {
        self.shift_count += 1;
        self.total_hours += breakdown.total_hours;
        self.base_salary += breakdown.base_salary;
        self.bonus_amount += breakdown
            .bonuses
            .iter()
            .map(|bonus| bonus.amount)
            .sum::<Decimal>();
        self.gross_salary += breakdown.gross_salary;
        self.pension_deduction += breakdown.pension_deduction;
        self.insurance_deduction += breakdown.insurance_deduction;
        self.net_salary += breakdown.net_salary;
    }
}

/// One calculated shift inside a weekly summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftEntry {
    /// The event summary from the calendar feed.
    pub summary: String,
    /// The shift interval.
    pub interval: ShiftInterval,
    /// Paid hours for this shift.
    pub total_hours: Decimal,
    /// Gross salary for this shift.
    pub gross_salary: Decimal,
    /// Net salary for this shift.
    pub net_salary: Decimal,
}

/// All shifts of one ISO week with their accumulated totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekSummary {
    /// The ISO week, serialized as its `YYYY-Www` label.
    pub week: WeekKey,
    /// The shifts of this week, in start order.
    pub shifts: Vec<ShiftEntry>,
    /// Totals over the week's shifts.
    pub totals: PeriodTotals,
}

/// The result of a batch calculation over an imported calendar feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyReport {
    /// Per-week summaries in calendar order.
    pub weeks: Vec<WeekSummary>,
    /// Totals over every imported shift.
    pub grand_total: PeriodTotals,
}

/// Groups shifts by the ISO week containing their start time.
///
/// The `BTreeMap` keeps weeks in calendar order.
pub fn group_by_week(shifts: &[CalendarShift]) -> BTreeMap<WeekKey, Vec<&CalendarShift>> {
    let mut groups: BTreeMap<WeekKey, Vec<&CalendarShift>> = BTreeMap::new();
    for shift in shifts {
        groups
            .entry(WeekKey::for_date(shift.interval.start))
            .or_default()
            .push(shift);
    }
    groups
}

/// Runs the salary calculation for every imported shift and aggregates the
/// results per ISO week.
///
/// The break deduction is decided per shift: it applies whenever the shift is
/// at least as long as the configured break. The same `age` is used for every
/// shift, since the feed describes a single employee's schedule.
pub fn calculate_weekly_report(
    shifts: &[CalendarShift],
    config: &RateConfig,
    age: Option<u32>,
) -> WeeklyReport {
    let break_minutes = config.salary().break_minutes;

    let mut weeks = Vec::new();
    let mut grand_total = PeriodTotals::default();

    for (week, week_shifts) in group_by_week(shifts) {
        let mut entries = Vec::new();
        let mut totals = PeriodTotals::default();

        for shift in week_shifts {
            let include_break = should_apply_break(&shift.interval, break_minutes);
            let breakdown = calculate_shift_salary(&shift.interval, config, include_break, age);
            totals.accumulate(&breakdown);
            grand_total.accumulate(&breakdown);
            entries.push(ShiftEntry {
                summary: shift.summary.clone(),
                interval: shift.interval,
                total_hours: breakdown.total_hours,
                gross_salary: breakdown.gross_salary,
                net_salary: breakdown.net_salary,
            });
        }

        weeks.push(WeekSummary {
            week,
            shifts: entries,
            totals,
        });
    }

    WeeklyReport { weeks, grand_total }
}
