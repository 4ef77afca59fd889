//! The core shift salary calculation.

use chrono::{Datelike, Timelike};
use rust_decimal::Decimal;

use super::deductions::calculate_statutory_deductions;
use super::segmentation::{fractional_hours, segment_by_hour};
use crate::config::RateConfig;
use crate::models::{AppliedBonus, BonusTotal, HourSegment, SalaryBreakdown, ShiftInterval};

/// Calculates the complete itemized salary for one shift.
///
/// The shift is cut into hour-aligned segments; each segment earns base pay
/// plus every bonus whose window covers the segment's starting hour. When
/// `include_break` is set, the configured break time is deducted from the
/// paid hours before base pay is computed, leaving bonus amounts untouched.
/// Statutory deductions are then taken from the gross: the age-banded TyEL
/// pension percentage (skipped when `age` is `None`) and the flat TVM
/// unemployment insurance percentage, both applied to the same gross amount.
///
/// The calculation is pure: identical inputs always produce an identical
/// breakdown.
///
/// # Example
///
/// ```no_run
/// use salary_engine::calculation::calculate_shift_salary;
/// use salary_engine::config::ConfigLoader;
/// use salary_engine::models::ShiftInterval;
/// use chrono::NaiveDateTime;
///
/// let loader = ConfigLoader::load("./config/pam-logistics-2025").unwrap();
///
/// let start = NaiveDateTime::parse_from_str("2025-02-11 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2025-02-11 16:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let shift = ShiftInterval::new(start, end).unwrap();
///
/// let breakdown = calculate_shift_salary(&shift, loader.config(), true, Some(30));
/// assert_eq!(breakdown.total_hours.to_string(), "7.5");
/// ```
pub fn calculate_shift_salary(
    interval: &ShiftInterval,
    config: &RateConfig,
    include_break: bool,
    age: Option<u32>,
) -> SalaryBreakdown {
    let base_rate = config.salary().base_hourly_rate;

    let mut bonus_totals: Vec<BonusTotal> = config
        .bonuses()
        .iter()
        .map(|rule| BonusTotal {
            key: rule.key.clone(),
            name: rule.name.clone(),
            icon: rule.icon.clone(),
            hours: Decimal::ZERO,
            amount: Decimal::ZERO,
        })
        .collect();

    let mut total_hours = Decimal::ZERO;
    let mut segments = Vec::new();

    for (segment_start, segment_end) in segment_by_hour(interval) {
        let hours = fractional_hours(segment_start, segment_end);
        total_hours += hours;

        let base_amount = base_rate * hours;
        let weekday = segment_start.weekday();
        let hour = segment_start.hour() as u8;

        let mut applied = Vec::new();
        let mut segment_total = base_amount;
        for (rule, totals) in config.bonuses().iter().zip(bonus_totals.iter_mut()) {
            if rule.window.applies(weekday, hour) {
                let rate = rule.rate.hourly_rate(base_rate);
                let amount = rate * hours;
                totals.hours += hours;
                totals.amount += amount;
                segment_total += amount;
                applied.push(AppliedBonus {
                    key: rule.key.clone(),
                    name: rule.name.clone(),
                    icon: rule.icon.clone(),
                    rate,
                    amount,
                });
            }
        }

        segments.push(HourSegment {
            start_time: segment_start,
            end_time: segment_end,
            hours,
            base_amount,
            bonuses: applied,
            total: segment_total,
        });
    }

    // The break reduces paid hours and thereby base pay; bonuses were earned
    // during the time actually worked and are kept as accumulated.
    let mut break_hours = Decimal::ZERO;
    if include_break {
        break_hours = Decimal::from(config.salary().break_minutes) / Decimal::new(60, 0);
        total_hours -= break_hours;
    }

    let base_salary = base_rate * total_hours;
    let bonus_sum: Decimal = bonus_totals.iter().map(|t| t.amount).sum();
    let gross_salary = base_salary + bonus_sum;

    let deductions = calculate_statutory_deductions(gross_salary, age, config.deductions());

    SalaryBreakdown {
        total_hours,
        base_salary,
        segments,
        bonuses: bonus_totals
            .into_iter()
            .filter(|t| t.hours > Decimal::ZERO)
            .collect(),
        gross_salary,
        pension_rate: deductions.pension_rate,
        pension_deduction: deductions.pension_amount,
        insurance_rate: deductions.insurance_rate,
        insurance_deduction: deductions.insurance_amount,
        net_salary: deductions.net_salary,
        break_hours,
    }
}
