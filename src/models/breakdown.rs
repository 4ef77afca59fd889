//! Salary breakdown models.
//!
//! This module contains the output structures produced by one calculation
//! call: the per-segment itemization and the aggregated totals with both
//! statutory deductions applied.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A bonus applied to a single hour segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedBonus {
    /// The configuration key of the bonus rule.
    pub key: String,
    /// The human-readable name of the bonus.
    pub name: String,
    /// The icon shown next to the bonus in summaries.
    pub icon: String,
    /// The effective hourly rate for this bonus. For base-rate-equivalent
    /// bonuses this equals the base hourly rate.
    pub rate: Decimal,
    /// The bonus amount for this segment (`rate * hours`).
    pub amount: Decimal,
}

/// A sub-interval of the shift clipped to at most one clock hour.
///
/// Segments are the atomic unit of bonus evaluation. All boundaries except
/// possibly the first and last land on exact clock hours, and every segment's
/// `hours` value lies in `(0, 1]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourSegment {
    /// The start time of this segment.
    pub start_time: NaiveDateTime,
    /// The end time of this segment.
    pub end_time: NaiveDateTime,
    /// The fraction of an hour covered by this segment, in `(0, 1]`.
    pub hours: Decimal,
    /// The base pay for this segment (`base rate * hours`).
    pub base_amount: Decimal,
    /// Every bonus whose window covers this segment's starting hour.
    pub bonuses: Vec<AppliedBonus>,
    /// Base amount plus all bonus amounts for this segment.
    pub total: Decimal,
}

/// Accumulated hours and amount for one bonus across the whole shift.
///
/// Only bonuses that applied for at least one segment appear in the
/// breakdown's itemized list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusTotal {
    /// The configuration key of the bonus rule.
    pub key: String,
    /// The human-readable name of the bonus.
    pub name: String,
    /// The icon shown next to the bonus in summaries.
    pub icon: String,
    /// Total hours during which this bonus applied.
    pub hours: Decimal,
    /// Total bonus amount.
    pub amount: Decimal,
}

/// The complete, itemized result of one salary calculation.
///
/// Immutable value; one per calculation call. The engine holds no state
/// across calls, so identical inputs always produce identical breakdowns.
///
/// # Example
///
/// ```
/// use salary_engine::models::SalaryBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = SalaryBreakdown {
///     total_hours: Decimal::new(75, 1),
///     base_salary: Decimal::new(97125, 3),
///     segments: vec![],
///     bonuses: vec![],
///     gross_salary: Decimal::new(97125, 3),
///     pension_rate: Decimal::new(715, 2),
///     pension_deduction: Decimal::new(69444375, 7),
///     insurance_rate: Decimal::new(59, 2),
///     insurance_deduction: Decimal::new(5730375, 7),
///     net_salary: Decimal::new(89607525, 6),
///     break_hours: Decimal::new(5, 1),
/// };
/// assert_eq!(
///     breakdown.gross_salary - breakdown.pension_deduction - breakdown.insurance_deduction,
///     breakdown.net_salary,
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Total paid hours, after the break deduction when it applies.
    pub total_hours: Decimal,
    /// Base salary (`base rate * total_hours`).
    pub base_salary: Decimal,
    /// The ordered hour segments produced by segmentation.
    pub segments: Vec<HourSegment>,
    /// Per-bonus totals, in configuration order, zero-hour bonuses excluded.
    pub bonuses: Vec<BonusTotal>,
    /// Base salary plus all bonus amounts, before deductions.
    pub gross_salary: Decimal,
    /// The TyEL pension percentage applied (0 when no age was supplied).
    pub pension_rate: Decimal,
    /// The TyEL pension deduction amount.
    pub pension_deduction: Decimal,
    /// The flat TVM unemployment insurance percentage.
    pub insurance_rate: Decimal,
    /// The TVM unemployment insurance deduction amount.
    pub insurance_deduction: Decimal,
    /// Gross salary minus both statutory deductions.
    pub net_salary: Decimal,
    /// The hours deducted as unpaid break (0 when the break did not apply).
    pub break_hours: Decimal,
}
