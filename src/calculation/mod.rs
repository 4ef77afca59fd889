//! Calculation logic for the Shift Salary Engine.
//!
//! This module contains the hour-aligned segmentation of shift intervals,
//! the per-segment bonus evaluation, the unpaid-break deduction, the
//! statutory deduction calculation, and the supporting pure helpers for
//! deriving end times and deciding break applicability.

mod deductions;
mod helpers;
mod salary;
mod segmentation;

pub use deductions::{StatutoryDeductions, calculate_statutory_deductions};
pub use helpers::{derive_end_time, should_apply_break};
pub use salary::calculate_shift_salary;
pub use segmentation::{fractional_hours, segment_by_hour};
