//! Core data models for the Shift Salary Engine.
//!
//! This module contains all the domain values used throughout the engine.

mod breakdown;
mod shift;

pub use breakdown::{AppliedBonus, BonusTotal, HourSegment, SalaryBreakdown};
pub use shift::ShiftInterval;
