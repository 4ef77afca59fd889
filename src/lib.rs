//! Shift Salary Engine for the Finnish logistics wage model
//!
//! This crate decomposes work shifts into hour-aligned segments, applies a
//! configurable set of time-of-day/day-of-week bonuses per segment, deducts
//! the unpaid lunch break from base pay, and applies the statutory TyEL
//! pension and TVM unemployment insurance deductions to produce an itemized
//! salary breakdown. It also parses calendar-feed text into shifts and
//! aggregates salary totals per ISO week.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
