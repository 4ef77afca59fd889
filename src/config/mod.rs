//! Configuration module for the Shift Salary Engine.
//!
//! Provides the strongly-typed rate configuration and the YAML loader.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AgreementMetadata, BonusRate, BonusRule, BonusWindow, DeductionTable, HourSpan, PensionBand,
    RateConfig, SalaryConfig,
};
