//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the rate
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{
    AgreementMetadata, BonusesConfig, DeductionTable, RateConfig, SalaryConfig,
};

/// Loads and provides access to the rate configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// validates them into a [`RateConfig`].
///
/// # Directory Structure
///
/// ```text
/// config/pam-logistics-2025/
/// ├── agreement.yaml   # Agreement metadata
/// ├── salary.yaml      # Base rate, break duration, default shift length
/// ├── bonuses.yaml     # Ordered bonus rules
/// └── deductions.yaml  # TyEL pension bands and TVM insurance rate
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/pam-logistics-2025").unwrap();
/// println!("Base rate: {}", loader.config().salary().base_hourly_rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RateConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns an error if any required file is missing, contains invalid
    /// YAML, or fails the load-time validation in [`RateConfig::new`].
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<AgreementMetadata>(&path.join("agreement.yaml"))?;
        let salary = Self::load_yaml::<SalaryConfig>(&path.join("salary.yaml"))?;
        let bonuses = Self::load_yaml::<BonusesConfig>(&path.join("bonuses.yaml"))?;
        let deductions = Self::load_yaml::<DeductionTable>(&path.join("deductions.yaml"))?;

        let config = RateConfig::new(metadata, salary, bonuses.bonuses, deductions)?;

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the validated rate configuration.
    pub fn config(&self) -> &RateConfig {
        &self.config
    }

    /// Returns the agreement metadata.
    pub fn agreement(&self) -> &AgreementMetadata {
        self.config.agreement()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BonusRate, BonusWindow};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/pam-logistics-2025"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
    }

    #[test]
    fn test_salary_parameters_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let salary = loader.config().salary();

        assert_eq!(salary.base_hourly_rate, dec("12.95"));
        assert_eq!(salary.break_minutes, 30);
        assert_eq!(salary.default_shift_hours, 8);
    }

    #[test]
    fn test_bonus_rules_loaded_in_order() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let keys: Vec<&str> = loader
            .config()
            .bonuses()
            .iter()
            .map(|r| r.key.as_str())
            .collect();

        assert_eq!(
            keys,
            vec![
                "evening_weekday",
                "evening_sunday",
                "night_weekday",
                "night_sunday",
                "saturday",
                "sunday_base",
            ]
        );
    }

    #[test]
    fn test_sunday_base_rule_is_base_rate_equivalent() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let rule = loader
            .config()
            .bonuses()
            .iter()
            .find(|r| r.key == "sunday_base")
            .expect("sunday_base rule present");

        assert_eq!(rule.rate, BonusRate::BaseRateEquivalent);
        match &rule.window {
            BonusWindow::SingleDay { day, hours } => {
                assert_eq!(*day, 7);
                assert_eq!(hours.len(), 1);
                assert_eq!(hours[0].from, 0);
                assert_eq!(hours[0].to, 24);
            }
            other => panic!("unexpected window shape: {:?}", other),
        }
    }

    #[test]
    fn test_night_weekday_rule_has_two_spans() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let rule = loader
            .config()
            .bonuses()
            .iter()
            .find(|r| r.key == "night_weekday")
            .expect("night_weekday rule present");

        assert_eq!(rule.rate, BonusRate::PerHour { amount: dec("4.40") });
        match &rule.window {
            BonusWindow::DayRange {
                first_day,
                last_day,
                hours,
            } => {
                assert_eq!((*first_day, *last_day), (1, 6));
                assert_eq!(hours.len(), 2);
            }
            other => panic!("unexpected window shape: {:?}", other),
        }
    }

    #[test]
    fn test_deduction_table_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let deductions = loader.config().deductions();

        assert_eq!(deductions.unemployment_rate, dec("0.59"));
        assert_eq!(deductions.pension_rate_for(Some(30)), dec("7.15"));
        assert_eq!(deductions.pension_rate_for(Some(55)), dec("8.65"));
        assert_eq!(deductions.pension_rate_for(Some(70)), dec("7.15"));
    }

    #[test]
    fn test_agreement_metadata_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.agreement().version, "2025");
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("agreement.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }
}
