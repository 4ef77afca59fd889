//! Configuration types for the shift salary engine.
//!
//! This module contains the strongly-typed configuration structures that are
//! deserialized from YAML configuration files. Bonus rule predicates are
//! represented as data (a closed set of window shapes interpreted by
//! [`BonusWindow::applies`]) so that the whole configuration stays
//! serializable.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{EngineError, EngineResult};

/// Metadata about the wage agreement the rate table was taken from.
#[derive(Debug, Clone, Deserialize)]
pub struct AgreementMetadata {
    /// The human-readable name of the agreement.
    pub name: String,
    /// The version or effective year of the rate table.
    pub version: String,
    /// URL to the agreement source.
    pub source_url: String,
}

/// Base salary parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct SalaryConfig {
    /// The base hourly rate in currency units. Must not be negative.
    pub base_hourly_rate: Decimal,
    /// Minutes deducted from paid time when the lunch break applies.
    pub break_minutes: u32,
    /// Default shift length in hours, used to derive an end time from a
    /// start time when the caller only supplies the start.
    pub default_shift_hours: u32,
}

/// A half-open hour-of-day range: matches hours `from <= h < to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourSpan {
    /// First matching hour (0-23).
    pub from: u8,
    /// First hour past the range (1-24).
    pub to: u8,
}

impl HourSpan {
    /// Returns true if `hour` falls inside this span.
    pub fn contains(&self, hour: u8) -> bool {
        self.from <= hour && hour < self.to
    }
}

/// The time window during which a bonus rule applies.
///
/// Windows form a closed set of shapes evaluated against the wall-clock
/// day-of-week and the hour bucket in which a segment starts. Days are ISO
/// weekday numbers: 1 is Monday, 7 is Sunday.
///
/// # Example
///
/// ```
/// use salary_engine::config::{BonusWindow, HourSpan};
/// use chrono::Weekday;
///
/// // Mon-Fri evenings, 18-22.
/// let window = BonusWindow::DayRange {
///     first_day: 1,
///     last_day: 5,
///     hours: vec![HourSpan { from: 18, to: 22 }],
/// };
/// assert!(window.applies(Weekday::Tue, 21));
/// assert!(!window.applies(Weekday::Tue, 22));
/// assert!(!window.applies(Weekday::Sun, 21));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum BonusWindow {
    /// A consecutive run of weekdays sharing the same hour spans.
    DayRange {
        /// The first matching ISO weekday (1 = Monday).
        first_day: u8,
        /// The last matching ISO weekday, inclusive (7 = Sunday).
        last_day: u8,
        /// The hour spans during which the rule applies.
        hours: Vec<HourSpan>,
    },
    /// A single weekday with its own hour spans.
    SingleDay {
        /// The matching ISO weekday (1 = Monday, 7 = Sunday).
        day: u8,
        /// The hour spans during which the rule applies. A single span
        /// `0..24` makes the rule cover the whole day.
        hours: Vec<HourSpan>,
    },
}

impl BonusWindow {
    /// Evaluates the window against a weekday and an hour-of-day bucket.
    ///
    /// The hour is the segment's *starting* hour: a segment spanning
    /// 21:30-22:00 is evaluated at hour 21.
    pub fn applies(&self, weekday: Weekday, hour: u8) -> bool {
        let day = weekday.number_from_monday() as u8;
        match self {
            BonusWindow::DayRange {
                first_day,
                last_day,
                hours,
            } => *first_day <= day && day <= *last_day && hours.iter().any(|s| s.contains(hour)),
            BonusWindow::SingleDay { day: d, hours } => {
                *d == day && hours.iter().any(|s| s.contains(hour))
            }
        }
    }

    fn validate(&self, key: &str) -> EngineResult<()> {
        let (days, hours): (Vec<u8>, &[HourSpan]) = match self {
            BonusWindow::DayRange {
                first_day,
                last_day,
                hours,
            } => {
                if first_day > last_day {
                    return Err(EngineError::InvalidConfig {
                        message: format!("bonus '{}': first_day is after last_day", key),
                    });
                }
                (vec![*first_day, *last_day], hours)
            }
            BonusWindow::SingleDay { day, hours } => (vec![*day], hours),
        };

        for day in days {
            if !(1..=7).contains(&day) {
                return Err(EngineError::InvalidConfig {
                    message: format!("bonus '{}': weekday {} is outside 1-7", key, day),
                });
            }
        }
        if hours.is_empty() {
            return Err(EngineError::InvalidConfig {
                message: format!("bonus '{}': window has no hour spans", key),
            });
        }
        for span in hours {
            if span.from >= span.to || span.to > 24 {
                return Err(EngineError::InvalidConfig {
                    message: format!(
                        "bonus '{}': hour span {}-{} is not a valid range within 0-24",
                        key, span.from, span.to
                    ),
                });
            }
        }
        Ok(())
    }
}

/// The rate attached to a bonus rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BonusRate {
    /// A fixed hourly differential.
    PerHour {
        /// The bonus amount per hour.
        amount: Decimal,
    },
    /// The bonus equals 100% of the base hourly rate for the segment.
    /// Used for the Sunday premium.
    BaseRateEquivalent,
}

impl BonusRate {
    /// Resolves the effective hourly rate given the base hourly rate.
    pub fn hourly_rate(&self, base_hourly_rate: Decimal) -> Decimal {
        match self {
            BonusRate::PerHour { amount } => *amount,
            BonusRate::BaseRateEquivalent => base_hourly_rate,
        }
    }
}

/// A named bonus rule: a time window plus a rate.
#[derive(Debug, Clone, Deserialize)]
pub struct BonusRule {
    /// Unique key identifying the rule (e.g. "evening_weekday").
    pub key: String,
    /// Human-readable name shown in itemizations.
    pub name: String,
    /// Icon shown next to the bonus in summaries.
    pub icon: String,
    /// The bonus rate.
    pub rate: BonusRate,
    /// The time window during which the rule applies.
    pub window: BonusWindow,
}

/// Bonuses configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct BonusesConfig {
    /// The ordered list of bonus rules. Order determines itemization order;
    /// bonuses are additive, so it does not affect totals.
    pub bonuses: Vec<BonusRule>,
}

/// One age band of the TyEL pension table.
///
/// A band covers all ages up to and including `up_to_age`; the final band
/// leaves `up_to_age` unset and covers every older age.
#[derive(Debug, Clone, Deserialize)]
pub struct PensionBand {
    /// The inclusive upper age bound, or `None` for the open final band.
    #[serde(default)]
    pub up_to_age: Option<u32>,
    /// The pension percentage for this band.
    pub rate: Decimal,
}

/// The statutory deduction tables: age-banded TyEL pension percentages plus
/// the flat TVM unemployment insurance percentage.
#[derive(Debug, Clone, Deserialize)]
pub struct DeductionTable {
    /// Pension bands ordered by ascending age bound, last band open-ended.
    pub pension_bands: Vec<PensionBand>,
    /// The flat unemployment insurance percentage, applied regardless of age.
    pub unemployment_rate: Decimal,
}

impl DeductionTable {
    /// Looks up the pension percentage for an employee age.
    ///
    /// Returns zero when no age is supplied, so the pension deduction is
    /// skipped while the flat insurance deduction still applies.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use salary_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/pam-logistics-2025").unwrap();
    /// let deductions = loader.config().deductions();
    /// assert_eq!(deductions.pension_rate_for(Some(30)).to_string(), "7.15");
    /// assert_eq!(deductions.pension_rate_for(None), rust_decimal::Decimal::ZERO);
    /// ```
    pub fn pension_rate_for(&self, age: Option<u32>) -> Decimal {
        let Some(age) = age else {
            return Decimal::ZERO;
        };
        for band in &self.pension_bands {
            match band.up_to_age {
                Some(bound) if age <= bound => return band.rate,
                Some(_) => continue,
                None => return band.rate,
            }
        }
        // Unreachable for validated tables; the last band is open-ended.
        Decimal::ZERO
    }

    fn validate(&self) -> EngineResult<()> {
        if self.pension_bands.is_empty() {
            return Err(EngineError::InvalidConfig {
                message: "pension table has no bands".to_string(),
            });
        }
        let mut previous_bound: Option<u32> = None;
        for (i, band) in self.pension_bands.iter().enumerate() {
            if band.rate < Decimal::ZERO {
                return Err(EngineError::InvalidConfig {
                    message: format!("pension band {} has a negative rate", i),
                });
            }
            match band.up_to_age {
                Some(bound) => {
                    if i == self.pension_bands.len() - 1 {
                        return Err(EngineError::InvalidConfig {
                            message: "final pension band must be open-ended".to_string(),
                        });
                    }
                    if let Some(prev) = previous_bound {
                        if bound <= prev {
                            return Err(EngineError::InvalidConfig {
                                message: "pension bands must have ascending age bounds"
                                    .to_string(),
                            });
                        }
                    }
                    previous_bound = Some(bound);
                }
                None => {
                    if i != self.pension_bands.len() - 1 {
                        return Err(EngineError::InvalidConfig {
                            message: "only the final pension band may be open-ended".to_string(),
                        });
                    }
                }
            }
        }
        if self.unemployment_rate < Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                message: "unemployment insurance rate must not be negative".to_string(),
            });
        }
        Ok(())
    }
}

/// The complete rate configuration loaded from YAML files.
///
/// Validated once at construction (spec: fail fast at load time, not at
/// calculation time) and treated as an immutable value by the engine.
#[derive(Debug, Clone)]
pub struct RateConfig {
    /// Agreement metadata.
    metadata: AgreementMetadata,
    /// Base salary parameters.
    salary: SalaryConfig,
    /// Ordered bonus rules.
    bonuses: Vec<BonusRule>,
    /// Statutory deduction tables.
    deductions: DeductionTable,
}

impl RateConfig {
    /// Creates a validated RateConfig from its component parts.
    pub fn new(
        metadata: AgreementMetadata,
        salary: SalaryConfig,
        bonuses: Vec<BonusRule>,
        deductions: DeductionTable,
    ) -> EngineResult<Self> {
        if salary.base_hourly_rate < Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                message: "base hourly rate must not be negative".to_string(),
            });
        }

        let mut seen_keys = HashSet::new();
        for rule in &bonuses {
            if !seen_keys.insert(rule.key.as_str()) {
                return Err(EngineError::InvalidConfig {
                    message: format!("duplicate bonus key '{}'", rule.key),
                });
            }
            if let BonusRate::PerHour { amount } = &rule.rate {
                if *amount < Decimal::ZERO {
                    return Err(EngineError::InvalidConfig {
                        message: format!("bonus '{}' has a negative rate", rule.key),
                    });
                }
            }
            rule.window.validate(&rule.key)?;
        }

        deductions.validate()?;

        Ok(Self {
            metadata,
            salary,
            bonuses,
            deductions,
        })
    }

    /// Returns the agreement metadata.
    pub fn agreement(&self) -> &AgreementMetadata {
        &self.metadata
    }

    /// Returns the base salary parameters.
    pub fn salary(&self) -> &SalaryConfig {
        &self.salary
    }

    /// Returns the ordered bonus rules.
    pub fn bonuses(&self) -> &[BonusRule] {
        &self.bonuses
    }

    /// Returns the statutory deduction tables.
    pub fn deductions(&self) -> &DeductionTable {
        &self.deductions
    }
}
