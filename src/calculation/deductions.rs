//! Statutory deductions: TyEL pension and TVM unemployment insurance.

use rust_decimal::Decimal;

use crate::config::DeductionTable;

/// The statutory deductions computed for one gross salary.
///
/// Both deductions are percentages of the same gross amount; they are not
/// compounded against each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatutoryDeductions {
    /// The TyEL pension percentage applied (0 when no age was supplied).
    pub pension_rate: Decimal,
    /// The pension deduction amount.
    pub pension_amount: Decimal,
    /// The flat TVM unemployment insurance percentage.
    pub insurance_rate: Decimal,
    /// The insurance deduction amount.
    pub insurance_amount: Decimal,
    /// Gross salary minus both deductions.
    pub net_salary: Decimal,
}

/// Computes both statutory deductions from a gross salary.
///
/// The pension percentage is looked up from the age-banded table; when no
/// age is supplied the pension deduction is skipped entirely. The
/// unemployment insurance percentage applies regardless of age.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::calculate_statutory_deductions;
/// use salary_engine::config::{DeductionTable, PensionBand};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let table = DeductionTable {
///     pension_bands: vec![
///         PensionBand { up_to_age: Some(52), rate: Decimal::from_str("7.15").unwrap() },
///         PensionBand { up_to_age: Some(62), rate: Decimal::from_str("8.65").unwrap() },
///         PensionBand { up_to_age: None, rate: Decimal::from_str("7.15").unwrap() },
///     ],
///     unemployment_rate: Decimal::from_str("0.59").unwrap(),
/// };
///
/// let gross = Decimal::from_str("97.125").unwrap();
/// let deductions = calculate_statutory_deductions(gross, Some(30), &table);
/// assert_eq!(deductions.pension_amount, Decimal::from_str("6.9444375").unwrap());
/// assert_eq!(deductions.insurance_amount, Decimal::from_str("0.5730375").unwrap());
/// assert_eq!(deductions.net_salary, Decimal::from_str("89.607525").unwrap());
/// ```
pub fn calculate_statutory_deductions(
    gross_salary: Decimal,
    age: Option<u32>,
    table: &DeductionTable,
) -> StatutoryDeductions {
    let hundred = Decimal::new(100, 0);

    let pension_rate = table.pension_rate_for(age);
    let pension_amount = gross_salary * pension_rate / hundred;

    let insurance_rate = table.unemployment_rate;
    let insurance_amount = gross_salary * insurance_rate / hundred;

    StatutoryDeductions {
        pension_rate,
        pension_amount,
        insurance_rate,
        insurance_amount,
        net_salary: gross_salary - pension_amount - insurance_amount,
    }
}
