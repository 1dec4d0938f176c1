//! Input validation functionality.
//!
//! This module turns the raw text a worker submission arrives as into
//! validated decimal values. Every function here is pure: nothing is
//! recorded until all inputs for a worker have passed.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::config::PayPolicy;
use crate::error::{InputField, PayrollError, PayrollResult};

/// Parses raw input text as a decimal number.
///
/// Surrounding whitespace is ignored and `,` group separators are accepted
/// in the integer part, so `" 30,000 "` parses as `30000`. A leading sign is
/// accepted; range checks are left to the callers.
///
/// # Errors
///
/// Returns `InvalidFormat` for empty input or anything that is not a plain
/// decimal number: exponent notation, `_` separators, a leading `,` or a
/// `,` after the decimal point.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::parse_decimal;
/// use payroll_engine::error::InputField;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let value = parse_decimal(InputField::Salary, " 30,000.50 ").unwrap();
/// assert_eq!(value, Decimal::from_str("30000.50").unwrap());
///
/// assert!(parse_decimal(InputField::Rate, "abc").is_err());
/// ```
pub fn parse_decimal(field: InputField, raw: &str) -> PayrollResult<Decimal> {
    let invalid = || PayrollError::InvalidFormat {
        field,
        value: raw.to_string(),
    };

    let trimmed = raw.trim();
    // `Decimal::from_str` would otherwise take `_` as a digit separator
    if trimmed.is_empty() || trimmed.contains(['e', 'E', '_']) {
        return Err(invalid());
    }

    let (integer, fraction) = trimmed.split_at(trimmed.find('.').unwrap_or(trimmed.len()));
    if integer.trim_start_matches(['+', '-']).starts_with(',') || fraction.contains(',') {
        return Err(invalid());
    }

    let cleaned: String = integer
        .chars()
        .filter(|c| *c != ',')
        .chain(fraction.chars())
        .collect();
    Decimal::from_str(&cleaned).map_err(|_| invalid())
}

/// Parses and validates an hourly pay rate against the policy's rate bounds.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::validate_rate;
/// use payroll_engine::config::PayPolicy;
///
/// let policy = PayPolicy::default();
/// assert!(validate_rate("20", &policy).is_ok());
/// assert!(validate_rate("10", &policy).is_err());
/// ```
pub fn validate_rate(raw: &str, policy: &PayPolicy) -> PayrollResult<Decimal> {
    let rate = parse_decimal(InputField::Rate, raw)?;
    check_range(
        InputField::Rate,
        rate,
        policy.hourly.minimum_rate,
        Some(policy.hourly.maximum_rate),
    )
}

/// Parses and validates hours worked against the policy's hours bounds.
pub fn validate_hours(raw: &str, policy: &PayPolicy) -> PayrollResult<Decimal> {
    let hours = parse_decimal(InputField::Hours, raw)?;
    check_range(
        InputField::Hours,
        hours,
        policy.hours.minimum,
        Some(policy.hours.maximum),
    )
}

/// Parses and validates an annual salary. Salaries have a floor
/// ([`PayPolicy::minimum_salary`]) but no ceiling.
pub fn validate_salary(raw: &str, policy: &PayPolicy) -> PayrollResult<Decimal> {
    let salary = parse_decimal(InputField::Salary, raw)?;
    check_range(InputField::Salary, salary, policy.minimum_salary()?, None)
}

/// Converts an annual salary into the hourly rate used for pay.
///
/// The derived rate is not checked against the hourly rate bounds.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::derive_hourly_rate;
/// use payroll_engine::config::PayPolicy;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let policy = PayPolicy::default();
/// let rate = derive_hourly_rate(Decimal::from_str("29362.5").unwrap(), &policy).unwrap();
/// assert_eq!(rate, Decimal::from(15));
/// ```
pub fn derive_hourly_rate(salary: Decimal, policy: &PayPolicy) -> PayrollResult<Decimal> {
    let hours = policy.annual_working_hours()?;
    salary
        .checked_div(hours)
        .ok_or_else(|| PayrollError::CalculationError {
            message: format!("cannot convert salary {} over {} working hours", salary, hours),
        })
}

fn check_range(
    field: InputField,
    value: Decimal,
    minimum: Decimal,
    maximum: Option<Decimal>,
) -> PayrollResult<Decimal> {
    let above_maximum = maximum.is_some_and(|max| value > max);
    if value < minimum || above_maximum {
        return Err(PayrollError::OutOfRange {
            field,
            value,
            minimum,
            maximum,
        });
    }
    Ok(value)
}
