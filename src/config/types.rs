//! Configuration types for the pay policy.
//!
//! This module contains the strongly-typed structures deserialized from
//! `policy.yaml`. Every field has a default equal to the company pay rules,
//! so a partial file only overrides what it names.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};
use crate::models::WorkerKind;

/// Default minimum hourly pay rate.
pub const DEFAULT_MINIMUM_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 0);
/// Default maximum hourly pay rate.
pub const DEFAULT_MAXIMUM_RATE: Decimal = Decimal::from_parts(120, 0, 0, false, 0);
/// Default minimum hours worked.
pub const DEFAULT_MINIMUM_HOURS: Decimal = Decimal::ZERO;
/// Default maximum hours worked (24 hours a day over two weeks).
pub const DEFAULT_MAXIMUM_HOURS: Decimal = Decimal::from_parts(336, 0, 0, false, 0);
/// Default overtime threshold for hourly workers.
pub const DEFAULT_HOURLY_OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(40, 0, 0, false, 0);
/// Default overtime threshold for salaried workers.
pub const DEFAULT_SALARIED_OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(44, 0, 0, false, 0);
/// Default overtime multiplier (time and a half).
pub const DEFAULT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);
/// Default number of working days in a year.
pub const DEFAULT_ANNUAL_WORKING_DAYS: Decimal = Decimal::from_parts(261, 0, 0, false, 0);
/// Default number of working hours in a day.
pub const DEFAULT_DAILY_WORKING_HOURS: Decimal = Decimal::from_parts(75, 0, 0, false, 1);

/// Bounds and overtime threshold for hourly workers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HourlyPolicy {
    /// The lowest accepted hourly rate (inclusive).
    pub minimum_rate: Decimal,
    /// The highest accepted hourly rate (inclusive).
    pub maximum_rate: Decimal,
    /// Hours above which overtime applies.
    pub overtime_threshold: Decimal,
}

impl Default for HourlyPolicy {
    fn default() -> Self {
        Self {
            minimum_rate: DEFAULT_MINIMUM_RATE,
            maximum_rate: DEFAULT_MAXIMUM_RATE,
            overtime_threshold: DEFAULT_HOURLY_OVERTIME_THRESHOLD,
        }
    }
}

/// Salary conversion figures and overtime threshold for salaried workers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalariedPolicy {
    /// Working days per year used to convert a salary to an hourly rate.
    pub annual_working_days: Decimal,
    /// Working hours per day used to convert a salary to an hourly rate.
    pub daily_working_hours: Decimal,
    /// Hours above which overtime applies.
    pub overtime_threshold: Decimal,
}

impl Default for SalariedPolicy {
    fn default() -> Self {
        Self {
            annual_working_days: DEFAULT_ANNUAL_WORKING_DAYS,
            daily_working_hours: DEFAULT_DAILY_WORKING_HOURS,
            overtime_threshold: DEFAULT_SALARIED_OVERTIME_THRESHOLD,
        }
    }
}

/// Accepted range of hours worked, shared by both worker kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoursPolicy {
    /// The lowest accepted hours worked (inclusive).
    pub minimum: Decimal,
    /// The highest accepted hours worked (inclusive).
    pub maximum: Decimal,
}

impl Default for HoursPolicy {
    fn default() -> Self {
        Self {
            minimum: DEFAULT_MINIMUM_HOURS,
            maximum: DEFAULT_MAXIMUM_HOURS,
        }
    }
}

/// The complete pay policy.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayPolicy;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let policy = PayPolicy::default();
/// assert_eq!(policy.minimum_salary().unwrap(), Decimal::from_str("29362.5").unwrap());
/// assert_eq!(policy.annual_working_hours().unwrap(), Decimal::from_str("1957.5").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayPolicy {
    /// Hourly worker rules.
    pub hourly: HourlyPolicy,
    /// Salaried worker rules.
    pub salaried: SalariedPolicy,
    /// Hours worked bounds.
    pub hours: HoursPolicy,
    /// Multiplier applied to the rate for overtime hours.
    pub overtime_multiplier: Decimal,
}

impl Default for PayPolicy {
    fn default() -> Self {
        Self {
            hourly: HourlyPolicy::default(),
            salaried: SalariedPolicy::default(),
            hours: HoursPolicy::default(),
            overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
        }
    }
}

impl PayPolicy {
    /// Working hours in a year (`annual_working_days × daily_working_hours`).
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the product does not fit in a `Decimal`.
    pub fn annual_working_hours(&self) -> PayrollResult<Decimal> {
        self.salaried
            .annual_working_days
            .checked_mul(self.salaried.daily_working_hours)
            .ok_or_else(|| PayrollError::InvalidConfig {
                message: format!(
                    "{} working days of {} hours overflow the annual working hours",
                    self.salaried.annual_working_days, self.salaried.daily_working_hours
                ),
            })
    }

    /// The lowest accepted salary: the minimum hourly rate over a full
    /// working year.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the product does not fit in a `Decimal`.
    pub fn minimum_salary(&self) -> PayrollResult<Decimal> {
        let hours = self.annual_working_hours()?;
        self.hourly
            .minimum_rate
            .checked_mul(hours)
            .ok_or_else(|| PayrollError::InvalidConfig {
                message: format!(
                    "minimum rate {} over {} hours overflows the minimum salary",
                    self.hourly.minimum_rate, hours
                ),
            })
    }

    /// Returns the overtime threshold for the given kind of worker.
    pub fn overtime_threshold(&self, kind: WorkerKind) -> Decimal {
        match kind {
            WorkerKind::Hourly => self.hourly.overtime_threshold,
            WorkerKind::Salaried => self.salaried.overtime_threshold,
        }
    }
}
