//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the pay policy
//! from a YAML file.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{PayrollError, PayrollResult};

use super::types::PayPolicy;

/// Name of the policy file inside a configuration directory.
pub const POLICY_FILE_NAME: &str = "policy.yaml";

/// Loads and validates the pay policy.
///
/// # Directory Structure
///
/// ```text
/// config/payroll/
/// └── policy.yaml   # Rate, salary and hours bounds, overtime thresholds
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll")?;
/// println!("Minimum salary: {}", loader.policy().minimum_salary()?);
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    policy: PayPolicy,
}

impl ConfigLoader {
    /// Loads the policy from `policy.yaml` in the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `policy.yaml` is missing (`ConfigNotFound`)
    /// - the file contains invalid YAML (`ConfigParseError`)
    /// - the values are inconsistent (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let policy_path = path.as_ref().join(POLICY_FILE_NAME);
        let policy = Self::load_yaml::<PayPolicy>(&policy_path)?;
        Self::from_policy(policy)
    }

    /// Wraps an in-memory policy after validating it.
    pub fn from_policy(policy: PayPolicy) -> PayrollResult<Self> {
        validate_policy(&policy)?;
        Ok(Self { policy })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded pay policy.
    pub fn policy(&self) -> &PayPolicy {
        &self.policy
    }

    /// Consumes the loader and returns the pay policy.
    pub fn into_policy(self) -> PayPolicy {
        self.policy
    }
}

fn validate_policy(policy: &PayPolicy) -> PayrollResult<()> {
    let invalid = |message: String| Err(PayrollError::InvalidConfig { message });

    if policy.hourly.minimum_rate <= Decimal::ZERO {
        return invalid(format!(
            "hourly.minimum_rate must be positive, got {}",
            policy.hourly.minimum_rate
        ));
    }
    if policy.hourly.minimum_rate > policy.hourly.maximum_rate {
        return invalid(format!(
            "hourly.minimum_rate {} exceeds hourly.maximum_rate {}",
            policy.hourly.minimum_rate, policy.hourly.maximum_rate
        ));
    }
    if policy.hours.minimum < Decimal::ZERO || policy.hours.minimum > policy.hours.maximum {
        return invalid(format!(
            "hours range {}..={} is not a valid non-negative range",
            policy.hours.minimum, policy.hours.maximum
        ));
    }
    if policy.salaried.annual_working_days <= Decimal::ZERO
        || policy.salaried.daily_working_hours <= Decimal::ZERO
    {
        return invalid("salaried working days and daily hours must be positive".to_string());
    }
    if policy.hourly.overtime_threshold < Decimal::ZERO
        || policy.salaried.overtime_threshold < Decimal::ZERO
    {
        return invalid("overtime thresholds must not be negative".to_string());
    }
    if policy.overtime_multiplier < Decimal::ONE {
        return invalid(format!(
            "overtime_multiplier must be at least 1, got {}",
            policy.overtime_multiplier
        ));
    }

    // Covers the annual working hours too
    policy.minimum_salary()?;

    Ok(())
}
