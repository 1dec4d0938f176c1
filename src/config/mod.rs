//! Configuration loading and management for the Payroll Engine.
//!
//! This module provides the pay policy (rate, salary and hours bounds,
//! overtime thresholds and multiplier) and loads overrides from YAML.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll").unwrap();
//! println!("Maximum hours: {}", config.policy().hours.maximum);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, POLICY_FILE_NAME};
pub use types::{
    DEFAULT_ANNUAL_WORKING_DAYS, DEFAULT_DAILY_WORKING_HOURS, DEFAULT_HOURLY_OVERTIME_THRESHOLD,
    DEFAULT_MAXIMUM_HOURS, DEFAULT_MAXIMUM_RATE, DEFAULT_MINIMUM_HOURS, DEFAULT_MINIMUM_RATE,
    DEFAULT_OVERTIME_MULTIPLIER, DEFAULT_SALARIED_OVERTIME_THRESHOLD, HourlyPolicy, HoursPolicy,
    PayPolicy, SalariedPolicy,
};
