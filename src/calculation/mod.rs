//! Calculation logic for the Payroll Engine.
//!
//! This module contains the input validation functions (rate, salary and
//! hours parsing with bounds checks, salary to hourly rate conversion) and
//! the pay calculation shared by hourly and salaried workers.

mod pay;
mod validation;

pub use pay::{PayBreakdown, calculate_pay};
pub use validation::{
    derive_hourly_rate, parse_decimal, validate_hours, validate_rate, validate_salary,
};
