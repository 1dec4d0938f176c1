//! Error types for the Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while paying workers or loading
//! the pay policy.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifies which raw input a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    /// The hourly pay rate of an hourly worker.
    Rate,
    /// The annual salary of a salaried worker.
    Salary,
    /// The number of hours worked.
    Hours,
}

impl InputField {
    /// Returns the human-readable label used in messages (e.g. "pay rate").
    pub fn label(&self) -> &'static str {
        match self {
            InputField::Rate => "pay rate",
            InputField::Salary => "salary",
            InputField::Hours => "hours worked",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The main error type for the Payroll Engine.
///
/// Validation failures (`InvalidFormat`, `OutOfRange`) are recoverable and
/// are raised before any running total is touched.
///
/// # Example
///
/// ```
/// use payroll_engine::error::{InputField, PayrollError};
///
/// let error = PayrollError::InvalidFormat {
///     field: InputField::Rate,
///     value: "abc".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid pay rate 'abc': not a numeric value");
/// assert!(error.is_validation());
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// The input string is not a valid decimal number.
    #[error("Invalid {field} '{value}': not a numeric value")]
    InvalidFormat {
        /// The input that failed to parse.
        field: InputField,
        /// The raw text that was supplied.
        value: String,
    },

    /// The input parsed but lies outside its allowed bounds.
    #[error("{field} {value} is out of range: {}", describe_bounds(.minimum, .maximum))]
    OutOfRange {
        /// The input that was out of range.
        field: InputField,
        /// The parsed value.
        value: Decimal,
        /// The inclusive lower bound.
        minimum: Decimal,
        /// The inclusive upper bound, if any.
        maximum: Option<Decimal>,
    },

    /// A pay calculation could not be represented (decimal overflow).
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but its values are inconsistent.
    #[error("Invalid pay policy: {message}")]
    InvalidConfig {
        /// What was wrong with the policy.
        message: String,
    },
}

fn describe_bounds(minimum: &Decimal, maximum: &Option<Decimal>) -> String {
    match maximum {
        Some(maximum) => format!(
            "expected between {} and {}",
            minimum.normalize(),
            maximum.normalize()
        ),
        None => format!("expected at least {}", minimum.normalize()),
    }
}

impl PayrollError {
    /// Returns true for errors caused by worker input rather than the
    /// engine or its configuration.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PayrollError::InvalidFormat { .. }
                | PayrollError::OutOfRange { .. }
                | PayrollError::CalculationError { .. }
        )
    }

    /// Returns the input field the error refers to, if any.
    pub fn field(&self) -> Option<InputField> {
        match self {
            PayrollError::InvalidFormat { field, .. } | PayrollError::OutOfRange { field, .. } => {
                Some(*field)
            }
            _ => None,
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_invalid_format_displays_field_and_value() {
        let error = PayrollError::InvalidFormat {
            field: InputField::Hours,
            value: "ten".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid hours worked 'ten': not a numeric value"
        );
    }

    #[test]
    fn test_out_of_range_displays_both_bounds() {
        let error = PayrollError::OutOfRange {
            field: InputField::Rate,
            value: dec("10"),
            minimum: dec("15"),
            maximum: Some(dec("120")),
        };
        assert_eq!(
            error.to_string(),
            "pay rate 10 is out of range: expected between 15 and 120"
        );
    }

    #[test]
    fn test_out_of_range_without_maximum() {
        let error = PayrollError::OutOfRange {
            field: InputField::Salary,
            value: dec("20000"),
            minimum: dec("29362.50"),
            maximum: None,
        };
        assert_eq!(
            error.to_string(),
            "salary 20000 is out of range: expected at least 29362.5"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = PayrollError::ConfigNotFound {
            path: "/missing/policy.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/policy.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = PayrollError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_validation_classification() {
        let format = PayrollError::InvalidFormat {
            field: InputField::Rate,
            value: "x".to_string(),
        };
        let config = PayrollError::InvalidConfig {
            message: "bad".to_string(),
        };
        assert!(format.is_validation());
        assert_eq!(format.field(), Some(InputField::Rate));
        assert!(!config.is_validation());
        assert_eq!(config.field(), None);
    }

    #[test]
    fn test_input_field_serialization() {
        assert_eq!(
            serde_json::to_string(&InputField::Hours).unwrap(),
            "\"hours\""
        );
        assert_eq!(
            serde_json::to_string(&InputField::Salary).unwrap(),
            "\"salary\""
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PayrollError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> PayrollResult<()> {
            Err(PayrollError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> PayrollResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
