//! Response types for the Payroll Engine API.
//!
//! This module defines the success and error response structures and maps
//! engine errors to the messages shown to whoever entered the worker.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{InputField, PayrollError};
use crate::models::{PayrollTotals, Worker};

/// Response body for a worker that was paid and recorded.
#[derive(Debug, Clone, Serialize)]
pub struct WorkerSubmissionResponse {
    /// Identifier of this submission (also the request's correlation ID).
    pub submission_id: Uuid,
    /// When the worker was recorded.
    pub processed_at: DateTime<Utc>,
    /// The paid worker.
    pub worker: Worker,
    /// The running totals after this worker.
    pub totals: PayrollTotals,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// The unchanged running totals, so a rejected entry still shows them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totals: Option<PayrollTotals>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            totals: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            details: Some(details.into()),
            ..Self::new(code, message)
        }
    }

    /// Attaches the current running totals.
    pub fn with_totals(mut self, totals: PayrollTotals) -> Self {
        self.totals = Some(totals);
        self
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PayrollError> for ApiErrorResponse {
    fn from(error: PayrollError) -> Self {
        let details = error.to_string();
        match error {
            PayrollError::InvalidFormat { field, .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "INVALID_FORMAT",
                    format!(
                        "Entry Error! Please enter the worker's {} as a numeric value.",
                        field
                    ),
                    details,
                ),
            },
            PayrollError::OutOfRange {
                field,
                minimum,
                maximum,
                ..
            } => {
                let bounds = match maximum {
                    Some(maximum) => format!(
                        "between {} and {}",
                        format_bound(field, minimum),
                        format_bound(field, maximum)
                    ),
                    None => format!("of at least {}", format_bound(field, minimum)),
                };
                ApiErrorResponse {
                    status: StatusCode::UNPROCESSABLE_ENTITY,
                    error: ApiError::with_details(
                        "OUT_OF_RANGE",
                        format!(
                            "Entry Out-of-Range! Please enter the worker's {} {}.",
                            field, bounds
                        ),
                        details,
                    ),
                }
            }
            PayrollError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "CALCULATION_ERROR",
                    "Entry Out-of-Range! The pay for this worker cannot be recorded.",
                    message,
                ),
            },
            PayrollError::ConfigNotFound { .. }
            | PayrollError::ConfigParseError { .. }
            | PayrollError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", details),
            },
        }
    }
}

fn format_bound(field: InputField, value: Decimal) -> String {
    match field {
        InputField::Rate | InputField::Salary => format_currency(value),
        InputField::Hours => value.normalize().to_string(),
    }
}

/// Formats an amount as dollars with two decimals and thousands separators.
///
/// # Example
///
/// ```
/// use payroll_engine::api::format_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_currency(Decimal::from_str("29362.5").unwrap()), "$29,362.50");
/// assert_eq!(format_currency(Decimal::from(15)), "$15.00");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}${}.{}", sign, grouped, cents)
}
