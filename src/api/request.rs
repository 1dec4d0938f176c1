//! Request types for the Payroll Engine API.
//!
//! This module defines the JSON request structure for the `/workers`
//! endpoint.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::WorkerKind;

use super::response::ApiError;

/// Request body for the `/workers` endpoint.
///
/// `rate` and `hours` are kept as raw text so the engine can tell a
/// non-numeric entry apart from an out-of-range one. JSON numbers are
/// accepted and forwarded as their text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerRequest {
    /// The worker's first name.
    pub first_name: String,
    /// The worker's last name.
    pub last_name: String,
    /// Whether the worker is hourly or salaried.
    pub worker_type: WorkerKind,
    /// The hourly pay rate for hourly workers, or the annual salary for
    /// salaried workers.
    #[serde(deserialize_with = "raw_input")]
    pub rate: String,
    /// The hours worked.
    #[serde(deserialize_with = "raw_input")]
    pub hours: String,
}

impl WorkerRequest {
    /// Returns the worker's full name, or a validation error if either part
    /// is blank.
    pub fn full_name(&self) -> Result<String, ApiError> {
        let first = self.first_name.trim();
        let last = self.last_name.trim();

        if first.is_empty() {
            return Err(ApiError::validation_error("The worker must have a first name"));
        }
        if last.is_empty() {
            return Err(ApiError::validation_error("The worker must have a last name"));
        }

        Ok(format!("{} {}", first, last))
    }
}

fn raw_input<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        other => Err(de::Error::custom(format!(
            "expected a string or number, found {}",
            other
        ))),
    }
}
