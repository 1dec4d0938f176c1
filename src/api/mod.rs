//! HTTP API module for the Payroll Engine.
//!
//! This module provides the REST API endpoints for paying workers and
//! reading the running totals.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::WorkerRequest;
pub use response::{ApiError, ApiErrorResponse, WorkerSubmissionResponse, format_currency};
pub use state::AppState;
