//! Core data models for the Payroll Engine.
//!
//! This module contains the worker entity and the running totals snapshot.

mod totals;
mod worker;

pub use totals::PayrollTotals;
pub use worker::{Worker, WorkerKind};
