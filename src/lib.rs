//! Payroll engine for hourly and salaried workers.
//!
//! This crate validates a worker's pay rate (or annual salary) and hours,
//! computes their pay with time-and-a-half overtime, and folds every
//! successfully paid worker into running totals held by a
//! [`ledger::PayrollLedger`]. An HTTP API over the same engine lives in
//! [`api`].

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
