//! Application state for the Payroll Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::ledger::PayrollLedger;

/// Shared application state.
///
/// Holds the one ledger every request records into, so the running totals
/// cover all workers paid through this service instance.
#[derive(Clone)]
pub struct AppState {
    /// The ledger holding the running totals and pay policy.
    ledger: Arc<PayrollLedger>,
}

impl AppState {
    /// Creates a new application state owning the given ledger.
    pub fn new(ledger: PayrollLedger) -> Self {
        Self {
            ledger: Arc::new(ledger),
        }
    }

    /// Returns a reference to the ledger.
    pub fn ledger(&self) -> &PayrollLedger {
        &self.ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Worker;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_one_ledger() {
        let state = AppState::new(PayrollLedger::new());
        let clone = state.clone();

        Worker::hourly(clone.ledger(), "Ada", "20", "10").unwrap();

        assert_eq!(state.ledger().totals().total_workers, 1);
    }
}
