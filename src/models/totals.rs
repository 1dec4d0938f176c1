//! Running totals snapshot.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A consistent snapshot of the running totals across every worker paid
/// through one ledger.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollTotals;
/// use rust_decimal::Decimal;
///
/// let totals = PayrollTotals::new(2, Decimal::from(85), Decimal::from(5), Decimal::from(1900));
/// assert_eq!(totals.average_pay, Decimal::from(950));
///
/// assert_eq!(PayrollTotals::default().average_pay, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Number of workers paid.
    pub total_workers: u64,
    /// Hours worked across all workers.
    pub total_hours: Decimal,
    /// Overtime hours across all workers.
    pub total_overtime: Decimal,
    /// Pay across all workers.
    pub total_pay: Decimal,
    /// `total_pay / total_workers`, or zero when no worker has been paid.
    pub average_pay: Decimal,
}

impl PayrollTotals {
    /// Builds a snapshot, deriving the average pay.
    pub fn new(
        total_workers: u64,
        total_hours: Decimal,
        total_overtime: Decimal,
        total_pay: Decimal,
    ) -> Self {
        let average_pay = if total_workers == 0 {
            Decimal::ZERO
        } else {
            total_pay / Decimal::from(total_workers)
        };

        Self {
            total_workers,
            total_hours,
            total_overtime,
            total_pay,
            average_pay,
        }
    }
}
