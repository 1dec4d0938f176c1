//! Running payroll totals.
//!
//! The [`PayrollLedger`] owns the totals shared by every worker paid through
//! it, together with the pay policy those workers are validated against.
//! The hosting service creates one ledger and passes a reference into each
//! worker constructor. Totals only grow; there is no removal or reset.

use parking_lot::Mutex;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PayPolicy;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{PayrollTotals, Worker};

#[derive(Debug, Clone, Copy, Default)]
struct RunningTotals {
    workers: u64,
    hours: Decimal,
    overtime: Decimal,
    pay: Decimal,
}

impl RunningTotals {
    /// Returns the totals with `worker` added, or `None` on overflow.
    fn with(&self, worker: &Worker) -> Option<Self> {
        Some(Self {
            workers: self.workers.checked_add(1)?,
            hours: self.hours.checked_add(worker.hours())?,
            overtime: self.overtime.checked_add(worker.overtime_hours())?,
            pay: self.pay.checked_add(worker.pay())?,
        })
    }

    fn snapshot(&self) -> PayrollTotals {
        PayrollTotals::new(self.workers, self.hours, self.overtime, self.pay)
    }
}

/// Process-wide running totals for paid workers.
///
/// All four counters sit behind one mutex, so recording a worker and taking
/// a snapshot are each a single critical section and concurrent callers can
/// never lose updates or observe a half-recorded worker.
///
/// # Example
///
/// ```
/// use payroll_engine::ledger::PayrollLedger;
/// use payroll_engine::models::Worker;
/// use rust_decimal::Decimal;
///
/// let ledger = PayrollLedger::new();
/// assert_eq!(ledger.totals().total_workers, 0);
///
/// Worker::hourly(&ledger, "Ada", "20", "45").unwrap();
/// assert!(Worker::hourly(&ledger, "Bob", "abc", "10").is_err());
///
/// let totals = ledger.totals();
/// assert_eq!(totals.total_workers, 1);
/// assert_eq!(totals.average_pay, Decimal::from(950));
/// ```
#[derive(Debug, Default)]
pub struct PayrollLedger {
    policy: PayPolicy,
    totals: Mutex<RunningTotals>,
}

impl PayrollLedger {
    /// Creates an empty ledger using the default pay policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty ledger using the given pay policy.
    pub fn with_policy(policy: PayPolicy) -> Self {
        Self {
            policy,
            totals: Mutex::new(RunningTotals::default()),
        }
    }

    /// The pay policy workers are validated and priced against.
    pub fn policy(&self) -> &PayPolicy {
        &self.policy
    }

    /// Returns a snapshot of the running totals.
    pub fn totals(&self) -> PayrollTotals {
        self.totals.lock().snapshot()
    }

    /// Adds a priced worker to the totals and returns the snapshot taken
    /// immediately after. Either every counter is updated or none is.
    pub(crate) fn record(&self, worker: &Worker) -> PayrollResult<PayrollTotals> {
        let mut totals = self.totals.lock();

        let updated = totals
            .with(worker)
            .ok_or_else(|| PayrollError::CalculationError {
                message: "running totals exceed the representable range".to_string(),
            })?;
        *totals = updated;

        debug!(
            kind = ?worker.kind(),
            pay = %worker.pay(),
            hours = %worker.hours(),
            overtime_hours = %worker.overtime_hours(),
            total_workers = updated.workers,
            "Recorded worker"
        );

        Ok(updated.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkerKind;
    use std::str::FromStr;
    use std::sync::Arc;
    use std::thread;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let totals = PayrollLedger::new().totals();

        assert_eq!(totals, PayrollTotals::default());
        assert_eq!(totals.average_pay, Decimal::ZERO);
    }

    #[test]
    fn test_successful_workers_accumulate() {
        let ledger = PayrollLedger::new();

        Worker::hourly(&ledger, "A", "20", "45").unwrap();
        Worker::hourly(&ledger, "B", "30", "10").unwrap();

        let totals = ledger.totals();
        assert_eq!(totals.total_workers, 2);
        assert_eq!(totals.total_hours, dec("55"));
        assert_eq!(totals.total_overtime, dec("5"));
        assert_eq!(totals.total_pay, dec("1250"));
        assert_eq!(totals.average_pay, dec("625"));
    }

    #[test]
    fn test_overtime_only_grows_past_threshold() {
        let ledger = PayrollLedger::new();

        Worker::hourly(&ledger, "A", "20", "40").unwrap();
        assert_eq!(ledger.totals().total_overtime, Decimal::ZERO);

        Worker::salaried(&ledger, "B", "40000", "44").unwrap();
        assert_eq!(ledger.totals().total_overtime, Decimal::ZERO);

        Worker::salaried(&ledger, "C", "40000", "46.5").unwrap();
        assert_eq!(ledger.totals().total_overtime, dec("2.5"));
    }

    #[test]
    fn test_failed_workers_leave_totals_unchanged() {
        let ledger = PayrollLedger::new();
        Worker::hourly(&ledger, "A", "20", "45").unwrap();
        let before = ledger.totals();

        for _ in 0..5 {
            assert!(Worker::hourly(&ledger, "B", "abc", "10").is_err());
            assert!(Worker::hourly(&ledger, "B", "10", "10").is_err());
            assert!(Worker::hourly(&ledger, "B", "20", "400").is_err());
            assert!(Worker::salaried(&ledger, "B", "20000", "10").is_err());
        }

        assert_eq!(ledger.totals(), before);
    }

    #[test]
    fn test_overflowing_totals_are_not_recorded() {
        let ledger = PayrollLedger::new();
        let huge_salary = Decimal::MAX.to_string();

        // Each of these is paid roughly a quarter of the largest representable decimal.
        for _ in 0..4 {
            Worker::salaried(&ledger, "Rich", &huge_salary, "336").unwrap();
        }
        let before = ledger.totals();

        let result = Worker::salaried(&ledger, "Rich", &huge_salary, "336");

        assert!(matches!(result, Err(PayrollError::CalculationError { .. })));
        assert_eq!(ledger.totals(), before);
        assert_eq!(before.total_workers, 4);
    }

    #[test]
    fn test_record_returns_snapshot_after_update() {
        let ledger = PayrollLedger::new();
        let worker = Worker::hourly(&ledger, "A", "20", "10").unwrap();

        let snapshot = ledger.record(&worker).unwrap();
        assert_eq!(snapshot.total_workers, 2);
        assert_eq!(snapshot, ledger.totals());
    }

    #[test]
    fn test_ledger_uses_its_policy() {
        let mut policy = PayPolicy::default();
        policy.hourly.overtime_threshold = dec("35");
        let ledger = PayrollLedger::with_policy(policy);

        let worker = Worker::new(&ledger, WorkerKind::Hourly, "A", "20", "40").unwrap();
        assert_eq!(worker.overtime_hours(), dec("5"));
        assert_eq!(worker.pay(), dec("850"));
    }

    #[test]
    fn test_concurrent_recording_loses_no_updates() {
        let ledger = Arc::new(PayrollLedger::new());
        let threads = 8;
        let per_thread = 250;

        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let ledger = Arc::clone(&ledger);
                thread::spawn(move || {
                    let mut paid = Decimal::ZERO;
                    for _ in 0..per_thread {
                        paid += Worker::hourly(&ledger, "T", "20", "45").unwrap().pay();
                    }
                    paid
                })
            })
            .collect();

        let expected_pay: Decimal = handles.into_iter().map(|h| h.join().unwrap()).sum();
        let totals = ledger.totals();

        assert_eq!(totals.total_workers, (threads * per_thread) as u64);
        assert_eq!(totals.total_pay, expected_pay);
        assert_eq!(totals.total_overtime, dec("5") * Decimal::from(threads * per_thread));
    }
}
