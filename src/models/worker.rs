//! Worker model and related types.
//!
//! A [`Worker`] is one payroll computation: it is built from raw text,
//! validated, priced, and recorded into a [`PayrollLedger`] in a single
//! call. A worker that fails validation is never recorded.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{
    PayBreakdown, calculate_pay, derive_hourly_rate, validate_hours, validate_rate,
    validate_salary,
};
use crate::config::PayPolicy;
use crate::error::PayrollResult;
use crate::ledger::PayrollLedger;

use super::totals::PayrollTotals;

/// The kind of worker, which decides where the hourly rate comes from and
/// which overtime threshold applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerKind {
    /// Paid an hourly rate entered directly; overtime after 40 hours.
    Hourly,
    /// Paid from an annual salary converted to an hourly rate; overtime
    /// after 44 hours.
    Salaried,
}

/// Where a worker's hourly rate comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RateSource {
    Hourly(Decimal),
    Salary(Decimal),
}

impl RateSource {
    fn parse(kind: WorkerKind, raw: &str, policy: &PayPolicy) -> PayrollResult<Self> {
        match kind {
            WorkerKind::Hourly => validate_rate(raw, policy).map(RateSource::Hourly),
            WorkerKind::Salaried => validate_salary(raw, policy).map(RateSource::Salary),
        }
    }

    fn hourly_rate(&self, policy: &PayPolicy) -> PayrollResult<Decimal> {
        match *self {
            RateSource::Hourly(rate) => Ok(rate),
            RateSource::Salary(salary) => derive_hourly_rate(salary, policy),
        }
    }

    fn salary(&self) -> Option<Decimal> {
        match *self {
            RateSource::Hourly(_) => None,
            RateSource::Salary(salary) => Some(salary),
        }
    }
}

/// A worker whose pay has been calculated and recorded.
///
/// Fields are read-only; a worker never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Worker {
    name: String,
    kind: WorkerKind,
    rate: Decimal,
    hours: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    salary: Option<Decimal>,
    overtime_hours: Decimal,
    pay: Decimal,
}

impl Worker {
    /// Pays an hourly worker and records them in `ledger`.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if `rate` or `hours` is not a decimal number
    /// - `OutOfRange` if `rate` is outside 15..=120 or `hours` outside 0..=336
    ///
    /// On error the ledger is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::ledger::PayrollLedger;
    /// use payroll_engine::models::Worker;
    /// use rust_decimal::Decimal;
    ///
    /// let ledger = PayrollLedger::new();
    /// let worker = Worker::hourly(&ledger, "Ada Lovelace", "20", "45").unwrap();
    ///
    /// assert_eq!(worker.pay(), Decimal::from(950));
    /// assert_eq!(ledger.totals().total_overtime, Decimal::from(5));
    /// ```
    pub fn hourly(
        ledger: &PayrollLedger,
        name: impl Into<String>,
        rate: &str,
        hours: &str,
    ) -> PayrollResult<Self> {
        Self::new(ledger, WorkerKind::Hourly, name, rate, hours)
    }

    /// Pays a salaried worker and records them in `ledger`.
    ///
    /// The hourly rate is `salary / (261 × 7.5)` and is not held to the
    /// hourly rate bounds.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if `salary` or `hours` is not a decimal number
    /// - `OutOfRange` if `salary` is below the minimum salary or `hours`
    ///   is outside 0..=336
    /// - `InvalidConfig` if the ledger's policy overflows the minimum salary
    /// - `CalculationError` if recording the pay would overflow the totals
    ///
    /// On error the ledger is left untouched.
    pub fn salaried(
        ledger: &PayrollLedger,
        name: impl Into<String>,
        salary: &str,
        hours: &str,
    ) -> PayrollResult<Self> {
        Self::new(ledger, WorkerKind::Salaried, name, salary, hours)
    }

    /// Pays a worker of the given kind and records them in `ledger`.
    ///
    /// `amount` is the hourly rate for hourly workers and the annual salary
    /// for salaried workers.
    pub fn new(
        ledger: &PayrollLedger,
        kind: WorkerKind,
        name: impl Into<String>,
        amount: &str,
        hours: &str,
    ) -> PayrollResult<Self> {
        Self::new_with_totals(ledger, kind, name, amount, hours).map(|(worker, _)| worker)
    }

    /// Like [`Worker::new`], also returning the totals snapshot taken in the
    /// same critical section that recorded this worker.
    pub fn new_with_totals(
        ledger: &PayrollLedger,
        kind: WorkerKind,
        name: impl Into<String>,
        amount: &str,
        hours: &str,
    ) -> PayrollResult<(Self, PayrollTotals)> {
        let worker = Self::price(ledger.policy(), kind, name.into(), amount, hours)?;
        let totals = ledger.record(&worker)?;
        Ok((worker, totals))
    }

    fn price(
        policy: &PayPolicy,
        kind: WorkerKind,
        name: String,
        amount: &str,
        hours: &str,
    ) -> PayrollResult<Self> {
        let source = RateSource::parse(kind, amount, policy)?;
        let hours = validate_hours(hours, policy)?;
        let rate = source.hourly_rate(policy)?;

        let PayBreakdown {
            overtime_hours,
            pay,
            ..
        } = calculate_pay(
            rate,
            hours,
            policy.overtime_threshold(kind),
            policy.overtime_multiplier,
        )?;

        Ok(Self {
            name,
            kind,
            rate,
            hours,
            salary: source.salary(),
            overtime_hours,
            pay,
        })
    }

    /// The worker's name, as entered.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the worker is hourly or salaried.
    pub fn kind(&self) -> WorkerKind {
        self.kind
    }

    /// The hourly rate used for pay (derived from the salary for salaried
    /// workers).
    pub fn rate(&self) -> Decimal {
        self.rate
    }

    /// Hours worked.
    pub fn hours(&self) -> Decimal {
        self.hours
    }

    /// The annual salary, for salaried workers.
    pub fn salary(&self) -> Option<Decimal> {
        self.salary
    }

    /// Hours worked beyond the overtime threshold.
    pub fn overtime_hours(&self) -> Decimal {
        self.overtime_hours
    }

    /// The calculated pay.
    pub fn pay(&self) -> Decimal {
        self.pay
    }

    /// Returns true if the worker is salaried.
    pub fn is_salaried(&self) -> bool {
        self.kind == WorkerKind::Salaried
    }
}
