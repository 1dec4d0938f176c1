//! Pay calculation functionality.
//!
//! One routine serves both kinds of worker: regular time up to an overtime
//! threshold, then the overtime multiplier for every hour beyond it. The
//! kinds differ only in the threshold and in where the hourly rate comes
//! from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// The result of pricing one worker's hours.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_pay;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let breakdown = calculate_pay(dec("20"), dec("45"), dec("40"), dec("1.5")).unwrap();
///
/// assert_eq!(breakdown.pay, dec("950"));
/// assert_eq!(breakdown.overtime_hours, dec("5"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// Hours paid at the plain rate (capped at the threshold).
    pub regular_hours: Decimal,
    /// Hours beyond the threshold.
    pub overtime_hours: Decimal,
    /// Pay for the regular hours.
    pub regular_pay: Decimal,
    /// Pay for the overtime hours.
    pub overtime_pay: Decimal,
    /// Total pay (`regular_pay + overtime_pay`).
    pub pay: Decimal,
}

/// Calculates pay for `hours` worked at `rate`.
///
/// If `hours > threshold`:
/// `pay = rate × threshold + rate × multiplier × (hours − threshold)`,
/// otherwise `pay = rate × hours`. Working exactly the threshold is not
/// overtime.
///
/// # Errors
///
/// Returns `CalculationError` if the result does not fit in a `Decimal`
/// (only reachable with an extreme derived rate).
pub fn calculate_pay(
    rate: Decimal,
    hours: Decimal,
    threshold: Decimal,
    multiplier: Decimal,
) -> PayrollResult<PayBreakdown> {
    let overflow = || PayrollError::CalculationError {
        message: format!("pay for {} hours at {} exceeds the representable range", hours, rate),
    };

    if hours > threshold {
        let overtime_hours = hours - threshold;
        let regular_pay = rate.checked_mul(threshold).ok_or_else(overflow)?;
        let overtime_pay = rate
            .checked_mul(multiplier)
            .and_then(|loaded| loaded.checked_mul(overtime_hours))
            .ok_or_else(overflow)?;
        let pay = regular_pay.checked_add(overtime_pay).ok_or_else(overflow)?;

        Ok(PayBreakdown {
            regular_hours: threshold,
            overtime_hours,
            regular_pay,
            overtime_pay,
            pay,
        })
    } else {
        let pay = rate.checked_mul(hours).ok_or_else(overflow)?;

        Ok(PayBreakdown {
            regular_hours: hours,
            overtime_hours: Decimal::ZERO,
            regular_pay: pay,
            overtime_pay: Decimal::ZERO,
            pay,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn hourly(rate: &str, hours: &str) -> PayBreakdown {
        calculate_pay(dec(rate), dec(hours), dec("40"), dec("1.5")).unwrap()
    }

    #[test]
    fn test_under_threshold_is_rate_times_hours() {
        let result = hourly("20", "30");

        assert_eq!(result.pay, dec("600"));
        assert_eq!(result.regular_hours, dec("30"));
        assert_eq!(result.overtime_hours, Decimal::ZERO);
        assert_eq!(result.overtime_pay, Decimal::ZERO);
    }

    #[test]
    fn test_exactly_threshold_has_no_overtime() {
        let result = hourly("20", "40");

        assert_eq!(result.pay, dec("800"));
        assert_eq!(result.overtime_hours, Decimal::ZERO);
    }

    #[test]
    fn test_45_hours_at_20_pays_950() {
        let result = hourly("20", "45");

        assert_eq!(result.regular_pay, dec("800"));
        assert_eq!(result.overtime_pay, dec("150"));
        assert_eq!(result.pay, dec("950"));
        assert_eq!(result.overtime_hours, dec("5"));
        assert_eq!(result.regular_hours, dec("40"));
    }

    #[test]
    fn test_fractional_overtime() {
        // 40 × 18.50 + 18.50 × 1.5 × 0.25 = 740 + 6.9375
        let result = hourly("18.50", "40.25");

        assert_eq!(result.pay, dec("746.9375"));
        assert_eq!(result.overtime_hours, dec("0.25"));
    }

    #[test]
    fn test_zero_hours_pays_nothing() {
        let result = hourly("120", "0");
        assert_eq!(result.pay, Decimal::ZERO);
    }

    #[test]
    fn test_salaried_threshold_of_44() {
        let result = calculate_pay(dec("20"), dec("44"), dec("44"), dec("1.5")).unwrap();
        assert_eq!(result.pay, dec("880"));
        assert_eq!(result.overtime_hours, Decimal::ZERO);

        let result = calculate_pay(dec("20"), dec("50"), dec("44"), dec("1.5")).unwrap();
        assert_eq!(result.pay, dec("1060"));
        assert_eq!(result.overtime_hours, dec("6"));
    }

    #[test]
    fn test_maximum_hours_at_maximum_rate() {
        // 120 × 40 + 120 × 1.5 × 296
        let result = hourly("120", "336");
        assert_eq!(result.pay, dec("58080"));
    }

    #[test]
    fn test_overflow_is_an_error() {
        let result = calculate_pay(Decimal::MAX, dec("100"), dec("40"), dec("1.5"));

        match result {
            Err(PayrollError::CalculationError { message }) => {
                assert!(message.contains("exceeds"));
            }
            other => panic!("Expected CalculationError, got {:?}", other),
        }
    }
}
