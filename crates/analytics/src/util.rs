//! Checked decimal arithmetic shared by the calculators.
//!
//! `Decimal` panics on division by zero and on overflow, so every operation on
//! user-supplied values goes through these helpers and surfaces an
//! `AnalyticsError` naming the metric being computed.

use crate::error::AnalyticsError;
use rust_decimal::Decimal;

pub(crate) fn div(
    numerator: Decimal,
    denominator: Decimal,
    metric: &str,
) -> Result<Decimal, AnalyticsError> {
    if denominator.is_zero() {
        tracing::warn!(metric, %numerator, "Rejected division by zero");
        return Err(AnalyticsError::DivisionByZero(metric.to_string()));
    }
    numerator
        .checked_div(denominator)
        .ok_or_else(|| AnalyticsError::Overflow(metric.to_string()))
}

pub(crate) fn mul(lhs: Decimal, rhs: Decimal, metric: &str) -> Result<Decimal, AnalyticsError> {
    lhs.checked_mul(rhs)
        .ok_or_else(|| AnalyticsError::Overflow(metric.to_string()))
}

pub(crate) fn sub(lhs: Decimal, rhs: Decimal, metric: &str) -> Result<Decimal, AnalyticsError> {
    lhs.checked_sub(rhs)
        .ok_or_else(|| AnalyticsError::Overflow(metric.to_string()))
}

/// `part / whole * 100`.
pub(crate) fn percent(
    part: Decimal,
    whole: Decimal,
    metric: &str,
) -> Result<Decimal, AnalyticsError> {
    mul(div(part, whole, metric)?, Decimal::ONE_HUNDRED, metric)
}

/// Turns a percentage into a fraction (`70` -> `0.7`).
pub(crate) fn fraction(pct: Decimal) -> Decimal {
    pct / Decimal::ONE_HUNDRED
}

pub(crate) fn ensure_non_negative(
    field: &'static str,
    value: Decimal,
) -> Result<(), AnalyticsError> {
    if value < Decimal::ZERO {
        return Err(AnalyticsError::NegativeInput { field, value });
    }
    Ok(())
}

pub(crate) fn ensure_percent(field: &'static str, value: Decimal) -> Result<(), AnalyticsError> {
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(AnalyticsError::PercentOutOfRange { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_div_by_zero_names_metric() {
        let err = div(dec!(10), Decimal::ZERO, "total_cac").unwrap_err();
        assert_eq!(err, AnalyticsError::DivisionByZero("total_cac".to_string()));
    }

    #[test]
    fn test_mul_overflow_is_reported() {
        let err = mul(Decimal::MAX, dec!(2), "revenue").unwrap_err();
        assert_eq!(err, AnalyticsError::Overflow("revenue".to_string()));
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(dec!(1), dec!(4), "share").unwrap(), dec!(25));
    }

    #[test]
    fn test_negative_zero_is_accepted() {
        assert!(ensure_non_negative("fixed_costs", dec!(-0)).is_ok());
        assert!(ensure_non_negative("fixed_costs", dec!(-0.01)).is_err());
    }

    #[test]
    fn test_percent_bounds_are_inclusive() {
        assert!(ensure_percent("attribution", dec!(0)).is_ok());
        assert!(ensure_percent("attribution", dec!(100)).is_ok());
        assert!(ensure_percent("attribution", dec!(100.1)).is_err());
    }
}
