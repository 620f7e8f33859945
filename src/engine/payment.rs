//! Amortized monthly payment calculation.
//!
//! This module computes the fixed monthly installment that fully repays a
//! loan's principal plus interest over its term.

use rust_decimal::{Decimal, MathematicalOps};

use crate::error::{EngineError, EngineResult};

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Computes the fixed monthly payment for an amortizing loan.
///
/// Uses the standard amortization formula with monthly rate
/// `i = annual_rate / 12`:
///
/// ```text
/// payment = amount * i * (1 + i)^term / ((1 + i)^term - 1)
/// ```
///
/// When `i <= 0` the loan carries no interest and the payment is the
/// straight-line `amount / term_months`, which also avoids the zero
/// denominator in the formula. The result is rounded to 2 decimal places.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTerm`] for `term_months == 0`. Policy
/// bounds keep real terms at 12 months or more; a zero term is a caller
/// bug, not a rejection.
///
/// # Example
///
/// ```
/// use credit_engine::engine::monthly_payment;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// // 10,000 at 18% over 12 months.
/// let payment = monthly_payment(
///     Decimal::from(10000),
///     Decimal::from_str("0.18").unwrap(),
///     12,
/// )?;
/// assert_eq!(payment, Decimal::from_str("916.80").unwrap());
/// # Ok::<(), credit_engine::error::EngineError>(())
/// ```
pub fn monthly_payment(
    amount: Decimal,
    annual_rate: Decimal,
    term_months: u32,
) -> EngineResult<Decimal> {
    if term_months == 0 {
        return Err(EngineError::InvalidTerm { term: term_months });
    }

    let monthly_rate = annual_rate / MONTHS_PER_YEAR;
    if monthly_rate <= Decimal::ZERO {
        return Ok((amount / Decimal::from(term_months)).round_dp(2));
    }

    let growth = (Decimal::ONE + monthly_rate)
        .checked_powi(i64::from(term_months))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!(
                "compound factor overflow for rate {} over {} months",
                annual_rate, term_months
            ),
        })?;

    // growth > 1 whenever monthly_rate > 0, so the denominator is non-zero.
    let factor = monthly_rate * growth / (growth - Decimal::ONE);
    Ok((amount * factor).round_dp(2))
}
