//! Score-to-rate mapping.
//!
//! This module maps a bureau credit score onto an annual interest rate
//! tier, or signals that the score is ineligible for any rate.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Lowest score the bureau domain admits.
pub const MIN_CREDIT_SCORE: u16 = 300;

/// Highest score the bureau domain admits.
pub const MAX_CREDIT_SCORE: u16 = 850;

/// Lowest score eligible for any rate tier.
pub const MIN_ELIGIBLE_SCORE: u16 = 600;

/// Maps a credit score to an annual interest rate tier.
///
/// Tiers are checked top-down with inclusive lower bounds: 720 and above
/// earns 18%, 660 and above 24%, 600 and above 32%. Scores below 600 are
/// ineligible and return `Ok(None)` — deliberately distinct from a 0% rate,
/// which would be a valid `Some` value.
///
/// # Errors
///
/// Returns [`EngineError::InvalidScore`] for scores outside [300, 850];
/// those are caller bugs, not rejections.
///
/// # Example
///
/// ```
/// use credit_engine::engine::rate_for_score;
/// use rust_decimal::Decimal;
///
/// assert_eq!(rate_for_score(750)?, Some(Decimal::new(18, 2)));
/// assert_eq!(rate_for_score(550)?, None);
/// assert!(rate_for_score(900).is_err());
/// # Ok::<(), credit_engine::error::EngineError>(())
/// ```
pub fn rate_for_score(score: u16) -> EngineResult<Option<Decimal>> {
    if !(MIN_CREDIT_SCORE..=MAX_CREDIT_SCORE).contains(&score) {
        return Err(EngineError::InvalidScore { score });
    }

    if score < MIN_ELIGIBLE_SCORE {
        return Ok(None);
    }
    if score >= 720 {
        return Ok(Some(Decimal::new(18, 2)));
    }
    if score >= 660 {
        return Ok(Some(Decimal::new(24, 2)));
    }
    Ok(Some(Decimal::new(32, 2)))
}
