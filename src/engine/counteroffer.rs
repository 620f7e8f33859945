//! Counteroffer search over alternative loan terms.
//!
//! When the requested terms fail affordability, this module searches for
//! the largest principal that would still pass, stretching the term out in
//! six-month steps and bisecting the amount within each candidate term.

use rust_decimal::Decimal;

use crate::config::PolicyConfig;
use crate::engine::payment::monthly_payment;
use crate::error::EngineResult;

/// Spacing between candidate terms, in months.
pub const TERM_STEP_MONTHS: u32 = 6;

/// Bisection iterations per candidate term.
///
/// Forty halvings of a 300,000 interval narrow it below a millionth of a
/// cent, so the converged lower bound is stable well past the two decimal
/// places reported to the caller.
pub const BISECTION_ITERATIONS: u32 = 40;

/// An alternative (term, amount) pair that passes affordability and DTI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counteroffer {
    /// Proposed term in months.
    pub term: u32,
    /// Maximum viable principal, rounded to 2 decimal places.
    pub amount: Decimal,
    /// Monthly payment at the proposed term and amount.
    pub payment: Decimal,
}

/// Searches for the best viable counteroffer.
///
/// Candidate terms run from `initial_term` up to the policy's maximum term
/// in steps of [`TERM_STEP_MONTHS`]. For each term, a fixed-iteration
/// bisection over `[0, min(requested_amount, max_amount)]` converges on the
/// largest principal whose payment stays within the affectation cap and
/// whose total DTI stays within the policy limit (zero or negative income
/// makes every positive amount non-viable). Across terms, the best result
/// only updates on a strictly larger amount, so when two terms tie the
/// shorter one wins.
///
/// Returns `Ok(None)` when no candidate reaches the policy's minimum
/// principal; that is a normal outcome, not an error.
///
/// The search is pure and deterministic: identical inputs converge to the
/// identical tuple, at a bounded cost of at most
/// `terms * BISECTION_ITERATIONS` payment evaluations.
pub fn find_counteroffer(
    income: Decimal,
    debt: Decimal,
    annual_rate: Decimal,
    initial_term: u32,
    requested_amount: Decimal,
    policy: &PolicyConfig,
) -> EngineResult<Option<Counteroffer>> {
    let max_payment = policy.max_affectation * income;

    let mut best_amount = Decimal::ZERO;
    let mut best_term = initial_term;
    let mut best_payment = Decimal::ZERO;

    let mut term = initial_term;
    while term <= policy.max_term {
        let mut lo = Decimal::ZERO;
        let mut hi = requested_amount.min(policy.max_amount);
        let mut viable = false;

        for _ in 0..BISECTION_ITERATIONS {
            let mid = (lo + hi) / Decimal::TWO;
            let payment = monthly_payment(mid, annual_rate, term)?;
            let total_dti = if income > Decimal::ZERO {
                (debt + payment) / income
            } else {
                Decimal::ONE
            };

            if payment <= max_payment && total_dti <= policy.total_dti_max {
                viable = true;
                lo = mid;
            } else {
                hi = mid;
            }
        }

        // lo converged to the supremum viable amount for this term.
        if viable && lo >= policy.min_amount && lo > best_amount {
            best_amount = lo;
            best_term = term;
            best_payment = monthly_payment(best_amount, annual_rate, best_term)?;
        }

        term += TERM_STEP_MONTHS;
    }

    if best_amount >= policy.min_amount {
        Ok(Some(Counteroffer {
            term: best_term,
            amount: best_amount.round_dp(2),
            payment: best_payment,
        }))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_finds_viable_offer_below_requested_amount() {
        // 8,000 income, 3,000 debt at 24%: the 300,000 request is far out of
        // reach, but a smaller loan fits within the caps.
        let policy = PolicyConfig::default();
        let offer = find_counteroffer(
            dec("8000"),
            dec("3000"),
            dec("0.24"),
            12,
            dec("300000"),
            &policy,
        )
        .unwrap()
        .expect("a viable counteroffer exists");

        assert!(offer.amount >= policy.min_amount);
        assert!(offer.amount < dec("300000"));
        assert!(offer.term >= 12 && offer.term <= policy.max_term);
        assert_eq!(offer.term % TERM_STEP_MONTHS, 0);

        // The proposal itself satisfies both caps.
        assert!(offer.payment <= policy.max_affectation * dec("8000"));
        let total_dti = (dec("3000") + offer.payment) / dec("8000");
        assert!(total_dti <= policy.total_dti_max);
    }

    #[test]
    fn test_prefers_largest_viable_amount() {
        let policy = PolicyConfig::default();
        // A modest request the income can almost afford at the initial term.
        let offer = find_counteroffer(
            dec("9000"),
            dec("1500"),
            dec("0.18"),
            12,
            dec("80000"),
            &policy,
        )
        .unwrap()
        .expect("a viable counteroffer exists");

        // Longer terms admit larger principals, so the best offer should
        // land on a later term than the initial one.
        assert!(offer.term > 12);
    }

    #[test]
    fn test_no_offer_when_debt_saturates_dti() {
        // Debt alone exceeds 50% of income, so no positive payment passes.
        let policy = PolicyConfig::default();
        let offer = find_counteroffer(
            dec("8000"),
            dec("4500"),
            dec("0.24"),
            12,
            dec("100000"),
            &policy,
        )
        .unwrap();
        assert_eq!(offer, None);
    }

    #[test]
    fn test_no_offer_when_income_is_zero() {
        let policy = PolicyConfig::default();
        let offer = find_counteroffer(
            Decimal::ZERO,
            Decimal::ZERO,
            dec("0.18"),
            12,
            dec("50000"),
            &policy,
        )
        .unwrap();
        assert_eq!(offer, None);
    }

    #[test]
    fn test_no_offer_when_ceiling_is_below_minimum_amount() {
        // Income supports at most a few thousand, under the 10,000 floor.
        let policy = PolicyConfig::default();
        let offer = find_counteroffer(
            dec("800"),
            Decimal::ZERO,
            dec("0.32"),
            12,
            dec("50000"),
            &policy,
        )
        .unwrap();
        assert_eq!(offer, None);
    }

    #[test]
    fn test_search_is_deterministic() {
        let policy = PolicyConfig::default();
        let run = || {
            find_counteroffer(
                dec("8000"),
                dec("3000"),
                dec("0.24"),
                12,
                dec("300000"),
                &policy,
            )
            .unwrap()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_candidate_terms_include_policy_maximum() {
        // Every extra month admits a larger principal here, so the best
        // offer must land on the 60-month cap (12 + 8 * 6, reachable by
        // the step).
        let policy = PolicyConfig::default();
        let offer = find_counteroffer(
            dec("7500"),
            dec("1500"),
            dec("0.32"),
            12,
            dec("300000"),
            &policy,
        )
        .unwrap()
        .expect("a viable counteroffer exists");

        assert_eq!(offer.term, 60);
        assert!(offer.amount >= policy.min_amount);
    }
}
