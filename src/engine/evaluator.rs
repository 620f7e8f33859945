//! Application evaluation.
//!
//! This module orchestrates the engine's components into a final decision:
//! basic validation and rate eligibility first (failing fast to a
//! rejection), then the payment and DTI checks, then the counteroffer
//! search when the requested terms are unaffordable.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::PolicyConfig;
use crate::engine::counteroffer::find_counteroffer;
use crate::engine::payment::monthly_payment;
use crate::engine::rate::rate_for_score;
use crate::engine::validator::validate;
use crate::error::EngineResult;
use crate::models::{Application, Decision, Evaluation, MetricValue};

/// Generates the short opaque reference attached to every evaluation.
fn new_reference() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_uppercase()
}

/// Divides debt by income, treating zero or negative income as 100%.
fn dti_ratio(debt: Decimal, income: Decimal) -> Decimal {
    if income > Decimal::ZERO {
        debt / income
    } else {
        Decimal::ONE
    }
}

/// Evaluates a loan application against the policy.
///
/// Runs the decision pipeline:
///
/// 1. Basic validation and rate eligibility. Both are checked before
///    branching so a rejection reports every reason at once; any failure
///    rejects with empty details, before any payment math.
/// 2. Payment and DTI computation at the requested amount and term.
/// 3. Rejection when pre-existing debt already exceeds the current DTI cap.
/// 4. Counteroffer search when the payment breaks the affectation cap or
///    the total DTI cap; a viable proposal becomes a counteroffer, an
///    exhausted search a rejection.
/// 5. Approval otherwise.
///
/// Policy violations are folded into the returned [`Evaluation`]; only
/// contract violations (out-of-domain score, zero term) surface as errors.
///
/// # Example
///
/// ```
/// use credit_engine::config::PolicyConfig;
/// use credit_engine::engine::evaluate;
/// use credit_engine::models::{Application, Decision, EmploymentType};
/// use rust_decimal::Decimal;
///
/// let application = Application {
///     name: "Ana".to_string(),
///     age: 30,
///     monthly_income: Decimal::from(7500),
///     monthly_debt: Decimal::ZERO,
///     employment_type: EmploymentType::Employee,
///     months_of_experience: 6,
///     credit_score: 750,
///     amount: Decimal::from(10000),
///     term: 12,
///     active_defaults: false,
/// };
///
/// let evaluation = evaluate(&application, &PolicyConfig::default())?;
/// assert_eq!(evaluation.decision, Decision::Approved);
/// # Ok::<(), credit_engine::error::EngineError>(())
/// ```
pub fn evaluate(application: &Application, policy: &PolicyConfig) -> EngineResult<Evaluation> {
    let reference = new_reference();
    let mut reasons = Vec::new();

    let report = validate(application, policy);
    if !report.ok {
        reasons.extend(report.reasons);
    }

    let rate = rate_for_score(application.credit_score)?;
    if rate.is_none() {
        reasons.push("Credit score below minimum threshold (600)".to_string());
    }

    // Basic failures and score ineligibility reject together, before any
    // payment math.
    let Some(rate) = rate else {
        return Ok(Evaluation {
            reference,
            decision: Decision::Rejected,
            reasons,
            details: BTreeMap::new(),
        });
    };
    if !reasons.is_empty() {
        return Ok(Evaluation {
            reference,
            decision: Decision::Rejected,
            reasons,
            details: BTreeMap::new(),
        });
    }

    let payment = monthly_payment(application.amount, rate, application.term)?;
    let current_dti = dti_ratio(application.monthly_debt, application.monthly_income);
    let total_dti = dti_ratio(
        application.monthly_debt + payment,
        application.monthly_income,
    );

    if current_dti > policy.current_dti_max {
        reasons.push("Current DTI exceeds 40%".to_string());
        return Ok(Evaluation {
            reference,
            decision: Decision::Rejected,
            reasons,
            details: BTreeMap::from([
                ("annual_rate".to_string(), MetricValue::from(rate)),
                ("monthly_payment".to_string(), MetricValue::from(payment)),
                (
                    "current_dti".to_string(),
                    MetricValue::from(current_dti.round_dp(4)),
                ),
                (
                    "total_dti".to_string(),
                    MetricValue::from(total_dti.round_dp(4)),
                ),
            ]),
        });
    }

    let unaffordable = payment > policy.max_affectation * application.monthly_income
        || total_dti > policy.total_dti_max;
    if unaffordable {
        let proposal = find_counteroffer(
            application.monthly_income,
            application.monthly_debt,
            rate,
            application.term,
            application.amount,
            policy,
        )?;

        return Ok(match proposal {
            Some(offer) => Evaluation {
                reference,
                decision: Decision::Counteroffer,
                reasons: vec!["Terms adjustment required".to_string()],
                details: BTreeMap::from([
                    ("annual_rate".to_string(), MetricValue::from(rate)),
                    ("proposed_term".to_string(), MetricValue::from(offer.term)),
                    (
                        "maximum_amount".to_string(),
                        MetricValue::from(offer.amount),
                    ),
                    (
                        "estimated_payment".to_string(),
                        MetricValue::from(offer.payment),
                    ),
                ]),
            },
            None => {
                reasons.push(
                    "Unable to find viable counteroffer within DTI/affordability limits"
                        .to_string(),
                );
                Evaluation {
                    reference,
                    decision: Decision::Rejected,
                    reasons,
                    details: BTreeMap::from([
                        ("annual_rate".to_string(), MetricValue::from(rate)),
                        ("monthly_payment".to_string(), MetricValue::from(payment)),
                        (
                            "total_dti".to_string(),
                            MetricValue::from(total_dti.round_dp(4)),
                        ),
                    ]),
                }
            }
        });
    }

    Ok(Evaluation {
        reference,
        decision: Decision::Approved,
        reasons: Vec::new(),
        details: BTreeMap::from([
            ("annual_rate".to_string(), MetricValue::from(rate)),
            ("monthly_payment".to_string(), MetricValue::from(payment)),
            (
                "current_dti".to_string(),
                MetricValue::from(current_dti.round_dp(4)),
            ),
            (
                "total_dti".to_string(),
                MetricValue::from(total_dti.round_dp(4)),
            ),
        ]),
    })
}
