//! Request types for the Credit Pre-evaluation Engine API.
//!
//! This module defines the JSON request structure for the
//! `/api/v1/evaluate` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Application, EmploymentType};

/// Request body for the `/api/v1/evaluate` endpoint.
///
/// Mirrors [`Application`] field for field. `employment_type` accepts only
/// the canonical `"EMPLOYEE"` and `"SELF_EMPLOYED"` values; anything else
/// is rejected at deserialization, before the engine runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// Applicant's full name.
    pub name: String,
    /// Applicant's age in years.
    pub age: u32,
    /// Monthly income.
    pub monthly_income: Decimal,
    /// Current monthly debt obligations.
    pub monthly_debt: Decimal,
    /// Employment arrangement.
    pub employment_type: EmploymentType,
    /// Months of work experience.
    pub months_of_experience: u32,
    /// Bureau credit score.
    pub credit_score: u16,
    /// Requested principal.
    pub amount: Decimal,
    /// Requested term in months.
    pub term: u32,
    /// Whether the applicant has active payment defaults.
    pub active_defaults: bool,
}

impl From<EvaluationRequest> for Application {
    fn from(req: EvaluationRequest) -> Self {
        Application {
            name: req.name,
            age: req.age,
            monthly_income: req.monthly_income,
            monthly_debt: req.monthly_debt,
            employment_type: req.employment_type,
            months_of_experience: req.months_of_experience,
            credit_score: req.credit_score,
            amount: req.amount,
            term: req.term,
            active_defaults: req.active_defaults,
        }
    }
}
