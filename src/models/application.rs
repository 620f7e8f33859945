//! Application model and related types.
//!
//! This module defines the Application struct and EmploymentType enum
//! representing a loan request presented to the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the applicant's employment arrangement.
///
/// The engine only accepts the two canonical values; callers must map any
/// free-form input onto them before constructing an [`Application`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentType {
    /// Salaried employment.
    Employee,
    /// Self-employed or independent work.
    SelfEmployed,
}

/// A loan application as presented to the decision engine.
///
/// The engine treats an application as immutable input. Numeric fields are
/// expected to be range-sane (non-negative income and debt, positive amount
/// and term); the engine checks policy compliance, not type correctness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    /// Applicant's name. Display only, no business effect.
    pub name: String,
    /// Applicant's age in years.
    pub age: u32,
    /// Monthly income.
    pub monthly_income: Decimal,
    /// Current monthly debt obligations.
    pub monthly_debt: Decimal,
    /// The applicant's employment arrangement.
    pub employment_type: EmploymentType,
    /// Months of work experience in the current arrangement.
    pub months_of_experience: u32,
    /// Bureau credit score, domain [300, 850].
    pub credit_score: u16,
    /// Requested principal.
    pub amount: Decimal,
    /// Requested term in months.
    pub term: u32,
    /// Whether the applicant has active payment defaults.
    pub active_defaults: bool,
}
