//! Basic policy validation.
//!
//! This module checks an application against the policy's hard limits:
//! age, income, experience, defaults, amount, and term. Every check runs
//! independently so a rejection reports all violated limits at once.

use crate::config::PolicyConfig;
use crate::models::{Application, EmploymentType};

/// The outcome of basic validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// True iff no check failed.
    pub ok: bool,
    /// One reason per failed check, in check order.
    pub reasons: Vec<String>,
}

/// Validates an application against the policy's basic limits.
///
/// The six checks are evaluated independently (no short-circuiting), and
/// each failing check appends its reason, so `reasons` lists every violated
/// limit in a fixed order: age, income, experience, defaults, amount, term.
///
/// This is a pure function of the application and the policy.
///
/// # Example
///
/// ```
/// use credit_engine::config::PolicyConfig;
/// use credit_engine::engine::validate;
/// use credit_engine::models::{Application, EmploymentType};
/// use rust_decimal::Decimal;
///
/// let policy = PolicyConfig::default();
/// let application = Application {
///     name: "Ana".to_string(),
///     age: 30,
///     monthly_income: Decimal::from(9000),
///     monthly_debt: Decimal::ZERO,
///     employment_type: EmploymentType::Employee,
///     months_of_experience: 24,
///     credit_score: 720,
///     amount: Decimal::from(50000),
///     term: 36,
///     active_defaults: false,
/// };
///
/// let report = validate(&application, &policy);
/// assert!(report.ok);
/// assert!(report.reasons.is_empty());
/// ```
pub fn validate(application: &Application, policy: &PolicyConfig) -> ValidationReport {
    let mut reasons = Vec::new();

    if application.age < policy.min_age || application.age > policy.max_age {
        reasons.push("Age outside acceptable range".to_string());
    }

    if application.monthly_income < policy.min_income {
        reasons.push("Insufficient income".to_string());
    }

    let min_experience = match application.employment_type {
        EmploymentType::Employee => policy.employee_min_experience,
        EmploymentType::SelfEmployed => policy.self_employed_min_experience,
    };
    if application.months_of_experience < min_experience {
        reasons.push("Insufficient work experience".to_string());
    }

    if application.active_defaults {
        reasons.push("Active payment defaults".to_string());
    }

    if application.amount < policy.min_amount || application.amount > policy.max_amount {
        reasons.push("Amount outside policy limits".to_string());
    }

    if application.term < policy.min_term || application.term > policy.max_term {
        reasons.push("Term outside policy limits".to_string());
    }

    ValidationReport {
        ok: reasons.is_empty(),
        reasons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn clean_application() -> Application {
        Application {
            name: "Ana".to_string(),
            age: 30,
            monthly_income: Decimal::from(9_000),
            monthly_debt: Decimal::ZERO,
            employment_type: EmploymentType::Employee,
            months_of_experience: 24,
            credit_score: 720,
            amount: Decimal::from(50_000),
            term: 36,
            active_defaults: false,
        }
    }

    #[test]
    fn test_clean_application_passes() {
        let report = validate(&clean_application(), &PolicyConfig::default());
        assert!(report.ok);
        assert!(report.reasons.is_empty());
    }

    #[test]
    fn test_age_boundaries_inclusive() {
        let policy = PolicyConfig::default();
        for age in [18, 69] {
            let mut app = clean_application();
            app.age = age;
            assert!(validate(&app, &policy).ok, "age {} should pass", age);
        }
        for age in [17, 70] {
            let mut app = clean_application();
            app.age = age;
            let report = validate(&app, &policy);
            assert!(!report.ok, "age {} should fail", age);
            assert_eq!(report.reasons, vec!["Age outside acceptable range"]);
        }
    }

    #[test]
    fn test_income_below_minimum_fails() {
        let mut app = clean_application();
        app.monthly_income = Decimal::from(7_499);
        let report = validate(&app, &PolicyConfig::default());
        assert_eq!(report.reasons, vec!["Insufficient income"]);
    }

    #[test]
    fn test_income_at_minimum_passes() {
        let mut app = clean_application();
        app.monthly_income = Decimal::from(7_500);
        assert!(validate(&app, &PolicyConfig::default()).ok);
    }

    #[test]
    fn test_employee_experience_threshold() {
        let policy = PolicyConfig::default();
        let mut app = clean_application();

        app.months_of_experience = 6;
        assert!(validate(&app, &policy).ok);

        app.months_of_experience = 5;
        let report = validate(&app, &policy);
        assert_eq!(report.reasons, vec!["Insufficient work experience"]);
    }

    #[test]
    fn test_self_employed_experience_threshold() {
        let policy = PolicyConfig::default();
        let mut app = clean_application();
        app.employment_type = EmploymentType::SelfEmployed;

        app.months_of_experience = 12;
        assert!(validate(&app, &policy).ok);

        // Enough for an employee, not for self-employed.
        app.months_of_experience = 11;
        let report = validate(&app, &policy);
        assert_eq!(report.reasons, vec!["Insufficient work experience"]);
    }

    #[test]
    fn test_active_defaults_fail() {
        let mut app = clean_application();
        app.active_defaults = true;
        let report = validate(&app, &PolicyConfig::default());
        assert_eq!(report.reasons, vec!["Active payment defaults"]);
    }

    #[test]
    fn test_amount_limits() {
        let policy = PolicyConfig::default();
        let mut app = clean_application();

        app.amount = Decimal::from(10_000);
        assert!(validate(&app, &policy).ok);
        app.amount = Decimal::from(300_000);
        assert!(validate(&app, &policy).ok);

        app.amount = Decimal::from(9_999);
        assert!(!validate(&app, &policy).ok);
        app.amount = Decimal::from(300_001);
        let report = validate(&app, &policy);
        assert_eq!(report.reasons, vec!["Amount outside policy limits"]);
    }

    #[test]
    fn test_term_limits() {
        let policy = PolicyConfig::default();
        let mut app = clean_application();

        app.term = 12;
        assert!(validate(&app, &policy).ok);
        app.term = 60;
        assert!(validate(&app, &policy).ok);

        app.term = 11;
        assert!(!validate(&app, &policy).ok);
        app.term = 61;
        let report = validate(&app, &policy);
        assert_eq!(report.reasons, vec!["Term outside policy limits"]);
    }

    #[test]
    fn test_all_failing_checks_accumulate_in_order() {
        let app = Application {
            name: "Bad".to_string(),
            age: 17,
            monthly_income: Decimal::from(1_000),
            monthly_debt: Decimal::from(500),
            employment_type: EmploymentType::SelfEmployed,
            months_of_experience: 3,
            credit_score: 720,
            amount: Decimal::from(1_000_000),
            term: 120,
            active_defaults: true,
        };

        let report = validate(&app, &PolicyConfig::default());
        assert_eq!(
            report.reasons,
            vec![
                "Age outside acceptable range",
                "Insufficient income",
                "Insufficient work experience",
                "Active payment defaults",
                "Amount outside policy limits",
                "Term outside policy limits",
            ]
        );
    }
}
