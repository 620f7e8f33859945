//! Policy configuration types and loading.
//!
//! The engine evaluates every application against a single immutable
//! [`PolicyConfig`]. The built-in defaults carry the standard policy; a
//! YAML file may override any subset of fields.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Lending policy limits.
///
/// All fields are read-only after construction. The engine never mutates
/// the policy, so a single instance can be shared across concurrent
/// evaluations without locking.
///
/// # Example
///
/// ```
/// use credit_engine::config::PolicyConfig;
/// use rust_decimal::Decimal;
///
/// let policy = PolicyConfig::default();
/// assert_eq!(policy.min_age, 18);
/// assert_eq!(policy.max_term, 60);
/// assert_eq!(policy.min_income, Decimal::from(7500));
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Minimum applicant age in years (inclusive).
    pub min_age: u32,
    /// Maximum applicant age in years (inclusive).
    pub max_age: u32,
    /// Minimum monthly income.
    pub min_income: Decimal,
    /// Minimum loan principal.
    pub min_amount: Decimal,
    /// Maximum loan principal.
    pub max_amount: Decimal,
    /// Minimum loan term in months (inclusive).
    pub min_term: u32,
    /// Maximum loan term in months (inclusive).
    pub max_term: u32,
    /// Cap on pre-existing debt as a fraction of income.
    pub current_dti_max: Decimal,
    /// Cap on debt plus the new payment as a fraction of income.
    pub total_dti_max: Decimal,
    /// Cap on the payment alone as a fraction of income.
    pub max_affectation: Decimal,
    /// Minimum months of experience for salaried applicants.
    pub employee_min_experience: u32,
    /// Minimum months of experience for self-employed applicants.
    pub self_employed_min_experience: u32,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_age: 18,
            max_age: 69,
            min_income: Decimal::from(7_500),
            min_amount: Decimal::from(10_000),
            max_amount: Decimal::from(300_000),
            min_term: 12,
            max_term: 60,
            current_dti_max: Decimal::new(40, 2),
            total_dti_max: Decimal::new(50, 2),
            max_affectation: Decimal::new(30, 2),
            employee_min_experience: 6,
            self_employed_min_experience: 12,
        }
    }
}

impl PolicyConfig {
    /// Loads a policy from a YAML file.
    ///
    /// Fields missing from the file keep their default values, so a file
    /// may override a single limit without restating the whole policy.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] if the file cannot be read
    /// and [`EngineError::ConfigParseError`] if it is not valid YAML.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use credit_engine::config::PolicyConfig;
    ///
    /// let policy = PolicyConfig::load("./config/policy.yaml")?;
    /// # Ok::<(), credit_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
