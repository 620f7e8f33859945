//! Evaluation result model.
//!
//! This module defines the [`Evaluation`] produced by the decision engine:
//! the decision itself, the ordered list of reasons behind it, and a map of
//! supporting figures.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The final decision on an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    /// The requested amount and term pass every check.
    Approved,
    /// The requested terms fail affordability, but an alternative exists.
    Counteroffer,
    /// The application fails policy and no alternative exists.
    Rejected,
}

/// A supporting figure attached to an evaluation.
///
/// Monetary values and ratios are decimals; term lengths are integers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    /// A whole-number metric, such as a term in months.
    Integer(u32),
    /// A monetary amount, rate, or ratio.
    Decimal(Decimal),
}

impl From<u32> for MetricValue {
    fn from(value: u32) -> Self {
        MetricValue::Integer(value)
    }
}

impl From<Decimal> for MetricValue {
    fn from(value: Decimal) -> Self {
        MetricValue::Decimal(value)
    }
}

/// The outcome of evaluating one application.
///
/// Constructed fresh per evaluation and never mutated afterwards. The
/// `reasons` list preserves the order in which checks ran; `details` is
/// empty when the application was rejected on basic validation alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Short opaque identifier, unique per evaluation.
    pub reference: String,
    /// The final decision.
    pub decision: Decision,
    /// Human-readable reasons, in check order. Empty on approval.
    pub reasons: Vec<String>,
    /// Supporting figures keyed by metric name. Monetary values carry two
    /// decimal places, ratios four.
    pub details: BTreeMap<String, MetricValue>,
}
