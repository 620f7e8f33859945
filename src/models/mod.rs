//! Core data models for the Credit Pre-evaluation Engine.
//!
//! This module contains the domain models exchanged with the engine: the
//! application under evaluation and the evaluation it produces.

mod application;
mod evaluation;

pub use application::{Application, EmploymentType};
pub use evaluation::{Decision, Evaluation, MetricValue};
