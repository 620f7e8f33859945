//! Decision logic for the Credit Pre-evaluation Engine.
//!
//! This module contains the engine's components: basic policy validation,
//! the score-to-rate mapping, the amortized payment calculation, the
//! counteroffer search over alternative terms and amounts, and the
//! evaluator that orchestrates them into a final decision.

mod counteroffer;
mod evaluator;
mod payment;
mod rate;
mod validator;

pub use counteroffer::{find_counteroffer, Counteroffer, BISECTION_ITERATIONS, TERM_STEP_MONTHS};
pub use evaluator::evaluate;
pub use payment::monthly_payment;
pub use rate::{rate_for_score, MAX_CREDIT_SCORE, MIN_CREDIT_SCORE, MIN_ELIGIBLE_SCORE};
pub use validator::{validate, ValidationReport};
