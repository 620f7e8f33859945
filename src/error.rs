//! Error types for the Credit Pre-evaluation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Policy violations (insufficient income, excessive DTI, and so on) are
//! never errors: they are reported as reasons inside a rejected or
//! counteroffer evaluation. The variants here cover contract violations by
//! the caller and configuration failures only.

use thiserror::Error;

/// The main error type for the Credit Pre-evaluation Engine.
///
/// # Example
///
/// ```
/// use credit_engine::error::EngineError;
///
/// let error = EngineError::InvalidTerm { term: 0 };
/// assert_eq!(error.to_string(), "Invalid loan term: 0 months");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Policy configuration file was not found at the specified path.
    #[error("Policy file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Policy configuration file could not be parsed.
    #[error("Failed to parse policy file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Credit score outside the bureau domain of [300, 850].
    ///
    /// Scores below the eligibility threshold are a normal rejection, not
    /// this error; this variant signals a caller bug.
    #[error("Credit score {score} outside valid range [300, 850]")]
    InvalidScore {
        /// The out-of-domain score.
        score: u16,
    },

    /// A zero-month term was passed to the payment calculator.
    #[error("Invalid loan term: {term} months")]
    InvalidTerm {
        /// The invalid term.
        term: u32,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
