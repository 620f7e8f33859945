//! Credit Pre-evaluation Engine
//!
//! This crate evaluates consumer loan applications against a fixed credit
//! policy and returns one of three decisions (approved, counteroffer,
//! rejected) together with supporting figures: annual rate, amortized
//! monthly payment, and debt-to-income ratios.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
