//! HTTP API module for the Credit Pre-evaluation Engine.
//!
//! This module provides the REST endpoints for evaluating applications and
//! inspecting the active policy. It is a thin adapter: handlers build an
//! [`Application`](crate::models::Application) from the request and render
//! the [`Evaluation`](crate::models::Evaluation) the engine returns.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::EvaluationRequest;
pub use response::ApiError;
pub use state::AppState;
