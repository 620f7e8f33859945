//! HTTP request handlers for the Credit Pre-evaluation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::engine::{evaluate, MAX_CREDIT_SCORE, MIN_ELIGIBLE_SCORE};
use crate::models::Application;

use super::request::EvaluationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/evaluate", post(evaluate_handler))
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/policy", get(policy_handler))
        .with_state(state)
}

/// Handler for POST /api/v1/evaluate.
///
/// Accepts a loan application and returns the engine's evaluation. Every
/// decision, including a rejection, is a 200 response; only contract
/// violations and malformed requests produce error statuses.
async fn evaluate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EvaluationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing evaluation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let application: Application = request.into();

    let start_time = Instant::now();
    match evaluate(&application, state.policy()) {
        Ok(evaluation) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                reference = %evaluation.reference,
                decision = ?evaluation.decision,
                duration_us = duration.as_micros(),
                "Evaluation completed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(evaluation),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Evaluation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Response body for the health endpoint.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
}

/// Handler for GET /api/v1/health.
async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        message: "Credit Pre-evaluation Engine is running",
    })
}

/// Handler for GET /api/v1/policy.
///
/// Renders the active policy limits so callers can surface them before
/// submitting an application.
async fn policy_handler(State(state): State<AppState>) -> impl IntoResponse {
    let policy = state.policy();
    Json(json!({
        "age_limits": {
            "min": policy.min_age,
            "max": policy.max_age,
        },
        "income_requirements": {
            "min_monthly_income": policy.min_income,
        },
        "loan_limits": {
            "min_amount": policy.min_amount,
            "max_amount": policy.max_amount,
            "min_term": policy.min_term,
            "max_term": policy.max_term,
        },
        "dti_limits": {
            "current_dti_max": policy.current_dti_max,
            "total_dti_max": policy.total_dti_max,
            "max_payment_affectation": policy.max_affectation,
        },
        "employment_experience": {
            "employee_min_months": policy.employee_min_experience,
            "self_employed_min_months": policy.self_employed_min_experience,
        },
        "credit_score_limits": {
            "min_score": MIN_ELIGIBLE_SCORE,
            "max_score": MAX_CREDIT_SCORE,
        },
    }))
}
