//! Error handling module for the Developer Directory backend.
//!
//! Provides centralized error types with mapping to HTTP status codes and response bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::service::Violation;
use crate::store::StoreError;

/// Messages shared with the frontend contract.
pub mod messages {
    pub const DEVELOPER_NOT_FOUND: &str = "Developer not found";
    pub const ROUTE_NOT_FOUND: &str = "Route not found";
    pub const STORE_UNAVAILABLE: &str = "Developer store is unavailable";
}

/// Application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// One or more validation rules failed
    #[error("{}", join_violations(.0))]
    Validation(Vec<Violation>),
    /// No developer with the given id
    #[error("Developer {0} not found")]
    NotFound(String),
    /// Request body could not be decoded
    #[error("{0}")]
    BadRequest(String),
    /// No route matched the request
    #[error("{}", messages::ROUTE_NOT_FOUND)]
    RouteNotFound,
    /// Backing file unreadable, malformed or not writable
    #[error(transparent)]
    Store(#[from] StoreError),
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message exposed to API clients.
    ///
    /// Store failures are reported generically; the detail goes to the log.
    pub fn public_message(&self) -> String {
        match self {
            AppError::NotFound(_) => messages::DEVELOPER_NOT_FOUND.to_string(),
            AppError::Store(_) => messages::STORE_UNAVAILABLE.to_string(),
            other => other.to_string(),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
}

impl ErrorResponse {
    pub fn new(error: &AppError) -> Self {
        let violations = match error {
            AppError::Validation(violations) => violations.clone(),
            _ => Vec::new(),
        };

        Self {
            error: error.public_message(),
            violations,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Store(e) => tracing::error!("Store error: {}", e),
            AppError::Validation(_) | AppError::BadRequest(_) => {
                tracing::debug!("Rejected request: {}", self)
            }
            _ => {}
        }

        let status = self.status_code();
        let body = ErrorResponse::new(&self);
        (status, Json(body)).into_response()
    }
}
