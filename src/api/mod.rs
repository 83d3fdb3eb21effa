//! REST API module.
//!
//! Contains all API routes and handlers following the frontend contract.
//! Handlers only decode requests, call the service and encode results.

mod developers;
mod search;

pub use developers::*;
pub use search::*;

use axum::{extract::rejection::JsonRejection, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<T, AppError>;

/// Body returned by operations that have no record to return.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Unwrap a JSON body, turning decode failures into a 400 with our error shape.
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::BadRequest(format!("Invalid request body: {}", rejection.body_text())))
}

/// Fallback for unmatched routes and methods.
pub async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}
