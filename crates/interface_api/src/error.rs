//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use domain_vehicle::VehicleError;

/// Message returned for a missing, malformed or impossible date
pub const INVALID_DATE_MESSAGE: &str =
    "Invalid date or date format. Use YYYY-MM-DD or a valid calendar date.";

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Store error: {0}")]
    Database(String),
}

impl ApiError {
    pub fn invalid_date() -> Self {
        ApiError::BadRequest(INVALID_DATE_MESSAGE.to_string())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            ApiError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg.clone()),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone()),
            ApiError::Database(msg) => (StatusCode::SERVICE_UNAVAILABLE, "database_error", msg.clone()),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<VehicleError> for ApiError {
    fn from(err: VehicleError) -> Self {
        match err {
            VehicleError::CarNotFound(_) => ApiError::NotFound(err.to_string()),
            VehicleError::InvalidClaim(claim_error) => ApiError::Validation(claim_error.to_string()),
            VehicleError::Store(port_error) if port_error.is_invalid_data() => {
                ApiError::Validation(port_error.to_string())
            }
            VehicleError::Store(port_error) if port_error.is_transient() => {
                error!(error = %port_error, "Store unavailable");
                ApiError::Database(port_error.to_string())
            }
            VehicleError::Store(port_error) => {
                error!(error = %port_error, "Store failure");
                ApiError::Internal(port_error.to_string())
            }
        }
    }
}
