//! # HTTP API Errors
//!
//! Handler-level failures surface as a `{success: false, message}` envelope
//! with a 4xx/5xx status; nothing throws past the boundary. The simulated
//! latency still elapses before an error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::query::QueryError;
use crate::store::StoreError;

/// Result type for handler bodies
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Sort/filter descriptor failed to parse or used an unknown operator
    #[error("{0}")]
    Query(#[from] QueryError),

    /// Mutation referenced a record that does not exist
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Request body was not the expected JSON shape
    #[error("invalid request body: {0}")]
    InvalidBody(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Query(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::MissingId) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Error envelope: `success` is always false
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub message: String,
}

impl From<&ApiError> for ErrorEnvelope {
    fn from(err: &ApiError) -> Self {
        Self {
            success: false,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorEnvelope::from(&self));
        (status, body).into_response()
    }
}
