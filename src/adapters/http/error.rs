//! HTTP error responses.
//!
//! Every failure leaves the API as `{ "code", "message", "details"? }`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Standard error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new("UNAUTHENTICATED", message)
    }
}

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub struct ApiError(DomainError);

impl ApiError {
    /// HTTP status for the wrapped error code.
    pub fn status(&self) -> StatusCode {
        match self.0.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat
            | ErrorCode::IncompleteAssessment => StatusCode::BAD_REQUEST,
            ErrorCode::UserNotFound => StatusCode::NOT_FOUND,
            ErrorCode::UserExists => StatusCode::CONFLICT,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::Forbidden => StatusCode::FORBIDDEN,
            ErrorCode::DatabaseError | ErrorCode::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(DomainError::new(
            ErrorCode::ValidationFailed,
            rejection.body_text(),
        ))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = if status.is_server_error() {
            // Infrastructure details stay in the logs.
            tracing::error!(code = %self.0.code, error = %self.0.message, "Request failed");
            ErrorResponse::new(self.0.code.to_string(), "An internal error occurred")
        } else {
            let details = if self.0.details.is_empty() {
                None
            } else {
                serde_json::to_value(&self.0.details).ok()
            };
            ErrorResponse {
                code: self.0.code.to_string(),
                message: self.0.message,
                details,
            }
        };

        (status, Json(body)).into_response()
    }
}
