//! Error handling middleware - RFC 7807 compliant responses.
//!
//! This is the only place HTTP status codes are chosen; every core failure
//! mode maps through here.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use quill_shared::ErrorResponse;
use std::fmt;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Validation { detail: String, fields: Vec<String> },
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Validation { detail, .. } => write!(f, "Validation failed: {}", detail),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::Validation { detail, fields } => {
                ErrorResponse::bad_request(detail).with_fields(fields.clone())
            }
            AppError::Internal(detail) => {
                // Log internal errors; clients only see a generic 500.
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<quill_core::DomainError> for AppError {
    fn from(err: quill_core::DomainError) -> Self {
        match err {
            quill_core::DomainError::NotFound { id } => {
                AppError::NotFound(format!("Post with id {} not found", id))
            }
            quill_core::DomainError::Validation { fields } => AppError::Validation {
                detail: format!("invalid or missing fields: {}", fields.join(", ")),
                fields,
            },
        }
    }
}

impl From<quill_core::ports::StorageError> for AppError {
    fn from(err: quill_core::ports::StorageError) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
