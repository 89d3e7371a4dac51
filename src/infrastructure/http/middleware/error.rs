use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use std::fmt;

use crate::domain::errors::DomainError;

/// A single schema violation reported back to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Validation {
        message: String,
        errors: Vec<FieldError>,
    },
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Validation { message, errors } => {
                write!(f, "Validation failed: {} ({} errors)", message, errors.len())
            }
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "message": msg })),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "message": msg })),
            ApiError::Validation { message, errors } => (
                StatusCode::BAD_REQUEST,
                json!({ "message": message, "errors": errors }),
            ),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "message": msg }))
            }
        };

        (status, Json(body)).into_response()
    }
}

// Convert from domain errors
impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(msg) => ApiError::NotFound(msg),
            DomainError::ValidationError(msg) => ApiError::BadRequest(msg),
            DomainError::DuplicateName(msg) => ApiError::BadRequest(msg),
            DomainError::Internal(detail) => {
                tracing::error!("Member store failure: {}", detail);
                ApiError::Internal("Internal server error".to_string())
            }
        }
    }
}

impl ApiError {
    /// A body that is not parseable JSON at all; per-field type checks happen
    /// in the controllers.
    pub fn invalid_body(message: &str, rejection: JsonRejection) -> Self {
        ApiError::Validation {
            message: message.to_string(),
            errors: vec![FieldError::new("body", rejection.body_text())],
        }
    }
}

// Malformed JSON is a 400, not axum's default 422
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::invalid_body("Invalid data", rejection)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
