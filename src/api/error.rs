//! HTTP error type and its JSON rendering.
//!
//! Bodies follow the `{ statusCode, message, error }` shape, where `error`
//! is the status reason phrase and `message` is either a single string or,
//! for validation failures, one entry per failed rule.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::validation::FieldViolation;

#[derive(Debug, Error, PartialEq)]
pub enum HttpError {
    /// Bad request (unusable body, store refused the input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Field validation failed.
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// Resource not found, or an operation on it failed.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl HttpError {
    pub fn from_violations(violations: &[FieldViolation]) -> Self {
        HttpError::Validation(violations.iter().flat_map(FieldViolation::messages).collect())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::BadRequest(_) | HttpError::Validation(_) => StatusCode::BAD_REQUEST,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum ErrorMessage {
    Single(String),
    List(Vec<String>),
}

/// JSON error response body.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    status_code: u16,
    message: ErrorMessage,
    error: &'static str,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            HttpError::BadRequest(msg) | HttpError::NotFound(msg) => ErrorMessage::Single(msg),
            HttpError::Validation(messages) => ErrorMessage::List(messages),
        };

        let body = ErrorBody {
            status_code: status.as_u16(),
            message,
            error: status.canonical_reason().unwrap_or("Error"),
        };

        (status, axum::Json(body)).into_response()
    }
}
