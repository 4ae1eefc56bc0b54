pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Error envelope returned for every failed request.
///
/// ```json
/// {
///   "success": false,
///   "statusCode": 404,
///   "code": 1004,
///   "error": "NOT_FOUND",
///   "message": "Product with id 7 not found",
///   "timestamp": "2026-01-01T00:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Always `false` for errors
    pub success: bool,
    /// HTTP status code, repeated in the body for clients that only see JSON
    pub status_code: u16,
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier
    pub error: String,
    /// Human-readable message naming the offending field or id
    pub message: String,
    /// Structured details, e.g. per-field validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, code: ErrorCode, message: String) -> Self {
        Self {
            success: false,
            status_code: status.as_u16(),
            code: code.code(),
            error: code.as_str().to_string(),
            message,
            details: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Query string error: {0}")]
    QueryExtractorRejection(#[from] QueryRejection),

    #[error("Path parameter error: {0}")]
    PathExtractorRejection(#[from] PathRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Page out of range: {0}")]
    PageOutOfRange(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

/// Flatten `validator` errors into `{ field: [{code, message, params}] }`.
pub fn validation_details(errors: &ValidationErrors) -> serde_json::Value {
    let details = errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let entries: Vec<serde_json::Value> = errors
                .iter()
                .map(|err| {
                    serde_json::json!({
                        "code": err.code,
                        "message": err.message,
                        "params": err.params,
                    })
                })
                .collect();
            (field.to_string(), serde_json::Value::Array(entries))
        })
        .collect::<serde_json::Map<_, _>>();

    serde_json::Value::Object(details)
}

/// Human-readable summary naming every field that failed validation.
fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort();
    format!(
        "{}: {}",
        ErrorCode::ValidationError.default_message(),
        fields.join(", ")
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::SerdeJson(e) => {
                tracing::error!(error_code = ErrorCode::SerdeJsonError.code(), "JSON serialization error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::SerdeJsonError,
                    ErrorCode::SerdeJsonError.default_message().to_string(),
                    None,
                )
            }
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(error_code = ErrorCode::JsonExtraction.code(), "JSON extraction error: {:?}", e);
                // Body shape problems are client input errors like any other validation failure
                let status = match e.status() {
                    StatusCode::UNPROCESSABLE_ENTITY => StatusCode::BAD_REQUEST,
                    other => other,
                };
                (status, ErrorCode::JsonExtraction, e.body_text(), None)
            }
            AppError::QueryExtractorRejection(e) => {
                tracing::info!(error_code = ErrorCode::ValidationError.code(), "Query string rejected: {:?}", e);
                (StatusCode::BAD_REQUEST, ErrorCode::ValidationError, e.body_text(), None)
            }
            AppError::PathExtractorRejection(e) => {
                let status = e.status();
                let code = if status.is_server_error() {
                    ErrorCode::InternalError
                } else {
                    ErrorCode::ValidationError
                };
                tracing::warn!(error_code = code.code(), "Path parameter rejected: {:?}", e);
                (status, code, e.body_text(), None)
            }
            AppError::ValidationError(e) => {
                tracing::info!(error_code = ErrorCode::ValidationError.code(), "Validation error: {:?}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::ValidationError,
                    validation_message(&e),
                    Some(validation_details(&e)),
                )
            }
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = ErrorCode::ValidationError.code(), "Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, ErrorCode::ValidationError, msg, None)
            }
            AppError::InvalidId(msg) => {
                tracing::info!(error_code = ErrorCode::InvalidId.code(), "Invalid id: {}", msg);
                (StatusCode::BAD_REQUEST, ErrorCode::InvalidId, msg, None)
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                (StatusCode::NOT_FOUND, ErrorCode::NotFound, msg, None)
            }
            AppError::PageOutOfRange(msg) => {
                tracing::info!(error_code = ErrorCode::PageOutOfRange.code(), "Page out of range: {}", msg);
                (StatusCode::BAD_REQUEST, ErrorCode::PageOutOfRange, msg, None)
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(error_code = ErrorCode::InternalError.code(), "Internal server error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::InternalError, msg, None)
            }
        };

        let mut body = ErrorResponse::new(status, code, message);
        if let Some(details) = details {
            body = body.with_details(details);
        }

        (status, Json(body)).into_response()
    }
}

/// Helper to build an error response outside of `AppError`.
///
/// ```rust,ignore
/// use axum_helpers::errors::{error_response, ErrorCode};
/// use axum::http::StatusCode;
///
/// let response = error_response(
///     StatusCode::NOT_FOUND,
///     "No route for /nope".to_string(),
///     ErrorCode::NotFound,
/// );
/// ```
pub fn error_response(status: StatusCode, message: String, error_code: ErrorCode) -> Response {
    (status, Json(ErrorResponse::new(status, error_code, message))).into_response()
}
