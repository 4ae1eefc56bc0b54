use axum::{
    http::{StatusCode, Uri},
    response::Response,
};

use super::{error_response, ErrorCode};

/// Fallback for unmatched routes; renders the standard error envelope.
pub async fn not_found(uri: Uri) -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        format!("No route for {}", uri.path()),
        ErrorCode::NotFound,
    )
}

/// Handler for 405 Method Not Allowed errors.
pub async fn method_not_allowed() -> Response {
    error_response(
        StatusCode::METHOD_NOT_ALLOWED,
        ErrorCode::MethodNotAllowed.default_message().to_string(),
        ErrorCode::MethodNotAllowed,
    )
}
