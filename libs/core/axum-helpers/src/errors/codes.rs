//! Type-safe error codes for API responses.
//!
//! Each code has a SCREAMING_SNAKE_CASE identifier for clients, an integer
//! for logs and monitoring, and a default human-readable message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! assert_eq!(code.default_message(), "Request validation failed");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request validation failed
    ValidationError,

    /// Path identifier is not a positive integer
    InvalidId,

    /// JSON extraction from request body failed
    JsonExtraction,

    /// Requested resource was not found
    NotFound,

    /// Requested page lies beyond the last page of results
    PageOutOfRange,

    /// HTTP method is not supported by the route
    MethodNotAllowed,

    // Server errors (5000-5999)
    /// An unexpected internal server error occurred
    InternalError,

    /// JSON serialization error
    SerdeJsonError,
}

impl ErrorCode {
    /// Identifier clients can match on.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidId => "INVALID_ID",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::PageOutOfRange => "PAGE_OUT_OF_RANGE",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::InternalError => "INTERNAL_ERROR",
            Self::SerdeJsonError => "SERDE_JSON_ERROR",
        }
    }

    /// Integer code used in structured logs.
    ///
    /// - 1000-1999: client errors
    /// - 5000-5999: server errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidId => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::PageOutOfRange => 1005,
            Self::MethodNotAllowed => 1006,
            Self::InternalError => 5000,
            Self::SerdeJsonError => 5001,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidId => "Invalid id format",
            Self::JsonExtraction => "Failed to parse request body",
            Self::NotFound => "Resource not found",
            Self::PageOutOfRange => "Requested page is out of range",
            Self::MethodNotAllowed => "The HTTP method is not allowed for this resource",
            Self::InternalError => "An internal server error occurred",
            Self::SerdeJsonError => "JSON serialization error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_string_representation() {
        assert_eq!(ErrorCode::ValidationError.as_str(), "VALIDATION_ERROR");
        assert_eq!(ErrorCode::InvalidId.as_str(), "INVALID_ID");
        assert_eq!(ErrorCode::PageOutOfRange.to_string(), "PAGE_OUT_OF_RANGE");
    }

    #[test]
    fn test_error_code_integer_ranges() {
        assert_eq!(ErrorCode::ValidationError.code(), 1001);
        assert!((1000..2000).contains(&ErrorCode::NotFound.code()));
        assert!((5000..6000).contains(&ErrorCode::InternalError.code()));
    }

    #[test]
    fn test_error_code_serde_matches_as_str() {
        for code in [
            ErrorCode::ValidationError,
            ErrorCode::InvalidId,
            ErrorCode::JsonExtraction,
            ErrorCode::NotFound,
            ErrorCode::PageOutOfRange,
            ErrorCode::MethodNotAllowed,
            ErrorCode::InternalError,
            ErrorCode::SerdeJsonError,
        ] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }
}
