use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ProductError {
    #[error("Product with id {0} not found")]
    NotFound(u64),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Page {page} is out of range, valid pages are 1..={total_pages}")]
    PageOutOfRange { page: u32, total_pages: u64 },

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => AppError::NotFound(err.to_string()),
            ProductError::Validation(msg) => AppError::BadRequest(msg),
            ProductError::PageOutOfRange { .. } => AppError::PageOutOfRange(err.to_string()),
            ProductError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<validator::ValidationErrors> for ProductError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();
        ProductError::Validation(format!("invalid value for {}", fields.join(", ")))
    }
}
