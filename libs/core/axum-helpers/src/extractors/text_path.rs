//! Single free-text path segment extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// A single percent-decoded path segment, such as a category name.
///
/// Segments that are not valid UTF-8 after decoding are rejected with the
/// standard error envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPath(pub String);

impl<S> FromRequestParts<S> for TextPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(TextPath(raw))
    }
}
