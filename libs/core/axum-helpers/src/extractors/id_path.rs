//! Positive integer path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Extractor for numeric resource ids in the path.
///
/// Accepts only positive integers; `0`, negative numbers and anything
/// non-numeric are rejected with a 400 `INVALID_ID` response.
///
/// ```ignore
/// use axum::{routing::get, Router};
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_product(IdPath(id): IdPath) -> String {
///     format!("Product {}", id)
/// }
///
/// let app: Router = Router::new().route("/products/{id}", get(get_product));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub u64);

impl IdPath {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        match raw.trim().parse::<u64>() {
            Ok(id) if id > 0 => Ok(IdPath(id)),
            _ => Err(AppError::InvalidId(format!(
                "id must be a positive integer, got '{}'",
                raw
            ))),
        }
    }
}

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        IdPath::parse(&raw).map_err(|e| e.into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_positive_integers() {
        assert_eq!(IdPath::parse("1").unwrap(), IdPath(1));
        assert_eq!(IdPath::parse("42").unwrap(), IdPath(42));
    }

    #[test]
    fn test_parse_rejects_invalid_ids() {
        for raw in ["0", "-3", "abc", "1.5", ""] {
            let err = IdPath::parse(raw).unwrap_err();
            assert!(matches!(err, AppError::InvalidId(_)), "{raw} should be rejected");
        }
    }

    #[test]
    fn test_rejection_names_the_input() {
        let err = IdPath::parse("abc").unwrap_err();
        assert!(err.to_string().contains("'abc'"));
    }
}
