//! Query string extractor that rejects with the standard error envelope.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// Drop-in replacement for [`axum::extract::Query`].
///
/// A query string that fails to deserialize (duplicate keys, wrong types)
/// becomes a 400 `VALIDATION_ERROR` JSON response instead of axum's plain
/// text rejection.
///
/// ```ignore
/// use axum_helpers::extractors::QueryParams;
///
/// async fn list(QueryParams(params): QueryParams<ListParams>) -> String {
///     format!("{params:?}")
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(QueryParams(params))
    }
}
