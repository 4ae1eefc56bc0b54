//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Deserialization failures and `Validate` failures both become 400 responses
/// in the standard error envelope, with per-field details for the latter.
///
/// ```ignore
/// use axum::{routing::post, Router};
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateProduct {
///     #[validate(length(min = 1, max = 100))]
///     name: String,
/// }
///
/// async fn create(ValidatedJson(payload): ValidatedJson<CreateProduct>) -> String {
///     format!("Creating {}", payload.name)
/// }
///
/// let app: Router = Router::new().route("/products", post(create));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        data.validate()
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedJson(data))
    }
}
