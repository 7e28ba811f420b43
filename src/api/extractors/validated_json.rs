//! JSON body extractor with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use super::checked;
use crate::errors::AppError;

/// JSON body deserialized into `T` and checked against its rules.
///
/// A missing content type, malformed JSON, a missing field and a failed rule
/// all reject with 400.
///
/// ```rust,ignore
/// async fn create_user(ValidatedJson(payload): ValidatedJson<UserRequest>) {
///     // payload.email already matched the email pattern
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;

        checked(value).map(ValidatedJson)
    }
}
