//! JSON body extractor that runs schema validation before the handler.

use crate::error::AppError;
use crate::schema::Validate;
use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;

/// Deserialized and validated body. Malformed JSON, wrong types, missing fields and rule
/// violations are rejected with 400; an oversized body is 413 and a missing or non-JSON
/// content type is 415. All use the `{"error": ...}` envelope.
#[derive(Clone, Debug)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_error)?;
        Ok(ValidatedJson(body.validated()?))
    }
}

fn rejection_error(rejection: JsonRejection) -> AppError {
    match rejection.status() {
        StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(rejection.body_text()),
        StatusCode::UNSUPPORTED_MEDIA_TYPE => AppError::UnsupportedMediaType(rejection.body_text()),
        _ => AppError::Validation(rejection.body_text()),
    }
}
