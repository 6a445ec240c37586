//! Request body extractor for the books endpoints.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use bookshelf_core::book::INVALID_JSON_MESSAGE;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// A JSON request body that may be missing.
///
/// A blank body yields `OptionalJson(None)`. Anything else must parse as `T`,
/// otherwise the request is rejected with 400 `{"error":"Invalid JSON body"}`.
/// The `Content-Type` header is not inspected.
#[derive(Debug, Clone)]
pub struct OptionalJson<T>(pub Option<T>);

impl<S, T> FromRequest<S> for OptionalJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::warn!(error = %rejection.body_text(), "Failed to read request body");
            AppError::BadRequest(INVALID_JSON_MESSAGE.to_string())
        })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(None));
        }

        serde_json::from_slice(&bytes)
            .map(|value| Self(Some(value)))
            .map_err(|err| {
                tracing::warn!(error = %err, "Rejected malformed JSON body");
                AppError::BadRequest(INVALID_JSON_MESSAGE.to_string())
            })
    }
}
