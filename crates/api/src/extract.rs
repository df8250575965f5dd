//! Request extraction helpers that reject with [`AppError`] envelopes
//! instead of axum's plain-text rejections.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use persons_core::types::DbId;
use serde::de::{DeserializeOwned, Error as _};

use crate::error::AppError;

pub const INVALID_ID_MESSAGE: &str = "Invalid ID format";

/// The `{id}` path segment, parsed as a person ID.
///
/// Anything that is not a 32-bit integer is rejected with 400 before the
/// handler runs, so the database is never queried with a malformed ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonId(pub DbId);

impl<S> FromRequestParts<S> for PersonId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest(INVALID_ID_MESSAGE.into()))?;

        parse_person_id(&raw)
            .map(PersonId)
            .ok_or_else(|| AppError::BadRequest(INVALID_ID_MESSAGE.into()))
    }
}

/// Parse a path segment as a person ID.
pub fn parse_person_id(raw: &str) -> Option<DbId> {
    raw.parse().ok()
}

/// Decode a JSON object request body regardless of its `Content-Type` header.
///
/// Only objects are accepted. Derived struct impls would otherwise also take
/// an array and assign its elements to fields by position.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    if !value.is_object() {
        return Err(serde_json::Error::custom("expected a JSON object"));
    }
    serde_json::from_value(value)
}
