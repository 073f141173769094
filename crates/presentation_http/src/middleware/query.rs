//! Query string extraction
//!
//! Provides a `LenientQuery` extractor that keeps the first value of a
//! repeated key and reports failures through `ApiError`.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// A query extractor that tolerates repeated keys
///
/// `?q=a&q=b` deserializes as `q = "a"`. Rejections render as the JSON
/// `{"error": ...}` body with status 400, never as axum's plain-text
/// rejection. Target fields must deserialize from strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for LenientQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        let mut first = Map::new();
        for (key, value) in pairs {
            first.entry(key).or_insert(Value::String(value));
        }

        serde_json::from_value(Value::Object(first))
            .map(Self)
            .map_err(|e| ApiError::BadRequest(format!("Invalid query string: {e}")))
    }
}
