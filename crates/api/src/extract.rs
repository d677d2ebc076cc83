//! Request extractors whose rejections are [`AppError`]s.
//!
//! axum's `Json` extractor rejects empty bodies before a handler runs, which
//! would hide the per-resource empty-body messages. [`JsonBody`] instead
//! treats an absent body as an empty object and leaves the empty-body
//! decision to the managers.
//!
//! [`IdPath`] and [`QueryParams`] wrap `Path` and `Query` so that a
//! malformed URL gets the JSON error body instead of axum's plain text.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde_json::Value;
use stackboard_core::error::CoreError;
use stackboard_core::validation::JsonObject;

use crate::error::AppError;

/// A request body decoded as a JSON object.
#[derive(Debug, Clone, Default)]
pub struct JsonBody(pub JsonObject);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        Ok(JsonBody(parse_json_object(&bytes)?))
    }
}

/// The single `{id}` segment of a route.
#[derive(Debug, Clone)]
pub struct IdPath(pub String);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state).await?;
        Ok(IdPath(id))
    }
}

/// Query-string parameters deserialized into `T`.
#[derive(Debug, Clone, Default)]
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(QueryParams(params))
    }
}

/// Decode raw body bytes into a JSON object.
///
/// Whitespace-only bodies and a literal `null` yield an empty object.
pub fn parse_json_object(bytes: &[u8]) -> Result<JsonObject, CoreError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(JsonObject::new());
    }
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(Value::Null) => Ok(JsonObject::new()),
        Ok(_) => Err(CoreError::Validation(
            "Request body must be a JSON object".into(),
        )),
        Err(e) => Err(CoreError::Validation(format!("Malformed JSON body: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn blank_body_is_empty_object() {
        assert!(parse_json_object(b"").unwrap().is_empty());
        assert!(parse_json_object(b"  \n").unwrap().is_empty());
        assert!(parse_json_object(b"null").unwrap().is_empty());
    }

    #[test]
    fn object_body_is_returned() {
        let body = parse_json_object(br#"{"name":"Alpha"}"#).unwrap();
        assert_eq!(body["name"], "Alpha");
    }

    #[test]
    fn array_body_is_rejected() {
        assert_matches!(parse_json_object(b"[1,2]"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn malformed_body_is_rejected() {
        let err = parse_json_object(b"{\"name\":").unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.starts_with("Malformed JSON body"));
    }
}
