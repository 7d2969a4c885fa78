//! Data Transfer Objects for API requests and responses.
//!
//! Response DTOs are where stored text is sanitized; request DTOs carry
//! optional fields so that validation messages come from the API rather
//! than from the JSON parser.

pub mod folder;
pub mod health;
pub mod note;

use axum::{
    Json,
    body::Bytes,
    http::{HeaderMap, header},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Decodes a JSON request body.
///
/// An empty body, or one sent without a JSON content type, decodes as an
/// empty object.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when the body is not valid JSON or does
/// not match the expected field types.
pub fn json_or_empty<T>(headers: &HeaderMap, body: &Bytes) -> Result<T, AppError>
where
    T: DeserializeOwned + Default,
{
    if body.is_empty() || !has_json_content_type(headers) {
        return Ok(T::default());
    }

    let Json(payload) = Json::<T>::from_bytes(body)?;
    Ok(payload)
}

/// `application/json` or any `application/*+json` media type.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dto::folder::CreateFolderRequest;
    use axum::http::HeaderValue;

    fn json_headers(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn test_empty_json_body_is_empty_payload() {
        let request: CreateFolderRequest =
            json_or_empty(&json_headers("application/json"), &Bytes::new()).unwrap();

        assert!(request.folder_name.is_none());
    }

    #[test]
    fn test_missing_content_type_is_empty_payload() {
        let body = Bytes::from_static(br#"{"folder_name":"ignored"}"#);

        let request: CreateFolderRequest = json_or_empty(&HeaderMap::new(), &body).unwrap();

        assert!(request.folder_name.is_none());
    }

    #[test]
    fn test_json_body_decoded() {
        let body = Bytes::from_static(br#"{"folder_name":"Important"}"#);

        let request: CreateFolderRequest =
            json_or_empty(&json_headers("application/json; charset=utf-8"), &body).unwrap();

        assert_eq!(request.folder_name.as_deref(), Some("Important"));
    }

    #[test]
    fn test_vendor_json_content_type_accepted() {
        let body = Bytes::from_static(br#"{"folder_name":"Important"}"#);

        let request: CreateFolderRequest =
            json_or_empty(&json_headers("application/merge-patch+json"), &body).unwrap();

        assert_eq!(request.folder_name.as_deref(), Some("Important"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let body = Bytes::from_static(b"{not json");

        let result: Result<CreateFolderRequest, _> =
            json_or_empty(&json_headers("application/json"), &body);

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }
}
