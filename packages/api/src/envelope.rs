//! # Response envelope decoding
//!
//! The backend wraps every payload as `{ "success": bool, "data": T,
//! "message": "..." }`. Paginated endpoints come in two shapes:
//!
//! ```json
//! { "success": true, "data": [...], "meta": { "current_page": 1, ... }, "links": { ... } }
//! { "success": true, "data": { "data": [...], "current_page": 1, "last_page": 3, ... } }
//! ```
//!
//! The functions here turn a status code and a body into a typed value or an
//! [`ApiError`]; nothing past this module touches raw JSON. Paging metadata
//! is checked on the way in (`current_page`, `last_page` and `per_page` must
//! be at least 1).

use serde::de::DeserializeOwned;
use serde::Deserialize;
use store::models::{PaginationLinks, PaginationMeta};
use store::Page;

use crate::error::ApiError;

fn yes() -> bool {
    true
}

/// `success` is optional; endpoints that omit it are treated as successful.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default = "yes")]
    success: bool,
    data: Option<T>,
    #[serde(default)]
    message: Option<String>,
}

/// Error bodies only need a message.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NestedPage<T> {
    data: Vec<T>,
    current_page: u32,
    last_page: u32,
    per_page: u32,
    total: u64,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PageData<T> {
    Flat(Vec<T>),
    Nested(NestedPage<T>),
}

#[derive(Debug, Deserialize)]
struct PageEnvelope<T> {
    #[serde(default = "yes")]
    success: bool,
    data: Option<PageData<T>>,
    #[serde(default)]
    meta: Option<PaginationMeta>,
    #[allow(dead_code)]
    #[serde(default)]
    links: Option<PaginationLinks>,
    #[serde(default)]
    message: Option<String>,
}

fn check_status(status: u16, body: &str) -> Result<(), ApiError> {
    if status == 401 {
        return Err(ApiError::Unauthorized);
    }
    if (200..300).contains(&status) {
        return Ok(());
    }
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed.message.or(parsed.error).unwrap_or_default();
    Err(ApiError::Status { status, message })
}

fn rejected(message: Option<String>) -> ApiError {
    ApiError::Rejected {
        message: message.unwrap_or_default(),
    }
}

fn check_meta(meta: PaginationMeta) -> Result<PaginationMeta, ApiError> {
    if meta.current_page == 0 || meta.last_page == 0 || meta.per_page == 0 {
        return Err(ApiError::Decode(format!("invalid pagination meta: {meta:?}")));
    }
    Ok(meta)
}

/// Decodes `data` of a successful response.
pub fn decode_data<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    check_status(status, body)?;
    let envelope: Envelope<T> = serde_json::from_str(body)?;
    if !envelope.success {
        return Err(rejected(envelope.message));
    }
    envelope
        .data
        .ok_or_else(|| ApiError::Decode("response has no data".to_string()))
}

/// Accepts any successful response, with or without `data`.
pub fn decode_empty(status: u16, body: &str) -> Result<(), ApiError> {
    check_status(status, body)?;
    if body.trim().is_empty() {
        return Ok(());
    }
    let envelope: Envelope<serde_json::Value> = serde_json::from_str(body)?;
    if !envelope.success {
        return Err(rejected(envelope.message));
    }
    Ok(())
}

/// Decodes a paginated list in either shape.
pub fn decode_page<T: DeserializeOwned>(status: u16, body: &str) -> Result<Page<T>, ApiError> {
    check_status(status, body)?;
    let envelope: PageEnvelope<T> = serde_json::from_str(body)?;
    if !envelope.success {
        return Err(rejected(envelope.message));
    }
    match envelope.data {
        Some(PageData::Flat(items)) => {
            let meta = envelope
                .meta
                .ok_or_else(|| ApiError::Decode("paginated response has no meta".to_string()))?;
            Ok(Page::new(items, check_meta(meta)?))
        }
        Some(PageData::Nested(nested)) => {
            let meta = PaginationMeta {
                current_page: nested.current_page,
                last_page: nested.last_page,
                per_page: nested.per_page,
                total: nested.total,
            };
            Ok(Page::new(nested.data, check_meta(meta)?))
        }
        None => Err(ApiError::Decode("response has no data".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: u64,
    }

    #[test]
    fn test_data_is_unwrapped() {
        let item: Item = decode_data(200, r#"{"success":true,"data":{"id":3}}"#).unwrap();
        assert_eq!(item, Item { id: 3 });
    }

    #[test]
    fn test_success_false_carries_message() {
        let err = decode_data::<Item>(200, r#"{"success":false,"message":"Slug занят"}"#).unwrap_err();
        assert_eq!(err, ApiError::Rejected { message: "Slug занят".to_string() });
        assert_eq!(err.server_message(), Some("Slug занят"));
    }

    #[test]
    fn test_non_2xx_keeps_status_and_message() {
        let err = decode_data::<Item>(422, r#"{"message":"The title field is required."}"#).unwrap_err();
        assert_eq!(
            err,
            ApiError::Status { status: 422, message: "The title field is required.".to_string() }
        );
        let err = decode_data::<Item>(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err, ApiError::Status { status: 502, message: String::new() });
    }

    #[test]
    fn test_401_is_unauthorized() {
        assert!(decode_empty(401, "").unwrap_err().is_unauthorized());
    }

    #[test]
    fn test_wrong_shape_is_decode_error() {
        let err = decode_data::<Item>(200, r#"{"success":true,"data":{"id":"x"}}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        let err = decode_data::<Item>(200, r#"{"success":true}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_flat_page_with_meta() {
        let body = r#"{"success":true,"data":[{"id":46},{"id":47}],
            "meta":{"current_page":4,"last_page":4,"per_page":15,"total":47},
            "links":{"prev":"/articles?page=3","next":null}}"#;
        let page: Page<Item> = decode_page(200, body).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.meta.total, 47);
        assert_eq!(page.meta.current_page, 4);
    }

    #[test]
    fn test_nested_laravel_page() {
        let body = r#"{"success":true,"data":{"data":[{"id":1}],
            "current_page":1,"last_page":1,"per_page":20,"total":1}}"#;
        let page: Page<Item> = decode_page(200, body).unwrap();
        assert_eq!(page.items, vec![Item { id: 1 }]);
        assert_eq!(page.meta.per_page, 20);
    }

    #[test]
    fn test_invalid_meta_is_rejected() {
        let body = r#"{"data":[],"meta":{"current_page":0,"last_page":0,"per_page":15,"total":0}}"#;
        assert!(matches!(decode_page::<Item>(200, body), Err(ApiError::Decode(_))));
        let body = r#"{"data":[]}"#;
        assert!(matches!(decode_page::<Item>(200, body), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_empty_body_and_message_only_are_fine() {
        assert!(decode_empty(204, "").is_ok());
        assert!(decode_empty(200, r#"{"success":true,"message":"Удалено"}"#).is_ok());
        assert!(decode_empty(200, r#"{"success":false,"message":"Нельзя"}"#).is_err());
    }
}
