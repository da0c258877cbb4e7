//! Bridge response envelopes.

use serde::Deserialize;
use serde_json::Value;

use crate::errors::Error;

type Result<T> = std::result::Result<T, Error>;

/// An error entry returned by the bridge.
///
/// The bridge reports failures inside a `200 OK` body as
/// `[{"error": {"type": 101, "address": "", "description": "..."}}]`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    #[serde(rename = "type")]
    pub kind: u16,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub description: String,
}

impl ApiError {
    pub const UNAUTHORIZED_USER: u16 = 1;
    pub const LINK_BUTTON_NOT_PRESSED: u16 = 101;
}

/// One entry of a bridge response list.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ApiResponse<T> {
    Success(T),
    Error(ApiError),
}

/// Payload of a successful registration.
#[derive(Debug, Deserialize)]
pub(crate) struct Registered {
    pub username: String,
}

/// Returns the first error entry if `value` is an error list.
pub(crate) fn first_error(value: &Value) -> Option<ApiError> {
    value
        .as_array()?
        .iter()
        .filter_map(|entry| entry.get("error"))
        .find_map(|err| serde_json::from_value(err.clone()).ok())
}

/// Fails with the bridge's error if `value` is an error list.
pub(crate) fn check(value: Value) -> Result<Value> {
    match first_error(&value) {
        Some(err) => Err(err.into()),
        None => Ok(value),
    }
}

/// Collects the success entries of a list response, failing on the first error.
pub(crate) fn successes<T>(entries: Vec<ApiResponse<T>>) -> Result<Vec<T>> {
    entries
        .into_iter()
        .map(|entry| match entry {
            ApiResponse::Success(value) => Ok(value),
            ApiResponse::Error(err) => Err(err.into()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_link_button_entry() {
        let body = json!([{"error": {"type": 101, "address": "", "description": "link button not pressed"}}]);
        let err = first_error(&body).unwrap();
        assert_eq!(err.kind, ApiError::LINK_BUTTON_NOT_PRESSED);
        assert_eq!(err.description, "link button not pressed");
    }

    #[test]
    fn test_object_is_not_error() {
        let body = json!({"1": {"name": "Desk"}});
        assert!(first_error(&body).is_none());
        assert!(check(body).is_ok());
    }

    #[test]
    fn test_successes_fail_on_error() {
        let entries: Vec<ApiResponse<Registered>> = serde_json::from_value(json!([
            {"success": {"username": "abc"}},
            {"error": {"type": 7, "address": "/", "description": "invalid value"}}
        ]))
        .unwrap();
        assert!(matches!(successes(entries), Err(Error::Bridge { kind: 7, .. })));
    }
}
