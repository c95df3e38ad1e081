// Resource response envelope
// Resource calls never fail on provider status codes; callers inspect them here.

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::SdkError;

/// Response from a resource endpoint
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl ApiResponse {
    /// Whether the status code is in the 2xx range
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, SdkError> {
        serde_json::from_str(&self.body).map_err(SdkError::Json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn response(status: StatusCode, body: &str) -> ApiResponse {
        ApiResponse {
            status,
            headers: HeaderMap::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_is_success() {
        assert!(response(StatusCode::OK, "").is_success());
        assert!(response(StatusCode::CREATED, "").is_success());
        assert!(!response(StatusCode::FORBIDDEN, "").is_success());
    }

    #[test]
    fn test_json_decode() {
        let resp = response(StatusCode::OK, r#"{"id":"MLA123","price":100}"#);
        let value: Value = resp.json().unwrap();
        assert_eq!(value["id"], "MLA123");
        assert_eq!(value["price"], 100);
    }

    #[test]
    fn test_json_decode_failure() {
        let resp = response(StatusCode::OK, "not json");
        let result: Result<Value, _> = resp.json();
        assert!(matches!(result, Err(SdkError::Json(_))));
    }
}
