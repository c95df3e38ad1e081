// Token endpoint wire types

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Parsed result of a successful exchange or refresh
#[derive(Debug, Clone)]
pub struct TokenData {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Token endpoint success payload
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: Option<String>,
    pub expires_in: Option<u64>,
    pub scope: Option<String>,
    pub user_id: Option<u64>,
    pub refresh_token: Option<String>,
}

/// Token endpoint error payload
///
/// The provider is not consistent about which fields it fills in, so all
/// are optional and absent ones fall back to defaults.
#[derive(Debug, Default, Deserialize)]
pub struct OAuthErrorResponse {
    pub message: Option<String>,
    pub error: Option<String>,
    pub status: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_full_payload() {
        let json = r#"{
            "access_token": "APP_USR-123",
            "token_type": "bearer",
            "expires_in": 10800,
            "scope": "offline_access read write",
            "user_id": 666,
            "refresh_token": "TG-abc"
        }"#;
        let parsed: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.access_token, "APP_USR-123");
        assert_eq!(parsed.expires_in, Some(10800));
        assert_eq!(parsed.refresh_token.as_deref(), Some("TG-abc"));
    }

    #[test]
    fn test_token_response_without_refresh_token() {
        let json = r#"{"access_token": "APP_USR-123"}"#;
        let parsed: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.access_token, "APP_USR-123");
        assert!(parsed.refresh_token.is_none());
        assert!(parsed.expires_in.is_none());
    }

    #[test]
    fn test_error_response_partial_payload() {
        let json = r#"{"error": "invalid_grant", "status": 400}"#;
        let parsed: OAuthErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.error.as_deref(), Some("invalid_grant"));
        assert_eq!(parsed.status, Some(400));
        assert!(parsed.message.is_none());
    }
}
