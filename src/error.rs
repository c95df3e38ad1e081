// Error handling module
// Typed errors for the public SDK surface

use thiserror::Error;

/// Errors surfaced by the SDK
///
/// Rejected access tokens on resource calls are not errors: they come back as
/// the provider's status code inside [`crate::ApiResponse`].
#[derive(Error, Debug)]
pub enum SdkError {
    /// The provider rejected an authorization code or refresh token
    #[error("authorization failed ({status}): {error} - {message}")]
    Authorization {
        status: u16,
        error: String,
        message: String,
    },

    /// Network-level failure from the HTTP transport
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Request body or response payload could not be (de)serialized
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Token endpoint returned a success status with an unusable payload
    #[error("invalid token response: {0}")]
    TokenResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_error_message() {
        let err = SdkError::Authorization {
            status: 400,
            error: "invalid_grant".to_string(),
            message: "Error validating grant".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "authorization failed (400): invalid_grant - Error validating grant"
        );
    }

    #[test]
    fn test_token_response_error_message() {
        let err = SdkError::TokenResponse("empty access_token".to_string());
        assert_eq!(err.to_string(), "invalid token response: empty access_token");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err = SdkError::from(json_err);
        assert!(err.to_string().starts_with("serialization error:"));
    }
}
