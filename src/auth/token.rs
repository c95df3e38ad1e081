// Token endpoint calls

use chrono::{Duration, Utc};
use reqwest::Client;

use super::types::{OAuthErrorResponse, TokenData, TokenResponse};
use crate::error::SdkError;

/// Exchange an authorization code for a token pair
pub(crate) async fn exchange_code(
    http: &Client,
    api_url: &str,
    client_id: u64,
    client_secret: &str,
    code: &str,
    redirect_uri: &str,
) -> Result<TokenData, SdkError> {
    tracing::info!(client_id, "exchanging authorization code for tokens");

    let client_id = client_id.to_string();
    let params = [
        ("grant_type", "authorization_code"),
        ("client_id", client_id.as_str()),
        ("client_secret", client_secret),
        ("code", code),
        ("redirect_uri", redirect_uri),
    ];

    request_token(http, api_url, &params).await
}

/// Obtain a fresh access token from a refresh token
pub(crate) async fn refresh_access_token(
    http: &Client,
    api_url: &str,
    client_id: u64,
    client_secret: &str,
    refresh_token: &str,
) -> Result<TokenData, SdkError> {
    tracing::info!(client_id, "refreshing access token");

    let client_id = client_id.to_string();
    let params = [
        ("grant_type", "refresh_token"),
        ("client_id", client_id.as_str()),
        ("client_secret", client_secret),
        ("refresh_token", refresh_token),
    ];

    request_token(http, api_url, &params).await
}

// The token endpoint takes its parameters in the query string, not the body.
async fn request_token(
    http: &Client,
    api_url: &str,
    params: &[(&str, &str)],
) -> Result<TokenData, SdkError> {
    let url = format!("{}/oauth/token", api_url);

    let response = http.post(&url).query(params).send().await?;

    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let payload: OAuthErrorResponse = serde_json::from_str(&body).unwrap_or_default();
        tracing::warn!(
            status = status.as_u16(),
            error = payload.error.as_deref().unwrap_or("unknown"),
            "token endpoint rejected request"
        );
        return Err(SdkError::Authorization {
            status: status.as_u16(),
            error: payload.error.unwrap_or_else(|| "unknown_error".to_string()),
            message: payload.message.unwrap_or(body),
        });
    }

    let data: TokenResponse = serde_json::from_str(&body)?;
    if data.access_token.is_empty() {
        return Err(SdkError::TokenResponse(
            "token endpoint returned an empty access_token".to_string(),
        ));
    }

    let expires_at = data
        .expires_in
        .map(|secs| Utc::now() + Duration::seconds(secs as i64));

    if let Some(at) = expires_at {
        tracing::info!("token obtained, expires: {}", at.to_rfc3339());
    } else {
        tracing::info!("token obtained, no expiry reported");
    }

    Ok(TokenData {
        access_token: data.access_token,
        refresh_token: data.refresh_token,
        expires_at,
    })
}
