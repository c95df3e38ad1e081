// Mercado Libre API client
// Owns the application identity and token state. Resource calls transparently
// refresh and retry once when the provider rejects the current access token.

use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::auth;
use crate::config::Config;
use crate::error::SdkError;
use crate::http;
use crate::response::ApiResponse;

/// Application identity, fixed for the lifetime of the client
#[derive(Debug, Clone)]
struct ClientCredentials {
    client_id: u64,
    client_secret: String,
}

/// Current token pair
///
/// `expires_at` is informational; the client never refreshes ahead of time,
/// only in reaction to a rejected request.
#[derive(Debug, Clone, Default)]
pub struct TokenState {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub expires_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Client for the Mercado Libre REST API
///
/// Create one per application identity. Resource calls return the provider's
/// response whatever its status; only [`MeliClient::authorize`] fails with an
/// error when the provider rejects it.
pub struct MeliClient {
    credentials: ClientCredentials,
    tokens: RwLock<TokenState>,
    config: Config,
    http: Client,
}

impl MeliClient {
    /// Client with identity only, used before authorization
    pub fn new(client_id: u64, client_secret: impl Into<String>) -> Result<Self, SdkError> {
        Self::builder(client_id, client_secret).build()
    }

    /// Client with a pre-obtained access token and no refresh capability
    pub fn with_access_token(
        client_id: u64,
        client_secret: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self, SdkError> {
        Self::builder(client_id, client_secret)
            .access_token(access_token)
            .build()
    }

    /// Client with a full token pair, able to refresh itself
    pub fn with_tokens(
        client_id: u64,
        client_secret: impl Into<String>,
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Result<Self, SdkError> {
        Self::builder(client_id, client_secret)
            .access_token(access_token)
            .refresh_token(refresh_token)
            .build()
    }

    /// Builder for custom configuration (sandbox endpoints, timeouts)
    pub fn builder(client_id: u64, client_secret: impl Into<String>) -> MeliClientBuilder {
        MeliClientBuilder {
            client_id,
            client_secret: client_secret.into(),
            access_token: None,
            refresh_token: None,
            config: Config::default(),
        }
    }

    /// Build the authorization URL for a marketplace
    ///
    /// Pure function of its inputs, no network call. See [`crate::sites`] for
    /// the known hosts.
    pub fn auth_url(&self, auth_host: &str, redirect_uri: &str) -> String {
        format!(
            "{}/authorization?response_type=code&client_id={}&redirect_uri={}",
            auth_host,
            self.credentials.client_id,
            urlencoding::encode(redirect_uri),
        )
    }

    /// Exchange an authorization code for an access/refresh token pair
    ///
    /// On success the token state is replaced. On rejection the provider's
    /// error payload is surfaced as [`SdkError::Authorization`] and the token
    /// state is left untouched.
    pub async fn authorize(&self, code: &str, redirect_uri: &str) -> Result<(), SdkError> {
        let data = auth::exchange_code(
            &self.http,
            &self.config.api_url,
            self.credentials.client_id,
            &self.credentials.client_secret,
            code,
            redirect_uri,
        )
        .await?;

        let mut tokens = self.tokens.write().await;
        *tokens = TokenState {
            access_token: Some(data.access_token),
            refresh_token: data.refresh_token,
            expires_at: data.expires_at,
        };
        Ok(())
    }

    /// Current token state (cloned)
    pub async fn tokens(&self) -> TokenState {
        self.tokens.read().await.clone()
    }

    /// Current access token, if any
    pub async fn access_token(&self) -> Option<String> {
        self.tokens.read().await.access_token.clone()
    }

    /// Current refresh token, if any
    pub async fn refresh_token(&self) -> Option<String> {
        self.tokens.read().await.refresh_token.clone()
    }

    /// GET a resource
    pub async fn get(&self, path: &str) -> Result<ApiResponse, SdkError> {
        self.request::<()>(Method::GET, path, &[], None).await
    }

    /// GET a resource with extra query parameters
    pub async fn get_with_params(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<ApiResponse, SdkError> {
        self.request::<()>(Method::GET, path, params, None).await
    }

    /// POST a JSON body to a resource
    pub async fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        params: &[(&str, &str)],
        body: &T,
    ) -> Result<ApiResponse, SdkError> {
        self.request(Method::POST, path, params, Some(body)).await
    }

    /// PUT a JSON body to a resource
    pub async fn put<T: Serialize + ?Sized>(
        &self,
        path: &str,
        params: &[(&str, &str)],
        body: &T,
    ) -> Result<ApiResponse, SdkError> {
        self.request(Method::PUT, path, params, Some(body)).await
    }

    /// DELETE a resource
    pub async fn delete(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<ApiResponse, SdkError> {
        self.request::<()>(Method::DELETE, path, params, None).await
    }

    /// Issue a request with an explicit method
    ///
    /// At most one silent refresh-and-retry per call: if the provider rejects
    /// the current access token and a refresh token is held, the token pair is
    /// refreshed and the request retried exactly once. Never loops, never
    /// refreshes ahead of a rejection.
    pub async fn request<T: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, &str)],
        body: Option<&T>,
    ) -> Result<ApiResponse, SdkError> {
        // Serialize once so the retry reuses the body unchanged
        let body = body.map(serde_json::to_value).transpose()?;

        let access_token = self.access_token().await;
        let response = self
            .execute(
                method.clone(),
                path,
                params,
                body.as_ref(),
                access_token.as_deref(),
            )
            .await?;

        if !token_rejected(response.status) {
            return Ok(response);
        }

        let Some(refresh_token) = self.refresh_token().await else {
            return Ok(response);
        };

        let new_token = match self.refresh_tokens(&refresh_token).await {
            Ok(token) => token,
            Err(e) => {
                // The caller inspects the original rejection, not the
                // refresh error
                tracing::warn!(error = %e, "token refresh failed, returning original response");
                return Ok(response);
            }
        };

        tracing::debug!(method = %method, path, "retrying with refreshed token");
        self.execute(method, path, params, body.as_ref(), Some(&new_token))
            .await
    }

    /// Execute a single request attempt
    async fn execute(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, &str)],
        body: Option<&serde_json::Value>,
        access_token: Option<&str>,
    ) -> Result<ApiResponse, SdkError> {
        let url = format!("{}{}", self.config.api_url, path);
        tracing::debug!(method = %method, url = %url, "sending request");

        let mut request = self.http.request(method, &url);
        if let Some(token) = access_token {
            request = request.query(&[("access_token", token)]);
        }
        if !params.is_empty() {
            request = request.query(params);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        http::execute(request).await
    }

    // Holds the write lock across the whole read-refresh-write sequence so
    // concurrent callers observe either the old pair or the new one.
    async fn refresh_tokens(&self, refresh_token: &str) -> Result<String, SdkError> {
        let mut tokens = self.tokens.write().await;

        let data = auth::refresh_access_token(
            &self.http,
            &self.config.api_url,
            self.credentials.client_id,
            &self.credentials.client_secret,
            refresh_token,
        )
        .await?;

        tokens.access_token = Some(data.access_token.clone());
        tokens.expires_at = data.expires_at;
        // Keep the old refresh token unless the provider rotated it
        if data.refresh_token.is_some() {
            tokens.refresh_token = data.refresh_token;
        }

        Ok(data.access_token)
    }
}

/// Provider signal that the current access token was not accepted
fn token_rejected(status: StatusCode) -> bool {
    status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN
}

/// Builder for [`MeliClient`]
pub struct MeliClientBuilder {
    client_id: u64,
    client_secret: String,
    access_token: Option<String>,
    refresh_token: Option<String>,
    config: Config,
}

impl MeliClientBuilder {
    /// Start from a pre-obtained access token
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Enable self-refresh with a refresh token
    pub fn refresh_token(mut self, token: impl Into<String>) -> Self {
        self.refresh_token = Some(token.into());
        self
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Point the client at a different base URL (sandbox/mock endpoints)
    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.config.api_url = api_url.into();
        self
    }

    /// Build the client; fails if the HTTP transport cannot be constructed
    pub fn build(self) -> Result<MeliClient, SdkError> {
        let http = http::build_client(&self.config)?;

        Ok(MeliClient {
            credentials: ClientCredentials {
                client_id: self.client_id,
                client_secret: self.client_secret,
            },
            tokens: RwLock::new(TokenState {
                access_token: self.access_token,
                refresh_token: self.refresh_token,
                expires_at: None,
            }),
            config: self.config,
            http,
        })
    }
}
