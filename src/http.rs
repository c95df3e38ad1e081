// HTTP transport
// Builds the shared reqwest client and collects responses into ApiResponse.
// Retry policy does not live here: the single refresh-retry is the client's.

use reqwest::{Client, RequestBuilder};

use crate::config::Config;
use crate::error::SdkError;
use crate::response::ApiResponse;

/// Build the pooled HTTP client from configuration
pub(crate) fn build_client(config: &Config) -> Result<Client, SdkError> {
    Client::builder()
        .user_agent(&config.user_agent)
        .connect_timeout(config.connect_timeout)
        .timeout(config.request_timeout)
        .build()
        .map_err(SdkError::Transport)
}

/// Execute a prepared request and read the full response
pub(crate) async fn execute(request: RequestBuilder) -> Result<ApiResponse, SdkError> {
    let response = request.send().await?;

    let status = response.status();
    let headers = response.headers().clone();
    let body = response.text().await?;

    tracing::debug!(status = %status, "received response");

    Ok(ApiResponse {
        status,
        headers,
        body,
    })
}
