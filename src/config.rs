// Configuration
// Explicit per-client configuration with priority: explicit > ENV > defaults

use std::time::Duration;

/// Production API endpoint
pub const DEFAULT_API_URL: &str = "https://api.mercadolibre.com";

/// Client configuration
///
/// Passed at construction; there is no process-wide state. Point `api_url`
/// at a sandbox or mock endpoint for testing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for resource and token endpoints
    pub api_url: String,

    /// User-Agent header sent on every request
    pub user_agent: String,

    /// TCP connect timeout
    pub connect_timeout: Duration,

    /// Full request timeout
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: default_user_agent(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    /// Load configuration with environment overrides
    ///
    /// Recognized variables: `MELI_API_URL`, `MELI_CONNECT_TIMEOUT` and
    /// `MELI_REQUEST_TIMEOUT` (both in seconds).
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            api_url: std::env::var("MELI_API_URL").unwrap_or(defaults.api_url),
            user_agent: defaults.user_agent,
            connect_timeout: env_seconds("MELI_CONNECT_TIMEOUT")
                .unwrap_or(defaults.connect_timeout),
            request_timeout: env_seconds("MELI_REQUEST_TIMEOUT")
                .unwrap_or(defaults.request_timeout),
        }
    }

    /// Replace the base API URL (test/sandbox endpoints)
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}

fn default_user_agent() -> String {
    format!("MELI-RUST-SDK-{}", env!("CARGO_PKG_VERSION"))
}

fn env_seconds(key: &str) -> Option<Duration> {
    std::env::var(key)
        .ok()?
        .parse()
        .ok()
        .map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_url, "https://api.mercadolibre.com");
        assert!(config.user_agent.starts_with("MELI-RUST-SDK-"));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_with_api_url() {
        let config = Config::default().with_api_url("http://localhost:3000");
        assert_eq!(config.api_url, "http://localhost:3000");
    }

    #[test]
    fn test_env_overrides() {
        std::env::set_var("MELI_API_URL", "http://sandbox.test");
        std::env::set_var("MELI_REQUEST_TIMEOUT", "120");

        let config = Config::from_env();
        assert_eq!(config.api_url, "http://sandbox.test");
        assert_eq!(config.request_timeout, Duration::from_secs(120));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));

        std::env::remove_var("MELI_API_URL");
        std::env::remove_var("MELI_REQUEST_TIMEOUT");
    }
}
