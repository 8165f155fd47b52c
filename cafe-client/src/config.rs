//! Client configuration

use std::time::Duration;

use crate::{ClientResult, HttpClient};

/// Default booking service base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Client configuration for connecting to the booking service
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service base URL including the `/api` prefix
    pub base_url: String,

    /// Bearer token sent when a call carries no session token of its own
    pub token: Option<String>,

    /// Request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<HttpClient> {
        HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = ClientConfig::default()
            .with_token("abc")
            .with_timeout(Duration::from_millis(500));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.token.as_deref(), Some("abc"));
        assert_eq!(config.timeout, Duration::from_millis(500));
    }
}
