//! Client configuration options.

use std::time::Duration;

/// Default API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.onfido.com/v3";

/// Configuration for the Onfido client.
///
/// # Example
///
/// ```
/// use onfido::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_endpoint("https://api.eu.onfido.com/v3");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base API endpoint; relative request paths are joined to this
    pub endpoint: String,
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("onfido-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the base API endpoint (regional endpoints, test servers).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
