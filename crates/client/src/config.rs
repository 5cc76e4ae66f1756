//! Client configuration

use std::time::Duration;

/// Configuration for the Docmill client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the service including a trailing slash
    /// (e.g. "http://localhost:8181/ws/")
    pub base_url: String,
    /// Timeout applied to each request; cancellation lives entirely in the
    /// transport
    pub timeout: Duration,
    /// User agent announced to the service
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8181/ws/".to_string(),
            timeout: Duration::from_secs(30),
            user_agent: concat!("docmill-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Configuration for a service at `base_url`, defaults elsewhere.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), ..Self::default() }
    }
}
