//! Application Configuration
//!
//! Where the API lives and how requests identify themselves.

use std::time::Duration;

/// API gateway configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Base URL of the REST API; paths are appended segment by segment
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// User-Agent header
    pub user_agent: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::production()
    }
}

impl GatewayConfig {
    pub fn production() -> Self {
        Self {
            base_url: "https://api.villa-booking.app/api".to_string(),
            timeout: Duration::from_secs(15),
            user_agent: platform::client::user_agent("villa", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Local backend with a generous timeout for debugging
    pub fn development() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080/api".to_string(),
            timeout: Duration::from_secs(60),
            ..Self::production()
        }
    }

    /// Same settings against another base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_overrides() {
        let config = GatewayConfig::development();
        assert!(config.base_url.starts_with("http://127.0.0.1"));
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert!(config.user_agent.starts_with("villa/"));
    }

    #[test]
    fn test_builders() {
        let config = GatewayConfig::default()
            .with_base_url("http://localhost:1234")
            .with_timeout(Duration::from_secs(1));
        assert_eq!(config.base_url, "http://localhost:1234");
        assert_eq!(config.timeout, Duration::from_secs(1));
    }
}
