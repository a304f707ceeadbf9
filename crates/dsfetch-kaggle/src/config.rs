//! Public configuration for the Kaggle client.
//!
//! This module provides a stable public API for configuring the client.
//! The internal config is derived from this.

use std::time::Duration;

use dsfetch_core::KaggleCredentials;

/// Configuration for the Kaggle client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use dsfetch_kaggle::KaggleClientConfig;
/// use std::time::Duration;
///
/// let config = KaggleClientConfig::new()
///     .with_connect_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct KaggleClientConfig {
    /// Base URL for the Kaggle API
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Connection timeout (the transfer itself is unbounded)
    pub(crate) connect_timeout: Duration,
    /// Credentials used for HTTP Basic auth
    pub(crate) credentials: Option<KaggleCredentials>,
}

impl Default for KaggleClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.kaggle.com/api/v1".to_string(),
            user_agent: concat!("dsfetch-kaggle/", env!("CARGO_PKG_VERSION")).to_string(),
            connect_timeout: Duration::from_secs(30),
            credentials: None,
        }
    }
}

impl KaggleClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL for the Kaggle API.
    ///
    /// Defaults to `https://www.kaggle.com/api/v1`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the connection timeout.
    ///
    /// Defaults to 30 seconds. Applies to connection establishment only;
    /// dataset archives can take arbitrarily long to transfer.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the credentials used to authenticate requests.
    #[must_use]
    pub fn with_credentials(mut self, credentials: KaggleCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KaggleClientConfig::new();
        assert_eq!(config.base_url, "https://www.kaggle.com/api/v1");
        assert!(config.user_agent.contains("dsfetch-kaggle"));
        assert_eq!(config.connect_timeout, Duration::from_secs(30));
        assert!(config.credentials.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = KaggleClientConfig::new()
            .with_base_url("https://custom.api/")
            .with_user_agent("test-agent")
            .with_connect_timeout(Duration::from_secs(60))
            .with_credentials(KaggleCredentials {
                username: "alice".to_string(),
                key: "s3cret".to_string(),
            });

        assert_eq!(config.base_url, "https://custom.api/");
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.connect_timeout, Duration::from_secs(60));
        assert_eq!(config.credentials.unwrap().username, "alice");
    }
}
