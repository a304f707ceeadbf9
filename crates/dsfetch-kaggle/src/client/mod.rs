//! Kaggle client for downloading dataset archives.
//!
//! This module provides the main client interface. The client is generic
//! over an HTTP backend, allowing for easy testing. Use
//! `DefaultKaggleClient` for production code.

mod download;

pub use download::DownloadOutcome;

use url::Url;

use crate::config::KaggleClientConfig;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::KaggleConfig;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default Kaggle client using the reqwest HTTP backend.
pub type DefaultKaggleClient = KaggleClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the Kaggle API.
///
/// The generic parameter `B` is an implementation detail - external code
/// should not instantiate this directly but use `DefaultKaggleClient::new()`.
pub struct KaggleClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: KaggleConfig,
}

impl DefaultKaggleClient {
    /// Create a new client with the given configuration.
    ///
    /// Constructing the client builds the underlying HTTP machinery; a
    /// failure there is fatal, there is no degraded mode to fall back to.
    pub fn new(config: &KaggleClientConfig) -> Self {
        let internal_config = Self::to_internal_config(config);
        let backend = ReqwestBackend::new(&internal_config);
        Self {
            backend,
            config: internal_config,
        }
    }

    fn to_internal_config(config: &KaggleClientConfig) -> KaggleConfig {
        KaggleConfig {
            base_url: Url::parse(&config.base_url).unwrap_or_else(|_| {
                Url::parse("https://www.kaggle.com/api/v1").expect("default URL is valid")
            }),
            user_agent: config.user_agent.clone(),
            connect_timeout: config.connect_timeout,
            credentials: config.credentials.clone(),
        }
    }
}

impl<B: HttpBackend> KaggleClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: KaggleConfig, backend: B) -> Self {
        Self { backend, config }
    }
}
