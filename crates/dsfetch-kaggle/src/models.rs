//! Internal types for the Kaggle API client.
//!
//! The internal config is derived from the public `KaggleClientConfig`;
//! `DatasetRef` is re-exported as part of the public API.

use std::time::Duration;

use dsfetch_core::KaggleCredentials;
use serde::{Deserialize, Serialize};
use url::Url;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the Kaggle client.
#[derive(Debug, Clone)]
pub struct KaggleConfig {
    /// Base URL for the Kaggle API (default: <https://www.kaggle.com/api/v1>)
    pub base_url: Url,
    /// User agent string for HTTP requests
    pub user_agent: String,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Credentials for HTTP Basic auth
    pub credentials: Option<KaggleCredentials>,
}

impl Default for KaggleConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse("https://www.kaggle.com/api/v1")
                .expect("default Kaggle API URL is valid"),
            user_agent: concat!("dsfetch-kaggle/", env!("CARGO_PKG_VERSION")).to_string(),
            connect_timeout: Duration::from_secs(30),
            credentials: None,
        }
    }
}

// ============================================================================
// Dataset Reference
// ============================================================================

/// Reference to a Kaggle dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatasetRef {
    /// Dataset owner (user or organization)
    pub owner: String,
    /// Dataset slug
    pub slug: String,
}

impl DatasetRef {
    /// Create a new dataset reference.
    pub fn new(owner: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            slug: slug.into(),
        }
    }

    /// Parse a dataset reference from an `owner/slug` id string.
    pub fn parse(dataset_id: &str) -> Option<Self> {
        let parts: Vec<&str> = dataset_id.splitn(2, '/').collect();
        if parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty() {
            Some(Self {
                owner: parts[0].to_string(),
                slug: parts[1].to_string(),
            })
        } else {
            None
        }
    }

    /// Get the full dataset id (owner/slug).
    pub fn id(&self) -> String {
        format!("{}/{}", self.owner, self.slug)
    }
}

impl std::fmt::Display for DatasetRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.slug)
    }
}
