//! HTTP backend abstraction for the Kaggle API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest. Every request is a single attempt: a failed transfer is
//! terminal for the run, never retried.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use async_trait::async_trait;
use futures_util::StreamExt;
use url::Url;

use crate::error::{KaggleError, KaggleResult};
use crate::models::KaggleConfig;

// ============================================================================
// Progress Reporting
// ============================================================================

/// Progress callback for downloads.
/// Called with (`downloaded_bytes`, `total_bytes` if the server sent one).
pub type ProgressFn<'a> = &'a (dyn Fn(u64, Option<u64>) + Send + Sync);

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can stream a response body to a file.
///
/// This abstraction allows for dependency injection of HTTP clients,
/// making it easy to test the download flow without a network.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Stream a GET response into `dest`, reporting progress along the way.
    ///
    /// Returns the number of bytes written.
    async fn download_to(
        &self,
        url: &Url,
        dest: &Path,
        progress: Option<ProgressFn<'_>>,
    ) -> KaggleResult<u64>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// Sends HTTP Basic auth from the configured credentials and maps error
/// statuses to semantic errors.
pub struct ReqwestBackend {
    client: reqwest::Client,
    credentials: Option<dsfetch_core::KaggleCredentials>,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    ///
    /// Failure to construct the underlying HTTP client is fatal: without it
    /// the tool has no work it can do.
    pub fn new(config: &KaggleConfig) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .expect("failed to create HTTP client");

        Self {
            client,
            credentials: config.credentials.clone(),
        }
    }

    /// Build a request with optional authentication.
    fn build_request(&self, url: &Url) -> reqwest::RequestBuilder {
        let mut request = self.client.get(url.as_str());
        if let Some(ref credentials) = self.credentials {
            request = request.basic_auth(&credentials.username, Some(&credentials.key));
        }
        request
    }
}

/// Map a non-success status to a semantic error.
fn status_error(status: u16, url: &Url) -> KaggleError {
    match status {
        401 | 403 => KaggleError::Unauthorized { status },
        404 => extract_dataset_from_path(url.path()).map_or(
            KaggleError::ApiRequestFailed {
                status,
                url: url.to_string(),
            },
            |dataset| KaggleError::DatasetNotFound { dataset },
        ),
        _ => KaggleError::ApiRequestFailed {
            status,
            url: url.to_string(),
        },
    }
}

/// Try to extract a dataset id from an API download path.
fn extract_dataset_from_path(path: &str) -> Option<String> {
    let path = path.trim_start_matches('/');
    if let Some(rest) = path.strip_prefix("api/v1/datasets/download/") {
        let parts: Vec<&str> = rest.splitn(3, '/').collect();
        if parts.len() >= 2 && !parts[0].is_empty() && !parts[1].is_empty() {
            return Some(format!("{}/{}", parts[0], parts[1]));
        }
    }
    None
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn download_to(
        &self,
        url: &Url,
        dest: &Path,
        progress: Option<ProgressFn<'_>>,
    ) -> KaggleResult<u64> {
        let response = self.build_request(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status.as_u16(), url));
        }

        let total = response.content_length();

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|e| KaggleError::io(parent, e))?;
        }

        let mut file = File::create(dest).map_err(|e| KaggleError::io(dest, e))?;

        let mut downloaded: u64 = 0;
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk)
                .map_err(|e| KaggleError::io(dest, e))?;
            downloaded += chunk.len() as u64;

            if let Some(cb) = progress {
                cb(downloaded, total);
            }
        }

        Ok(downloaded)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Canned behavior for the fake backend.
    #[derive(Clone)]
    pub enum CannedDownload {
        /// Serve these bytes as the response body.
        Bytes(Vec<u8>),
        /// Fail the request with this HTTP status.
        Status(u16),
    }

    /// A fake HTTP backend that serves canned archive bytes.
    pub struct FakeBackend {
        responses: Mutex<HashMap<String, CannedDownload>>,
    }

    impl FakeBackend {
        /// Create a new fake backend.
        pub fn new() -> Self {
            Self {
                responses: Mutex::new(HashMap::new()),
            }
        }

        /// Add a canned response for a URL pattern.
        pub fn with_response(self, url_contains: &str, response: CannedDownload) -> Self {
            self.responses
                .lock()
                .unwrap()
                .insert(url_contains.to_string(), response);
            self
        }

        fn find_response(&self, url: &str) -> Option<CannedDownload> {
            let responses = self.responses.lock().unwrap();
            for (pattern, response) in responses.iter() {
                if url.contains(pattern) {
                    return Some(response.clone());
                }
            }
            None
        }
    }

    impl Default for FakeBackend {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn download_to(
            &self,
            url: &Url,
            dest: &Path,
            progress: Option<ProgressFn<'_>>,
        ) -> KaggleResult<u64> {
            let response = self
                .find_response(url.as_str())
                .unwrap_or(CannedDownload::Status(404));

            match response {
                CannedDownload::Bytes(bytes) => {
                    fs::write(dest, &bytes).map_err(|e| KaggleError::io(dest, e))?;
                    let written = bytes.len() as u64;
                    if let Some(cb) = progress {
                        cb(written, Some(written));
                    }
                    Ok(written)
                }
                CannedDownload::Status(status) => Err(status_error(status, url)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_dataset_from_path() {
        assert_eq!(
            extract_dataset_from_path("/api/v1/datasets/download/owner/data-set"),
            Some("owner/data-set".to_string())
        );

        assert_eq!(
            extract_dataset_from_path("api/v1/datasets/download/owner/data-set"),
            Some("owner/data-set".to_string())
        );

        assert_eq!(extract_dataset_from_path("/api/v1/datasets/download/"), None);
        assert_eq!(extract_dataset_from_path("/other/path"), None);
    }

    #[test]
    fn test_status_error_maps_unauthorized() {
        let url = Url::parse("https://www.kaggle.com/api/v1/datasets/download/a/b").unwrap();

        assert!(matches!(
            status_error(401, &url),
            KaggleError::Unauthorized { status: 401 }
        ));
        assert!(matches!(
            status_error(403, &url),
            KaggleError::Unauthorized { status: 403 }
        ));
    }

    #[test]
    fn test_status_error_maps_not_found_to_dataset() {
        let url = Url::parse("https://www.kaggle.com/api/v1/datasets/download/a/b").unwrap();

        match status_error(404, &url) {
            KaggleError::DatasetNotFound { dataset } => assert_eq!(dataset, "a/b"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_status_error_falls_back_to_api_failure() {
        let url = Url::parse("https://www.kaggle.com/api/v1/other").unwrap();

        assert!(matches!(
            status_error(404, &url),
            KaggleError::ApiRequestFailed { status: 404, .. }
        ));
        assert!(matches!(
            status_error(500, &url),
            KaggleError::ApiRequestFailed { status: 500, .. }
        ));
    }

    #[test]
    fn test_reqwest_backend_creation() {
        let config = KaggleConfig::default();
        let backend = ReqwestBackend::new(&config);
        assert!(backend.credentials.is_none());
    }

    #[test]
    fn test_reqwest_backend_with_credentials() {
        let config = KaggleConfig {
            credentials: Some(dsfetch_core::KaggleCredentials {
                username: "alice".to_string(),
                key: "s3cret".to_string(),
            }),
            ..Default::default()
        };
        let backend = ReqwestBackend::new(&config);
        assert_eq!(backend.credentials.unwrap().username, "alice");
    }
}
