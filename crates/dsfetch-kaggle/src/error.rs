//! Error types for Kaggle API operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for Kaggle operations.
pub type KaggleResult<T> = Result<T, KaggleError>;

/// Errors related to Kaggle API operations.
#[derive(Debug, Error)]
pub enum KaggleError {
    /// API request failed with an HTTP error status.
    #[error("Kaggle API request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The requested dataset was not found.
    #[error("Dataset '{dataset}' not found on Kaggle")]
    DatasetNotFound {
        /// The dataset id that was not found
        dataset: String,
    },

    /// The API rejected the supplied credentials.
    #[error("Kaggle rejected the request as unauthorized (status {status}): check your credentials")]
    Unauthorized {
        /// HTTP status code (401 or 403)
        status: u16,
    },

    /// The output directory could not be created or is unusable.
    #[error("Output directory error: {0}")]
    OutputDir(#[from] dsfetch_core::PathError),

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The downloaded archive could not be read or extracted.
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// An archive entry tried to escape the output directory.
    #[error("Archive entry '{entry}' escapes the output directory")]
    UnsafeArchiveEntry {
        /// The offending entry name
        entry: String,
    },

    /// Filesystem error while writing the archive or extracted files.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// The path being written or read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Extraction worker failed to complete.
    #[error("Extraction task failed: {0}")]
    ExtractionTask(String),
}

impl KaggleError {
    /// Build an `Io` variant carrying the affected path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_request_failed_error_message() {
        let error = KaggleError::ApiRequestFailed {
            status: 500,
            url: "https://www.kaggle.com/api/v1/datasets/download/a/b".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("kaggle.com"));
    }

    #[test]
    fn test_dataset_not_found_error_message() {
        let error = KaggleError::DatasetNotFound {
            dataset: "someone/missing-dataset".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("someone/missing-dataset"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_unauthorized_error_message() {
        let error = KaggleError::Unauthorized { status: 401 };
        let msg = error.to_string();
        assert!(msg.contains("401"));
        assert!(msg.contains("credentials"));
    }

    #[test]
    fn test_unsafe_archive_entry_message() {
        let error = KaggleError::UnsafeArchiveEntry {
            entry: "../../etc/passwd".to_string(),
        };
        assert!(error.to_string().contains("../../etc/passwd"));
    }

    #[test]
    fn test_io_error_carries_path() {
        let error = KaggleError::io(
            "/tmp/archive.zip",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = error.to_string();
        assert!(msg.contains("/tmp/archive.zip"));
        assert!(msg.contains("denied"));
    }
}
