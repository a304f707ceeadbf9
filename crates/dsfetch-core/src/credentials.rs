//! Kaggle credential materialization and resolution.
//!
//! Mirrors the official client's behavior: an existing `kaggle.json` wins and
//! is never rewritten or validated; otherwise the `KAGGLE_USERNAME` /
//! `KAGGLE_KEY` environment pair is persisted once, with the file restricted
//! to owner read/write.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paths::{self, PathError};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

// ============================================================================
// Constants
// ============================================================================

/// Environment variable supplying the Kaggle account name.
pub const USERNAME_ENV: &str = "KAGGLE_USERNAME";

/// Environment variable supplying the Kaggle API key.
pub const KEY_ENV: &str = "KAGGLE_KEY";

/// File name of the credentials file inside the config directory.
pub const CREDENTIALS_FILE_NAME: &str = "kaggle.json";

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur while establishing or resolving credentials.
#[derive(Debug, Error)]
pub enum CredentialsError {
    /// The config directory could not be resolved.
    #[error("Cannot resolve credentials location: {0}")]
    Path(#[from] PathError),

    /// Required environment variables were absent and no file exists.
    #[error(
        "Missing required environment variables: {missing}. \
         Set them in your .env file or create a kaggle.json file manually"
    )]
    MissingEnvVars { missing: String },

    /// The config directory could not be created.
    #[error("Failed to create config directory {path}: {reason}")]
    ConfigDirCreateFailed { path: PathBuf, reason: String },

    /// The credentials file could not be written.
    #[error("Failed to write credentials file {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    /// The credentials file could not be read back for authentication.
    #[error("Failed to read credentials file {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    /// The credentials file exists but does not parse as a username/key pair.
    #[error("Credentials file {path} is not valid: {reason}")]
    Malformed { path: PathBuf, reason: String },
}

// ============================================================================
// Credentials
// ============================================================================

/// A Kaggle account/key pair, as persisted in `kaggle.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KaggleCredentials {
    /// Kaggle account name.
    pub username: String,
    /// Kaggle API key.
    pub key: String,
}

impl KaggleCredentials {
    /// Read the credential pair from the environment.
    ///
    /// Empty values count as absent. The error names every missing variable
    /// so the user can fix both in one pass.
    pub fn from_env() -> Result<Self, CredentialsError> {
        let username = env::var(USERNAME_ENV).ok().filter(|v| !v.is_empty());
        let key = env::var(KEY_ENV).ok().filter(|v| !v.is_empty());

        match (username, key) {
            (Some(username), Some(key)) => Ok(Self { username, key }),
            (username, key) => {
                let mut missing = Vec::new();
                if username.is_none() {
                    missing.push(USERNAME_ENV);
                }
                if key.is_none() {
                    missing.push(KEY_ENV);
                }
                Err(CredentialsError::MissingEnvVars {
                    missing: missing.join(", "),
                })
            }
        }
    }
}

/// Outcome of `ensure_credentials`, reporting which path was taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsStatus {
    /// A credentials file was already present and left untouched.
    Existing(PathBuf),
    /// A credentials file was created from the environment pair.
    Created(PathBuf),
}

impl CredentialsStatus {
    /// Location of the credentials file.
    pub fn path(&self) -> &Path {
        match self {
            Self::Existing(path) | Self::Created(path) => path,
        }
    }
}

// ============================================================================
// Operations
// ============================================================================

/// Location of the credentials file.
pub fn credentials_path() -> Result<PathBuf, CredentialsError> {
    Ok(paths::config_dir()?.join(CREDENTIALS_FILE_NAME))
}

/// Make sure a credentials file exists at the well-known location.
///
/// If the file already exists it is reused as-is; its contents are NOT
/// validated here. Otherwise the environment pair is required and persisted
/// with owner-only permissions. A missing environment pair is the caller's
/// signal to abort before any network activity.
pub fn ensure_credentials() -> Result<CredentialsStatus, CredentialsError> {
    let path = credentials_path()?;

    if path.exists() {
        tracing::debug!(path = %path.display(), "credentials file already present");
        return Ok(CredentialsStatus::Existing(path));
    }

    let credentials = KaggleCredentials::from_env()?;
    write_credentials(&credentials, &path)?;
    tracing::debug!(path = %path.display(), "credentials file created from environment");

    Ok(CredentialsStatus::Created(path))
}

/// Resolve the credentials used to authenticate the download.
///
/// Follows the client's own resolution order: the credentials file if one
/// exists, else the environment pair.
pub fn resolve_credentials() -> Result<KaggleCredentials, CredentialsError> {
    let path = credentials_path()?;

    if path.exists() {
        let content = fs::read_to_string(&path).map_err(|e| CredentialsError::ReadFailed {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        return serde_json::from_str(&content).map_err(|e| CredentialsError::Malformed {
            path,
            reason: e.to_string(),
        });
    }

    KaggleCredentials::from_env()
}

fn write_credentials(
    credentials: &KaggleCredentials,
    path: &Path,
) -> Result<(), CredentialsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| CredentialsError::ConfigDirCreateFailed {
            path: parent.to_path_buf(),
            reason: e.to_string(),
        })?;
    }

    let content =
        serde_json::to_string(credentials).map_err(|e| CredentialsError::WriteFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    fs::write(path, content).map_err(|e| CredentialsError::WriteFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    restrict_permissions(path)?;

    Ok(())
}

/// Restrict the credentials file to owner read/write (0600).
#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<(), CredentialsError> {
    let mut perms = fs::metadata(path)
        .map_err(|e| CredentialsError::WriteFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?
        .permissions();
    perms.set_mode(0o600);
    fs::set_permissions(path, perms).map_err(|e| CredentialsError::WriteFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<(), CredentialsError> {
    // Windows has no direct mode-bits equivalent; the file stays under the
    // user profile directory with its default ACL.
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
