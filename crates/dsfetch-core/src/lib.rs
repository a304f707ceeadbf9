//! Core path resolution and credential handling for dsfetch.
//!
//! This crate owns the two pieces of local state the fetcher touches:
//! the Kaggle credentials file and the dataset output directory. It has
//! no network knowledge; the client crate consumes the credentials it
//! resolves.

pub mod credentials;
pub mod paths;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export commonly used types for convenience
pub use credentials::{
    CREDENTIALS_FILE_NAME, CredentialsError, CredentialsStatus, KEY_ENV, KaggleCredentials,
    USERNAME_ENV, credentials_path, ensure_credentials, resolve_credentials,
};
pub use paths::{
    CONFIG_DIR_ENV, DATA_DIR_ENV, DEFAULT_DATASET_DIR_RELATIVE, DirectoryCreationStrategy,
    PathError, config_dir, dataset_dir, ensure_directory, verify_writable,
};
