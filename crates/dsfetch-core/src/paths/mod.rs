//! Path utilities for the dsfetch credentials and output locations.
//!
//! This module provides the canonical path resolution for the tool:
//! - Kaggle configuration directory (holds `kaggle.json`)
//! - Dataset output directory
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - the CLI handles user-facing output
//! - Environment overrides are resolved here and nowhere else

mod ensure;
mod error;
mod platform;

// Re-export public API

// Error type
pub use error::PathError;

// Directory resolution
pub use platform::{
    CONFIG_DIR_ENV, DATA_DIR_ENV, DEFAULT_DATASET_DIR_RELATIVE, config_dir, dataset_dir,
};

// Directory operations
pub use ensure::{DirectoryCreationStrategy, ensure_directory, verify_writable};
