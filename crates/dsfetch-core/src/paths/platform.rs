//! Resolution of the two directories the fetcher touches.
//!
//! Both locations honor an environment override first and fall back to a
//! fixed default. Public API is exposed through the parent module.

use std::env;
use std::path::PathBuf;

use super::error::PathError;

/// Override for the Kaggle configuration directory.
///
/// This is the Kaggle client's own override variable, honored here so a
/// credentials file placed via `KAGGLE_CONFIG_DIR` is found the same way
/// the official client would find it.
pub const CONFIG_DIR_ENV: &str = "KAGGLE_CONFIG_DIR";

/// Override for the dataset output directory.
pub const DATA_DIR_ENV: &str = "DSFETCH_DATA_DIR";

/// Default output directory, relative to the current working directory.
pub const DEFAULT_DATASET_DIR_RELATIVE: &str = "kaggle_dataset";

/// Get the Kaggle configuration directory (where `kaggle.json` lives).
///
/// Resolution order:
/// 1. `KAGGLE_CONFIG_DIR` environment variable (highest priority)
/// 2. `~/.kaggle`
pub fn config_dir() -> Result<PathBuf, PathError> {
    if let Ok(path) = env::var(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(path));
    }

    let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
    Ok(home.join(".kaggle"))
}

/// Get the directory the dataset archive is extracted into.
///
/// Resolution order:
/// 1. `DSFETCH_DATA_DIR` environment variable
/// 2. `./kaggle_dataset` under the current working directory
///
/// The returned path is always absolute so it can be printed as the
/// contract with downstream import tooling.
pub fn dataset_dir() -> Result<PathBuf, PathError> {
    if let Ok(path) = env::var(DATA_DIR_ENV) {
        return absolutize(PathBuf::from(path));
    }

    current_dir().map(|cwd| cwd.join(DEFAULT_DATASET_DIR_RELATIVE))
}

fn absolutize(path: PathBuf) -> Result<PathBuf, PathError> {
    if path.is_absolute() {
        Ok(path)
    } else {
        current_dir().map(|cwd| cwd.join(path))
    }
}

fn current_dir() -> Result<PathBuf, PathError> {
    env::current_dir().map_err(|e| PathError::CurrentDirError(e.to_string()))
}
