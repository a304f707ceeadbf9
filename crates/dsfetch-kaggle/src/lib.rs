//! Kaggle API client for dsfetch.
//!
//! Implements the narrow slice of the Kaggle API v1 the fetcher needs:
//! authenticated dataset archive download with transparent zip extraction.
//! The client is generic over an HTTP backend so tests run without a
//! network; use [`DefaultKaggleClient`] in production code.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// Allow private types in public type alias - DefaultKaggleClient is meant to
// be used as an opaque client, not through its internal generic structure
#![allow(private_interfaces)]
#![allow(private_bounds)]

mod client;
mod config;
mod error;
mod extract;
mod http;
mod models;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{DefaultKaggleClient, DownloadOutcome, KaggleClient};

// Configuration
pub use config::KaggleClientConfig;

// Dataset reference
pub use models::DatasetRef;

// Errors
pub use error::{KaggleError, KaggleResult};

// Silence unused dev-dependency warnings
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tokio_test as _;
