//! Fetch handler.
//!
//! Resolves credentials, builds the Kaggle client and downloads the fixed
//! dataset into the resolved output directory.

use std::path::PathBuf;

use anyhow::Result;

use dsfetch_core::{dataset_dir, resolve_credentials};
use dsfetch_kaggle::{DatasetRef, DefaultKaggleClient, KaggleClientConfig};

/// The dataset this tool fetches, compiled in.
pub const DATASET_ID: &str = "nirmalsankalana/fashion-product-text-images-dataset";

/// Download and extract the dataset.
///
/// Returns the absolute path of the populated output directory. Any failure
/// (credential resolution, network, archive) bubbles up for the caller to
/// report; nothing here retries.
pub async fn execute() -> Result<PathBuf> {
    let dataset = DatasetRef::parse(DATASET_ID).expect("compiled-in dataset id is valid");

    let credentials = resolve_credentials()?;
    let output_dir = dataset_dir()?;

    println!("Downloading dataset: {dataset}");
    println!("Download path: {}", output_dir.display());

    tracing::debug!(dataset = DATASET_ID, dir = %output_dir.display(), "starting download");

    let config = KaggleClientConfig::new().with_credentials(credentials);
    let client = DefaultKaggleClient::new(&config);

    let outcome = client.download_dataset(&dataset, &output_dir, false).await?;

    tracing::debug!(
        files = outcome.files_extracted,
        bytes = outcome.bytes_downloaded,
        "download finished"
    );

    Ok(outcome.output_dir)
}
