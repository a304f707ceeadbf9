//! URL construction helpers for the Kaggle API.
//!
//! Pure functions for building API URLs, ensuring consistent construction
//! across all calls.

use url::Url;

use crate::models::{DatasetRef, KaggleConfig};

/// Build the URL for the dataset archive download endpoint.
pub fn build_dataset_download_url(config: &KaggleConfig, dataset: &DatasetRef) -> Url {
    let mut url = config.base_url.clone();

    let base_path = url.path().trim_end_matches('/');
    url.set_path(&format!(
        "{base_path}/datasets/download/{}/{}",
        dataset.owner, dataset.slug
    ));

    url
}
