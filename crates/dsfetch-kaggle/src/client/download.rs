//! Dataset download-and-extract operation.
//!
//! The archive is streamed to a temporary file inside the output directory,
//! extracted in place, then deleted. There is no retry and no partial-result
//! handling: any failure surfaces as a `KaggleError` and the run is over.

use std::path::{Path, PathBuf};

use dsfetch_core::{DirectoryCreationStrategy, ensure_directory};
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{KaggleError, KaggleResult};
use crate::extract::extract_archive;
use crate::http::HttpBackend;
use crate::models::DatasetRef;
use crate::url::build_dataset_download_url;

use super::KaggleClient;

/// Outcome of a successful dataset download.
#[derive(Debug, Clone)]
pub struct DownloadOutcome {
    /// The dataset that was fetched.
    pub dataset: DatasetRef,
    /// Directory the archive was extracted into.
    pub output_dir: PathBuf,
    /// Size of the downloaded archive in bytes.
    pub bytes_downloaded: u64,
    /// Number of files extracted from the archive.
    pub files_extracted: usize,
}

impl<B: HttpBackend> KaggleClient<B> {
    /// Download a dataset archive and extract it into `dest_dir`.
    ///
    /// The output directory is created if missing. When `quiet` is false a
    /// progress bar tracks the transfer.
    pub async fn download_dataset(
        &self,
        dataset: &DatasetRef,
        dest_dir: &Path,
        quiet: bool,
    ) -> KaggleResult<DownloadOutcome> {
        ensure_directory(dest_dir, DirectoryCreationStrategy::AutoCreate)?;

        let url = build_dataset_download_url(&self.config, dataset);
        tracing::info!(dataset = %dataset, url = %url, "downloading dataset archive");

        // The temp archive lives inside the destination so extraction never
        // crosses a filesystem boundary.
        let archive = tempfile::Builder::new()
            .prefix(".dsfetch-")
            .suffix(".zip")
            .tempfile_in(dest_dir)
            .map_err(|e| KaggleError::io(dest_dir, e))?;

        let pb = if quiet {
            None
        } else {
            let pb = ProgressBar::new(0);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec})")
                    .unwrap()
                    .progress_chars("█▓░"),
            );
            Some(pb)
        };

        let bytes_downloaded = match &pb {
            Some(pb) => {
                let on_chunk = |downloaded: u64, total: Option<u64>| {
                    if let Some(total) = total {
                        pb.set_length(total);
                    }
                    pb.set_position(downloaded);
                };
                self.backend
                    .download_to(&url, archive.path(), Some(&on_chunk))
                    .await?
            }
            None => self.backend.download_to(&url, archive.path(), None).await?,
        };

        if let Some(pb) = &pb {
            pb.finish_with_message("Download complete");
        }

        // Extraction is disk-bound; keep it off the async thread.
        let archive_path = archive.path().to_path_buf();
        let extract_dest = dest_dir.to_path_buf();
        let files_extracted =
            tokio::task::spawn_blocking(move || extract_archive(&archive_path, &extract_dest))
                .await
                .map_err(|e| KaggleError::ExtractionTask(e.to_string()))??;

        tracing::info!(
            dataset = %dataset,
            files = files_extracted,
            dir = %dest_dir.display(),
            "dataset extracted"
        );

        let _ = archive.close();

        Ok(DownloadOutcome {
            dataset: dataset.clone(),
            output_dir: dest_dir.to_path_buf(),
            bytes_downloaded,
            files_extracted,
        })
    }
}
