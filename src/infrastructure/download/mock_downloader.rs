use std::path::PathBuf;

use async_trait::async_trait;

use crate::application::ports::{DownloadError, Downloader};
use crate::domain::{RemoteLocation, RequestOptions};

/// Returns the deterministic cache path without touching the network or disk.
pub struct MockDownloader;

#[async_trait]
impl Downloader for MockDownloader {
    async fn write_to_disc(
        &self,
        options: &RequestOptions,
        _location: &RemoteLocation,
    ) -> Result<PathBuf, DownloadError> {
        Ok(options.cache_path())
    }
}
