use std::path::PathBuf;

use async_trait::async_trait;
use futures::StreamExt;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::application::ports::{DownloadError, Downloader};
use crate::domain::{RemoteLocation, RequestOptions};

/// reqwest-backed downloader with fetch-or-reuse semantics: a usable cached
/// copy short-circuits the network entirely.
pub struct HttpDownloader {
    client: reqwest::Client,
}

impl HttpDownloader {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpDownloader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Downloader for HttpDownloader {
    async fn write_to_disc(
        &self,
        options: &RequestOptions,
        location: &RemoteLocation,
    ) -> Result<PathBuf, DownloadError> {
        fs::create_dir_all(&options.server_directory)
            .await
            .map_err(|e| DownloadError::Io(e.to_string()))?;

        let target = options.cache_path();
        if fs::metadata(&target).await.is_ok() {
            tracing::debug!(file = %target.display(), "Reusing cached track");
            return Ok(target);
        }

        let url = format!(
            "http://{}:{}{}",
            location.host, location.port, location.path
        );
        tracing::info!(url = %url, file = %target.display(), "Downloading track");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DownloadError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DownloadError::UpstreamStatus(response.status().as_u16()));
        }

        // Stream into a partial file and rename, so a cached file is never
        // observable half-written.
        let part = options
            .server_directory
            .join(format!("{}.part", options.file_name));
        let mut file = fs::File::create(&part)
            .await
            .map_err(|e| DownloadError::Io(e.to_string()))?;

        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let bytes = match chunk {
                Ok(bytes) => bytes,
                Err(e) => {
                    let _ = fs::remove_file(&part).await;
                    return Err(DownloadError::Transport(e.to_string()));
                }
            };
            if let Err(e) = file.write_all(&bytes).await {
                let _ = fs::remove_file(&part).await;
                return Err(DownloadError::Io(e.to_string()));
            }
        }

        file.flush()
            .await
            .map_err(|e| DownloadError::Io(e.to_string()))?;
        drop(file);

        fs::rename(&part, &target)
            .await
            .map_err(|e| DownloadError::Io(e.to_string()))?;

        Ok(target)
    }
}
