use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::{RemoteLocation, RequestOptions};

/// Fetch-or-reuse acquisition of one track file.
///
/// On success the returned path points at a readable file under the cache
/// directory, whether or not a network fetch actually happened. The
/// downloader owns the reuse decision; pipelines never re-check existence on
/// the remote path.
#[async_trait]
pub trait Downloader: Send + Sync {
    async fn write_to_disc(
        &self,
        options: &RequestOptions,
        location: &RemoteLocation,
    ) -> Result<PathBuf, DownloadError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DownloadError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("upstream responded with status {0}")]
    UpstreamStatus(u16),
    #[error("io error: {0}")]
    Io(String),
}
