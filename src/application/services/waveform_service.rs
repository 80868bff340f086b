use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{
    AnalysisError, CheckError, DirectoryManager, DownloadError, Downloader, FileManager,
};
use crate::application::services::{AnalysisInvoker, FlightRegistry};
use crate::domain::{
    OptionsError, Peaks, RequestOptions, ResolverDefaults, RoutingError, RoutingTable,
    WaveformRequest,
};

/// Orchestrates the two acquisition pipelines. Each call is one linear chain
/// of fallible async stages; the first failure short-circuits the rest.
pub struct WaveformService {
    downloader: Arc<dyn Downloader>,
    directory_manager: Arc<dyn DirectoryManager>,
    file_manager: Arc<dyn FileManager>,
    invoker: AnalysisInvoker,
    defaults: ResolverDefaults,
    routing: RoutingTable,
    flights: FlightRegistry<Peaks, RemoteWaveformError>,
}

impl WaveformService {
    pub fn new(
        downloader: Arc<dyn Downloader>,
        directory_manager: Arc<dyn DirectoryManager>,
        file_manager: Arc<dyn FileManager>,
        invoker: AnalysisInvoker,
        defaults: ResolverDefaults,
        routing: RoutingTable,
    ) -> Self {
        Self {
            downloader,
            directory_manager,
            file_manager,
            invoker,
            defaults,
            routing,
            flights: FlightRegistry::new(),
        }
    }

    /// Fetch-or-reuse the track from its content service, then analyze.
    ///
    /// Concurrent calls that resolve to the same cache file share one
    /// download-and-analyze flight instead of stampeding the cache.
    pub async fn get_remote_wave_data(
        &self,
        request: WaveformRequest,
    ) -> Result<Peaks, RemoteWaveformError> {
        let options = RequestOptions::resolve(request, &self.defaults)?;
        let location = self.routing.resolve(&options)?;

        tracing::debug!(
            track_id = %options.track_id,
            host = %location.host,
            path = %location.path,
            "Resolved remote waveform request"
        );

        let key = options.file_name.clone();
        let downloader = Arc::clone(&self.downloader);
        let invoker = self.invoker.clone();

        self.flights
            .run(&key, async move {
                let file_path = downloader.write_to_disc(&options, &location).await?;
                let peaks = invoker.analyze(&file_path, &options).await?;
                Ok(peaks)
            })
            .await
    }

    /// Serve the track from the local cache only; never downloads.
    pub async fn get_local_wave_data(
        &self,
        request: WaveformRequest,
    ) -> Result<Peaks, LocalWaveformError> {
        let options = RequestOptions::resolve(request, &self.defaults)?;

        if !self
            .directory_manager
            .exists(&options.server_directory)
            .await?
        {
            return Err(LocalWaveformError::DirectoryNotFound(
                options.server_directory.clone(),
            ));
        }

        let file_path = options.cache_path();
        if !self.file_manager.exists(&file_path).await? {
            return Err(LocalWaveformError::FileNotFound(file_path));
        }

        let peaks = self.invoker.analyze(&file_path, &options).await?;
        Ok(peaks)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RemoteWaveformError {
    #[error("validation: {0}")]
    Validation(#[from] OptionsError),
    #[error("routing: {0}")]
    Routing(#[from] RoutingError),
    #[error("download: {0}")]
    Download(#[from] DownloadError),
    #[error("analysis: {0}")]
    Analysis(#[from] AnalysisError),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LocalWaveformError {
    #[error("validation: {0}")]
    Validation(#[from] OptionsError),
    #[error("existence check: {0}")]
    Check(#[from] CheckError),
    #[error("server directory does not exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),
    #[error("file does not exist: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("analysis: {0}")]
    Analysis(#[from] AnalysisError),
}
