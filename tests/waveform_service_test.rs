use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use wavepeaks::application::ports::{
    AnalysisError, AudioAnalyzer, CheckError, DirectoryManager, DownloadError, Downloader,
    FileManager,
};
use wavepeaks::application::services::{
    AnalysisInvoker, LocalWaveformError, RemoteWaveformError, WaveformService,
};
use wavepeaks::domain::{
    OptionsError, Peaks, RemoteLocation, RequestOptions, ResolverDefaults, RoutingError,
    RoutingTable, WaveformRequest,
};
use wavepeaks::infrastructure::fs::{MockDirectoryManager, MockFileManager};

struct CountingDownloader {
    calls: Arc<AtomicUsize>,
    delay: Duration,
}

#[async_trait]
impl Downloader for CountingDownloader {
    async fn write_to_disc(
        &self,
        options: &RequestOptions,
        _location: &RemoteLocation,
    ) -> Result<PathBuf, DownloadError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(options.cache_path())
    }
}

struct CountingAnalyzer {
    calls: Arc<AtomicUsize>,
    seen_peaks_amount: Arc<AtomicUsize>,
}

#[async_trait]
impl AudioAnalyzer for CountingAnalyzer {
    async fn get_peaks(
        &self,
        _file_path: &Path,
        peaks_amount: usize,
        _detect_format: bool,
    ) -> Result<Peaks, AnalysisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen_peaks_amount.store(peaks_amount, Ordering::SeqCst);
        let values = (1..=peaks_amount).map(|i| i as f32 / 10.0).collect();
        Ok(Peaks::new(values))
    }
}

struct FixedDirectoryManager(bool);

#[async_trait]
impl DirectoryManager for FixedDirectoryManager {
    async fn exists(&self, _path: &Path) -> Result<bool, CheckError> {
        Ok(self.0)
    }
}

struct CountingFileManager {
    calls: Arc<AtomicUsize>,
    exists: bool,
}

#[async_trait]
impl FileManager for CountingFileManager {
    async fn exists(&self, _path: &Path) -> Result<bool, CheckError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.exists)
    }
}

struct Harness {
    service: Arc<WaveformService>,
    downloader_calls: Arc<AtomicUsize>,
    analyzer_calls: Arc<AtomicUsize>,
    seen_peaks_amount: Arc<AtomicUsize>,
    file_manager_calls: Arc<AtomicUsize>,
}

fn harness(directory_exists: bool, file_exists: bool, download_delay: Duration) -> Harness {
    let downloader_calls = Arc::new(AtomicUsize::new(0));
    let analyzer_calls = Arc::new(AtomicUsize::new(0));
    let seen_peaks_amount = Arc::new(AtomicUsize::new(0));
    let file_manager_calls = Arc::new(AtomicUsize::new(0));

    let service = Arc::new(WaveformService::new(
        Arc::new(CountingDownloader {
            calls: Arc::clone(&downloader_calls),
            delay: download_delay,
        }),
        Arc::new(FixedDirectoryManager(directory_exists)),
        Arc::new(CountingFileManager {
            calls: Arc::clone(&file_manager_calls),
            exists: file_exists,
        }),
        AnalysisInvoker::new(Arc::new(CountingAnalyzer {
            calls: Arc::clone(&analyzer_calls),
            seen_peaks_amount: Arc::clone(&seen_peaks_amount),
        })),
        ResolverDefaults::default(),
        RoutingTable::default(),
    ));

    Harness {
        service,
        downloader_calls,
        analyzer_calls,
        seen_peaks_amount,
        file_manager_calls,
    }
}

fn request(track_id: &str) -> WaveformRequest {
    WaveformRequest {
        track_id: Some(track_id.to_string()),
        ..WaveformRequest::default()
    }
}

#[tokio::test]
async fn given_missing_track_id_when_getting_remote_then_validation_fails_before_io() {
    let harness = harness(true, true, Duration::ZERO);

    let error = harness
        .service
        .get_remote_wave_data(WaveformRequest::default())
        .await
        .unwrap_err();

    assert_eq!(
        error,
        RemoteWaveformError::Validation(OptionsError::MissingTrackId)
    );
    assert_eq!(harness.downloader_calls.load(Ordering::SeqCst), 0);
    assert_eq!(harness.analyzer_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_unknown_service_when_strict_then_remote_fails_before_io() {
    let routing = RoutingTable {
        strict: true,
        ..RoutingTable::default()
    };
    let downloader_calls = Arc::new(AtomicUsize::new(0));
    let service = WaveformService::new(
        Arc::new(CountingDownloader {
            calls: Arc::clone(&downloader_calls),
            delay: Duration::ZERO,
        }),
        Arc::new(MockDirectoryManager),
        Arc::new(MockFileManager),
        AnalysisInvoker::new(Arc::new(CountingAnalyzer {
            calls: Arc::new(AtomicUsize::new(0)),
            seen_peaks_amount: Arc::new(AtomicUsize::new(0)),
        })),
        ResolverDefaults::default(),
        routing,
    );

    let mut unknown = request("123");
    unknown.service = Some("nosuch".to_string());
    let error = service.get_remote_wave_data(unknown).await.unwrap_err();

    assert_eq!(
        error,
        RemoteWaveformError::Routing(RoutingError::UnknownService("nosuch".to_string()))
    );
    assert_eq!(downloader_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_valid_remote_request_when_getting_then_peaks_pass_through_untouched() {
    let harness = harness(true, true, Duration::ZERO);

    let mut req = request("123");
    req.peaks_amount = Some(50);
    let peaks = harness.service.get_remote_wave_data(req).await.unwrap();

    let expected: Vec<f32> = (1..=50).map(|i| i as f32 / 10.0).collect();
    assert_eq!(peaks.values, expected);
    assert_eq!(harness.downloader_calls.load(Ordering::SeqCst), 1);
    assert_eq!(harness.analyzer_calls.load(Ordering::SeqCst), 1);
    assert_eq!(harness.seen_peaks_amount.load(Ordering::SeqCst), 50);
}

#[tokio::test]
async fn given_missing_directory_when_getting_local_then_file_is_never_probed() {
    let harness = harness(false, true, Duration::ZERO);

    let error = harness
        .service
        .get_local_wave_data(request("123"))
        .await
        .unwrap_err();

    assert!(matches!(error, LocalWaveformError::DirectoryNotFound(_)));
    assert_eq!(harness.file_manager_calls.load(Ordering::SeqCst), 0);
    assert_eq!(harness.analyzer_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_missing_file_when_getting_local_then_analyzer_is_never_invoked() {
    let harness = harness(true, false, Duration::ZERO);

    let error = harness
        .service
        .get_local_wave_data(request("123"))
        .await
        .unwrap_err();

    assert!(matches!(error, LocalWaveformError::FileNotFound(_)));
    assert_eq!(harness.file_manager_calls.load(Ordering::SeqCst), 1);
    assert_eq!(harness.analyzer_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_missing_track_id_when_getting_local_then_validation_fails_before_io() {
    let harness = harness(true, true, Duration::ZERO);

    let error = harness
        .service
        .get_local_wave_data(WaveformRequest::default())
        .await
        .unwrap_err();

    assert_eq!(
        error,
        LocalWaveformError::Validation(OptionsError::MissingTrackId)
    );
    assert_eq!(harness.file_manager_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_unchanged_inputs_when_getting_local_twice_then_results_are_identical() {
    let harness = harness(true, true, Duration::ZERO);

    let first = harness
        .service
        .get_local_wave_data(request("123"))
        .await
        .unwrap();
    let second = harness
        .service
        .get_local_wave_data(request("123"))
        .await
        .unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn given_overlapping_identical_remote_requests_then_one_flight_is_shared() {
    let harness = harness(true, true, Duration::from_millis(100));

    let first = {
        let service = Arc::clone(&harness.service);
        tokio::spawn(async move { service.get_remote_wave_data(request("123")).await })
    };
    let second = {
        let service = Arc::clone(&harness.service);
        tokio::spawn(async move { service.get_remote_wave_data(request("123")).await })
    };

    let first = first.await.unwrap().unwrap();
    let second = second.await.unwrap().unwrap();

    assert_eq!(first, second);
    assert_eq!(harness.downloader_calls.load(Ordering::SeqCst), 1);
    assert_eq!(harness.analyzer_calls.load(Ordering::SeqCst), 1);

    // A request after completion starts a fresh flight.
    harness
        .service
        .get_remote_wave_data(request("123"))
        .await
        .unwrap();
    assert_eq!(harness.downloader_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn given_distinct_track_ids_when_overlapping_then_flights_are_independent() {
    let harness = harness(true, true, Duration::from_millis(50));

    let first = {
        let service = Arc::clone(&harness.service);
        tokio::spawn(async move { service.get_remote_wave_data(request("123")).await })
    };
    let second = {
        let service = Arc::clone(&harness.service);
        tokio::spawn(async move { service.get_remote_wave_data(request("456")).await })
    };

    first.await.unwrap().unwrap();
    second.await.unwrap().unwrap();

    assert_eq!(harness.downloader_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn given_failing_download_when_getting_remote_then_error_propagates_untouched() {
    struct FailingDownloader;

    #[async_trait]
    impl Downloader for FailingDownloader {
        async fn write_to_disc(
            &self,
            _options: &RequestOptions,
            _location: &RemoteLocation,
        ) -> Result<PathBuf, DownloadError> {
            Err(DownloadError::Transport("connection reset".to_string()))
        }
    }

    let analyzer_calls = Arc::new(AtomicUsize::new(0));
    let service = WaveformService::new(
        Arc::new(FailingDownloader),
        Arc::new(MockDirectoryManager),
        Arc::new(MockFileManager),
        AnalysisInvoker::new(Arc::new(CountingAnalyzer {
            calls: Arc::clone(&analyzer_calls),
            seen_peaks_amount: Arc::new(AtomicUsize::new(0)),
        })),
        ResolverDefaults::default(),
        RoutingTable::default(),
    );

    let error = service.get_remote_wave_data(request("123")).await.unwrap_err();

    assert_eq!(
        error,
        RemoteWaveformError::Download(DownloadError::Transport("connection reset".to_string()))
    );
    assert_eq!(analyzer_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_failing_probe_when_getting_local_then_check_error_propagates() {
    struct FailingDirectoryManager;

    #[async_trait]
    impl DirectoryManager for FailingDirectoryManager {
        async fn exists(&self, _path: &Path) -> Result<bool, CheckError> {
            Err(CheckError::PermissionDenied("downloads".to_string()))
        }
    }

    let file_manager_calls = Arc::new(AtomicUsize::new(0));
    let service = WaveformService::new(
        Arc::new(CountingDownloader {
            calls: Arc::new(AtomicUsize::new(0)),
            delay: Duration::ZERO,
        }),
        Arc::new(FailingDirectoryManager),
        Arc::new(CountingFileManager {
            calls: Arc::clone(&file_manager_calls),
            exists: true,
        }),
        AnalysisInvoker::new(Arc::new(CountingAnalyzer {
            calls: Arc::new(AtomicUsize::new(0)),
            seen_peaks_amount: Arc::new(AtomicUsize::new(0)),
        })),
        ResolverDefaults::default(),
        RoutingTable::default(),
    );

    let error = service.get_local_wave_data(request("123")).await.unwrap_err();

    assert_eq!(
        error,
        LocalWaveformError::Check(CheckError::PermissionDenied("downloads".to_string()))
    );
    assert_eq!(file_manager_calls.load(Ordering::SeqCst), 0);
}
