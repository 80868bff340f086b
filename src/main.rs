use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use wavepeaks::application::services::{AnalysisInvoker, WaveformService};
use wavepeaks::infrastructure::audio::SymphoniaAnalyzer;
use wavepeaks::infrastructure::download::HttpDownloader;
use wavepeaks::infrastructure::fs::{LocalDirectoryManager, LocalFileManager};
use wavepeaks::infrastructure::observability::{TracingConfig, init_tracing};
use wavepeaks::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig::default(), settings.server.port);

    let invoker = AnalysisInvoker::new(Arc::new(SymphoniaAnalyzer));
    let waveform_service = Arc::new(WaveformService::new(
        Arc::new(HttpDownloader::new()),
        Arc::new(LocalDirectoryManager),
        Arc::new(LocalFileManager),
        invoker,
        settings.resolver.clone(),
        settings.routing.clone(),
    ));

    let state = AppState { waveform_service };
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
