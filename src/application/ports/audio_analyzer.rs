use std::path::Path;

use async_trait::async_trait;

use crate::domain::Peaks;

/// Decode an audio file and reduce it to a peak sequence.
#[async_trait]
pub trait AudioAnalyzer: Send + Sync {
    /// When `detect_format` is set the analyzer probes the container itself
    /// instead of trusting the file extension.
    async fn get_peaks(
        &self,
        file_path: &Path,
        peaks_amount: usize,
        detect_format: bool,
    ) -> Result<Peaks, AnalysisError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error("unsupported or unreadable container: {0}")]
    UnsupportedFormat(String),
    #[error("decoding failed: {0}")]
    DecodingFailed(String),
    #[error("io error: {0}")]
    Io(String),
}
