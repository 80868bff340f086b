use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{AnalysisError, AudioAnalyzer};
use crate::domain::Peaks;

/// Returns a deterministic ramp of the requested length without decoding.
pub struct MockAnalyzer;

#[async_trait]
impl AudioAnalyzer for MockAnalyzer {
    async fn get_peaks(
        &self,
        _file_path: &Path,
        peaks_amount: usize,
        _detect_format: bool,
    ) -> Result<Peaks, AnalysisError> {
        let values = (0..peaks_amount)
            .map(|i| i as f32 / peaks_amount as f32)
            .collect();
        Ok(Peaks::new(values))
    }
}
