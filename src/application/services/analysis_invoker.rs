use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{AnalysisError, AudioAnalyzer};
use crate::domain::{Peaks, RequestOptions};

/// The single analysis contract both pipelines converge on: parameterizes the
/// analyzer from the resolved options, adds no transformation of its own.
#[derive(Clone)]
pub struct AnalysisInvoker {
    analyzer: Arc<dyn AudioAnalyzer>,
}

impl AnalysisInvoker {
    pub fn new(analyzer: Arc<dyn AudioAnalyzer>) -> Self {
        Self { analyzer }
    }

    pub async fn analyze(
        &self,
        file_path: &Path,
        options: &RequestOptions,
    ) -> Result<Peaks, AnalysisError> {
        tracing::debug!(
            file = %file_path.display(),
            peaks_amount = options.peaks_amount,
            detect_format = options.detect_format,
            "Invoking audio analysis"
        );

        self.analyzer
            .get_peaks(file_path, options.peaks_amount, options.detect_format)
            .await
    }
}
