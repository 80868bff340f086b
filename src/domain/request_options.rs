use std::path::PathBuf;

use serde::Deserialize;

use super::track::{TrackFormat, TrackId, TrackIdError};

/// Raw per-request input, typically deserialized from a query string.
/// Everything is optional; resolution fills the gaps from [`ResolverDefaults`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WaveformRequest {
    pub track_id: Option<String>,
    pub track_format: Option<TrackFormat>,
    pub peaks_amount: Option<usize>,
    pub server_directory: Option<PathBuf>,
    pub service: Option<String>,
    pub detect_format: Option<bool>,
}

/// Deployment-level defaults applied during resolution.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResolverDefaults {
    pub track_format: TrackFormat,
    pub peaks_amount: usize,
    pub server_directory: PathBuf,
    pub service: String,
    pub detect_format: bool,
}

impl Default for ResolverDefaults {
    fn default() -> Self {
        Self {
            track_format: TrackFormat::Ogg,
            peaks_amount: 200,
            server_directory: PathBuf::from("./downloads"),
            service: "jamendo".to_string(),
            detect_format: false,
        }
    }
}

/// Fully resolved request options, immutable for the rest of the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    pub track_id: TrackId,
    pub track_format: TrackFormat,
    pub peaks_amount: usize,
    pub server_directory: PathBuf,
    pub service: String,
    pub detect_format: bool,
    /// Always derived as `{track_id}.{extension}`, never caller-supplied.
    pub file_name: String,
}

impl RequestOptions {
    /// Resolves a raw request against the configured defaults.
    ///
    /// This is the single validation gate shared by both pipelines: a missing
    /// or malformed track id fails here, before any I/O happens.
    pub fn resolve(
        request: WaveformRequest,
        defaults: &ResolverDefaults,
    ) -> Result<Self, OptionsError> {
        let track_id = match request.track_id {
            Some(raw) => TrackId::parse(raw)?,
            None => return Err(OptionsError::MissingTrackId),
        };

        let track_format = request.track_format.unwrap_or(defaults.track_format);
        let peaks_amount = request.peaks_amount.unwrap_or(defaults.peaks_amount);
        if peaks_amount == 0 {
            return Err(OptionsError::InvalidPeaksAmount);
        }

        let file_name = format!("{}.{}", track_id, track_format.extension());

        Ok(Self {
            track_id,
            track_format,
            peaks_amount,
            server_directory: request
                .server_directory
                .unwrap_or_else(|| defaults.server_directory.clone()),
            service: request.service.unwrap_or_else(|| defaults.service.clone()),
            detect_format: request.detect_format.unwrap_or(defaults.detect_format),
            file_name,
        })
    }

    /// Path of the cached audio file under the cache directory.
    pub fn cache_path(&self) -> PathBuf {
        self.server_directory.join(&self.file_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("track id is required")]
    MissingTrackId,
    #[error(transparent)]
    InvalidTrackId(#[from] TrackIdError),
    #[error("peaks amount must be positive")]
    InvalidPeaksAmount,
}
