use std::path::Path;

use async_trait::async_trait;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::application::ports::{AnalysisError, AudioAnalyzer};
use crate::domain::Peaks;

use super::peak_reducer::reduce_peaks;

/// symphonia-backed analyzer: decode to mono f32, reduce to peaks.
pub struct SymphoniaAnalyzer;

#[async_trait]
impl AudioAnalyzer for SymphoniaAnalyzer {
    async fn get_peaks(
        &self,
        file_path: &Path,
        peaks_amount: usize,
        detect_format: bool,
    ) -> Result<Peaks, AnalysisError> {
        let path = file_path.to_path_buf();

        // Decoding is CPU-bound, keep it off the async scheduler.
        let samples = tokio::task::spawn_blocking(move || decode_to_mono(&path, detect_format))
            .await
            .map_err(|e| AnalysisError::Io(format!("analysis task: {}", e)))??;

        Ok(Peaks::new(reduce_peaks(&samples, peaks_amount)))
    }
}

fn decode_to_mono(path: &Path, detect_format: bool) -> Result<Vec<f32>, AnalysisError> {
    let file = std::fs::File::open(path).map_err(|e| AnalysisError::Io(e.to_string()))?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if !detect_format {
        if let Some(extension) = path.extension().and_then(|e| e.to_str()) {
            hint.with_extension(extension);
        }
    }

    let format_opts = FormatOptions::default();
    let metadata_opts = MetadataOptions::default();
    let decoder_opts = DecoderOptions::default();

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &format_opts, &metadata_opts)
        .map_err(|e| AnalysisError::UnsupportedFormat(format!("probe: {}", e)))?;

    let mut format = probed.format;

    let track = format
        .default_track()
        .ok_or_else(|| AnalysisError::DecodingFailed("no audio track found".to_string()))?;

    let track_id = track.id;
    let codec_params = track.codec_params.clone();
    let channels = codec_params.channels.map(|c| c.count()).unwrap_or(1);

    let mut decoder = symphonia::default::get_codecs()
        .make(&codec_params, &decoder_opts)
        .map_err(|e| AnalysisError::UnsupportedFormat(format!("codec: {}", e)))?;

    let mut all_samples: Vec<f32> = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(p) => p,
            Err(symphonia::core::errors::Error::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => {
                return Err(AnalysisError::DecodingFailed(format!("packet: {}", e)));
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(d) => d,
            Err(symphonia::core::errors::Error::DecodeError(e)) => {
                tracing::warn!(error = %e, "Skipping corrupt audio frame");
                continue;
            }
            Err(e) => {
                return Err(AnalysisError::DecodingFailed(format!("decode: {}", e)));
            }
        };

        let spec = *decoded.spec();
        let num_frames = decoded.frames();
        if num_frames == 0 {
            continue;
        }

        let mut sample_buf = SampleBuffer::<f32>::new(num_frames as u64, spec);
        sample_buf.copy_interleaved_ref(decoded);
        let samples = sample_buf.samples();

        // Downmix to mono if multi-channel
        if channels > 1 {
            for frame in samples.chunks(channels) {
                let mono: f32 = frame.iter().sum::<f32>() / channels as f32;
                all_samples.push(mono);
            }
        } else {
            all_samples.extend_from_slice(samples);
        }
    }

    if all_samples.is_empty() {
        return Err(AnalysisError::DecodingFailed(
            "no audio samples decoded".to_string(),
        ));
    }

    tracing::debug!(
        samples = all_samples.len(),
        file = %path.display(),
        "Audio decoded to mono PCM"
    );

    Ok(all_samples)
}
