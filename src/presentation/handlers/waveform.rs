use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::services::{LocalWaveformError, RemoteWaveformError};
use crate::domain::{Peaks, WaveformRequest};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct WaveformResponse {
    pub peaks: Vec<f32>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn peaks_response(peaks: Peaks) -> axum::response::Response {
    (
        StatusCode::OK,
        Json(WaveformResponse {
            peaks: peaks.values,
        }),
    )
        .into_response()
}

fn error_response(status: StatusCode, error: impl ToString) -> axum::response::Response {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}

#[tracing::instrument(skip(state, request))]
pub async fn remote_waveform_handler(
    State(state): State<AppState>,
    Query(request): Query<WaveformRequest>,
) -> impl IntoResponse {
    match state.waveform_service.get_remote_wave_data(request).await {
        Ok(peaks) => {
            tracing::info!(peaks = peaks.len(), "Remote waveform request served");
            peaks_response(peaks)
        }
        Err(e) => {
            tracing::error!(error = %e, "Remote waveform request failed");
            let status = match &e {
                RemoteWaveformError::Validation(_) | RemoteWaveformError::Routing(_) => {
                    StatusCode::BAD_REQUEST
                }
                RemoteWaveformError::Download(_) => StatusCode::BAD_GATEWAY,
                RemoteWaveformError::Analysis(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            error_response(status, e)
        }
    }
}

#[tracing::instrument(skip(state, request))]
pub async fn local_waveform_handler(
    State(state): State<AppState>,
    Query(request): Query<WaveformRequest>,
) -> impl IntoResponse {
    match state.waveform_service.get_local_wave_data(request).await {
        Ok(peaks) => {
            tracing::info!(peaks = peaks.len(), "Local waveform request served");
            peaks_response(peaks)
        }
        Err(e) => {
            tracing::error!(error = %e, "Local waveform request failed");
            let status = match &e {
                LocalWaveformError::Validation(_) => StatusCode::BAD_REQUEST,
                LocalWaveformError::DirectoryNotFound(_) | LocalWaveformError::FileNotFound(_) => {
                    StatusCode::NOT_FOUND
                }
                LocalWaveformError::Check(_) | LocalWaveformError::Analysis(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            error_response(status, e)
        }
    }
}
