use std::sync::Arc;

use crate::application::services::WaveformService;

#[derive(Clone)]
pub struct AppState {
    pub waveform_service: Arc<WaveformService>,
}
