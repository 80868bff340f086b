mod health;
mod waveform;

pub use health::health_handler;
pub use waveform::{local_waveform_handler, remote_waveform_handler};
