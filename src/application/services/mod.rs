mod analysis_invoker;
mod flight_registry;
mod waveform_service;

pub use analysis_invoker::AnalysisInvoker;
pub use flight_registry::FlightRegistry;
pub use waveform_service::{LocalWaveformError, RemoteWaveformError, WaveformService};
