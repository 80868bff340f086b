mod mock_analyzer;
mod peak_reducer;
mod symphonia_analyzer;

pub use mock_analyzer::MockAnalyzer;
pub use peak_reducer::reduce_peaks;
pub use symphonia_analyzer::SymphoniaAnalyzer;
