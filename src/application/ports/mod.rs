mod audio_analyzer;
mod check_error;
mod directory_manager;
mod downloader;
mod file_manager;

pub use audio_analyzer::{AnalysisError, AudioAnalyzer};
pub use check_error::CheckError;
pub use directory_manager::DirectoryManager;
pub use downloader::{DownloadError, Downloader};
pub use file_manager::FileManager;
