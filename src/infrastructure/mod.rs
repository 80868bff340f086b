pub mod audio;
pub mod download;
pub mod fs;
pub mod observability;
