mod local_directory_manager;
mod local_file_manager;
mod mock_fs;

pub use local_directory_manager::LocalDirectoryManager;
pub use local_file_manager::LocalFileManager;
pub use mock_fs::{MockDirectoryManager, MockFileManager};
