use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{CheckError, DirectoryManager, FileManager};

pub struct MockDirectoryManager;

#[async_trait]
impl DirectoryManager for MockDirectoryManager {
    async fn exists(&self, _path: &Path) -> Result<bool, CheckError> {
        Ok(true)
    }
}

pub struct MockFileManager;

#[async_trait]
impl FileManager for MockFileManager {
    async fn exists(&self, _path: &Path) -> Result<bool, CheckError> {
        Ok(true)
    }
}
