use std::io::ErrorKind;
use std::path::Path;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{CheckError, FileManager};

pub struct LocalFileManager;

#[async_trait]
impl FileManager for LocalFileManager {
    async fn exists(&self, path: &Path) -> Result<bool, CheckError> {
        match fs::metadata(path).await {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                Err(CheckError::PermissionDenied(e.to_string()))
            }
            Err(e) => Err(CheckError::Io(e.to_string())),
        }
    }
}
