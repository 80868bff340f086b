use std::path::Path;

use async_trait::async_trait;

use super::check_error::CheckError;

#[async_trait]
pub trait FileManager: Send + Sync {
    /// `Ok(false)` means the file is absent; `Err` means the probe itself
    /// failed.
    async fn exists(&self, path: &Path) -> Result<bool, CheckError>;
}
