//! Filesystem-based output service implementation

use async_trait::async_trait;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::application::{ApplicationError, OutputService};

/// Output service that writes generated source to the filesystem
pub struct FileSystemOutputService;

impl FileSystemOutputService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OutputService for FileSystemOutputService {
    async fn write_source(&self, path: &Path, content: &str) -> Result<(), ApplicationError> {
        // Create parent directory if needed
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                ApplicationError::OutputError(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let mut file = fs::File::create(path).await.map_err(|e| {
            ApplicationError::OutputError(format!(
                "Failed to create file {}: {}",
                path.display(),
                e
            ))
        })?;

        file.write_all(content.as_bytes()).await.map_err(|e| {
            ApplicationError::OutputError(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.flush().await.map_err(|e| {
            ApplicationError::OutputError(format!("Failed to flush file {}: {}", path.display(), e))
        })?;

        debug!(path = %path.display(), bytes = content.len(), "Wrote source file");
        Ok(())
    }
}

impl Default for FileSystemOutputService {
    fn default() -> Self {
        Self::new()
    }
}
