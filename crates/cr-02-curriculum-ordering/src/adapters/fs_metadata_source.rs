//! Filesystem-backed metadata store source

use crate::domain::errors::OrderingError;
use crate::ports::outbound::MetadataSource;
use async_trait::async_trait;
use shared_items::MetadataStore;
use std::path::{Path, PathBuf};

/// Reads the extraction stage's metadata artifact from disk.
pub struct FsMetadataSource {
    path: PathBuf,
}

impl FsMetadataSource {
    /// Create a source for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl MetadataSource for FsMetadataSource {
    async fn load_store(&self) -> Result<MetadataStore, OrderingError> {
        if !self.path.exists() {
            return Err(OrderingError::MetadataNotFound {
                path: self.path.display().to_string(),
            });
        }

        let bytes = std::fs::read(&self.path).map_err(|e| OrderingError::ReadFailed {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_slice(&bytes).map_err(|e| OrderingError::ParseFailed {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })
    }
}
