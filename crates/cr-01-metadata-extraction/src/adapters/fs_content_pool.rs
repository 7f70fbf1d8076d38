//! Filesystem-backed content pool source

use crate::domain::errors::ExtractionError;
use crate::ports::outbound::ContentPoolSource;
use async_trait::async_trait;
use shared_items::PoolContainer;
use std::path::{Path, PathBuf};

/// Reads the raw content pool from a JSON file on disk.
pub struct FsContentPool {
    path: PathBuf,
}

impl FsContentPool {
    /// Create a pool source for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl ContentPoolSource for FsContentPool {
    async fn load_pool(&self) -> Result<Vec<PoolContainer>, ExtractionError> {
        if !self.path.exists() {
            return Err(ExtractionError::PoolNotFound {
                path: self.path.display().to_string(),
            });
        }

        let bytes = std::fs::read(&self.path).map_err(|e| ExtractionError::PoolReadFailed {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_slice(&bytes).map_err(|e| ExtractionError::PoolParseFailed {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })
    }
}
