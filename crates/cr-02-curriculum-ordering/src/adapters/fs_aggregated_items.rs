//! Filesystem-backed aggregated items source

use crate::domain::errors::OrderingError;
use crate::ports::outbound::AggregatedItemsSource;
use async_trait::async_trait;
use shared_items::AggregatedItem;
use std::path::{Path, PathBuf};

/// Reads the module-assigned item list from a JSON file on disk.
pub struct FsAggregatedItems {
    path: PathBuf,
}

impl FsAggregatedItems {
    /// Create a source for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl AggregatedItemsSource for FsAggregatedItems {
    async fn load_items(&self) -> Result<Vec<AggregatedItem>, OrderingError> {
        if !self.path.exists() {
            return Err(OrderingError::ItemsNotFound {
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
