//! Filesystem-backed metadata store sink

use crate::domain::errors::ExtractionError;
use crate::ports::outbound::MetadataSink;
use async_trait::async_trait;
use shared_items::MetadataStore;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Persists the metadata store as pretty-printed JSON.
///
/// Writes go through a temp file and rename so a crashed run never leaves a
/// truncated artifact behind.
pub struct FsMetadataStore {
    path: PathBuf,
}

impl FsMetadataStore {
    /// Create a sink writing to the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl MetadataSink for FsMetadataStore {
    async fn persist_store(&self, store: &MetadataStore) -> Result<(), ExtractionError> {
        let bytes =
            serde_json::to_vec_pretty(store).map_err(|e| ExtractionError::StoreEncodeFailed {
                message: e.to_string(),
            })?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ExtractionError::StoreWriteFailed {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;
        }

        let temp_path = self.path.with_extension("tmp");
        let write = |path: &Path| -> std::io::Result<()> {
            let mut file = std::fs::File::create(path)?;
            file.write_all(&bytes)?;
            file.sync_all()
        };
        write(&temp_path).map_err(|e| ExtractionError::StoreWriteFailed {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        std::fs::rename(&temp_path, &self.path).map_err(|e| ExtractionError::StoreWriteFailed {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })
    }
}
