//! Filesystem-backed curriculum sink

use crate::domain::errors::OrderingError;
use crate::ports::outbound::CurriculumSink;
use async_trait::async_trait;
use shared_items::AggregatedItem;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Persists the ordered curriculum as a pretty-printed JSON array.
///
/// Writes go through a temp file and rename so a crashed run never leaves a
/// truncated artifact behind.
pub struct FsCurriculumWriter {
    path: PathBuf,
}

impl FsCurriculumWriter {
    /// Create a sink writing to the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl CurriculumSink for FsCurriculumWriter {
    async fn persist_curriculum(&self, items: &[AggregatedItem]) -> Result<(), OrderingError> {
        let bytes = serde_json::to_vec_pretty(items).map_err(|e| OrderingError::EncodeFailed {
            message: e.to_string(),
        })?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| OrderingError::WriteFailed {
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
        write(&temp_path).map_err(|e| OrderingError::WriteFailed {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        std::fs::rename(&temp_path, &self.path).map_err(|e| OrderingError::WriteFailed {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })
    }
}
