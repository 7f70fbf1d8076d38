//! Inbound Ports (Driving Ports / API)

use crate::domain::errors::ExtractionError;
use async_trait::async_trait;
use shared_items::{ExtractionStats, MetadataStore, PoolContainer};

/// Primary Metadata Extraction API
#[async_trait]
pub trait MetadataExtractionApi: Send + Sync {
    /// Run one extraction pass.
    ///
    /// This is the main entry point. It:
    /// 1. Loads the raw content pool
    /// 2. Projects every eligible item into a metadata record
    /// 3. Persists the store, superseding any prior artifact
    /// 4. Returns the aggregate counts
    async fn extract(&self) -> Result<ExtractionStats, ExtractionError>;

    /// Project an already loaded pool into a metadata store.
    ///
    /// Pure function with no I/O.
    fn project(&self, containers: &[PoolContainer]) -> MetadataStore;
}
