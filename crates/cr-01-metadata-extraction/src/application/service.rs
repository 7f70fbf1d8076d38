//! Metadata Extraction Service
//!
//! Main service implementing MetadataExtractionApi.

use crate::domain::errors::ExtractionError;
use crate::domain::projection::project_pool;
use crate::ports::inbound::MetadataExtractionApi;
use crate::ports::outbound::{ContentPoolSource, MetadataSink};
use async_trait::async_trait;
use shared_items::{ExtractionStats, MetadataStore, PoolContainer};
use tracing::info;

/// Metadata Extraction Service
///
/// Orchestrates one extraction pass:
/// 1. Load the raw pool
/// 2. Project eligible items into records
/// 3. Persist the store atomically
pub struct MetadataExtractionService<P, S>
where
    P: ContentPoolSource,
    S: MetadataSink,
{
    pool_source: P,
    sink: S,
}

impl<P, S> MetadataExtractionService<P, S>
where
    P: ContentPoolSource,
    S: MetadataSink,
{
    /// Create a new service with the given dependencies.
    pub fn new(pool_source: P, sink: S) -> Self {
        Self { pool_source, sink }
    }
}

#[async_trait]
impl<P, S> MetadataExtractionApi for MetadataExtractionService<P, S>
where
    P: ContentPoolSource,
    S: MetadataSink,
{
    async fn extract(&self) -> Result<ExtractionStats, ExtractionError> {
        let containers = self.pool_source.load_pool().await?;
        info!(
            container_count = containers.len(),
            "Extracting metadata from content pool"
        );

        let store = self.project(&containers);
        self.sink.persist_store(&store).await?;

        info!(
            theory_items = store.stats.theory_items,
            question_items = store.stats.question_items,
            task_items = store.stats.task_items,
            total_items = store.stats.total_items,
            record_count = store.items.len(),
            "Metadata extraction complete"
        );

        Ok(store.stats)
    }

    fn project(&self, containers: &[PoolContainer]) -> MetadataStore {
        project_pool(containers)
    }
}
