//! Inbound Ports (Driving Ports / API)

use crate::domain::entities::{OrderedCurriculum, OrderingReport, PrerequisiteGraph};
use crate::domain::errors::OrderingError;
use async_trait::async_trait;
use shared_items::{AggregatedItem, MetadataStore};

/// Primary Curriculum Ordering API
#[async_trait]
pub trait CurriculumOrderingApi: Send + Sync {
    /// Load every upstream artifact, order the curriculum, and persist it.
    ///
    /// This is the main entry point. It:
    /// 1. Loads the aggregated items (required)
    /// 2. Loads the metadata store and prerequisite graph (optional)
    /// 3. Groups by module and orders each module independently
    /// 4. Writes the concatenated curriculum
    async fn order(&self) -> Result<OrderingReport, OrderingError>;

    /// Order already-loaded items.
    ///
    /// Pure with respect to the filesystem; the service exposes it so callers
    /// holding the artifacts in memory can skip the adapters.
    fn order_items(
        &self,
        items: Vec<AggregatedItem>,
        metadata: &MetadataStore,
        prerequisites: &PrerequisiteGraph,
    ) -> OrderedCurriculum;
}
