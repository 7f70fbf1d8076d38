//! Outbound Ports (Driven Ports / SPI)

use crate::domain::entities::PrerequisiteGraph;
use crate::domain::errors::OrderingError;
use async_trait::async_trait;
use shared_items::{AggregatedItem, MetadataStore};

/// Source of the aggregated item list.
///
/// This artifact is the input proper; without it there is nothing to order,
/// so every load failure is fatal.
#[async_trait]
pub trait AggregatedItemsSource: Send + Sync {
    /// Load the aggregated items in their aggregation order.
    async fn load_items(&self) -> Result<Vec<AggregatedItem>, OrderingError>;
}

/// Source of the extracted metadata store.
///
/// An absent store degrades to an empty one in the service; a corrupt store
/// does not.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Load the metadata store.
    async fn load_store(&self) -> Result<MetadataStore, OrderingError>;
}

/// Source of the externally authored prerequisite graph.
///
/// Same degradation contract as the metadata store: absence is survivable,
/// corruption is not.
#[async_trait]
pub trait PrerequisiteGraphSource: Send + Sync {
    /// Load the prerequisite graph.
    async fn load_graph(&self) -> Result<PrerequisiteGraph, OrderingError>;
}

/// Destination for the ordered curriculum.
#[async_trait]
pub trait CurriculumSink: Send + Sync {
    /// Persist the ordered items, replacing any previous artifact in full.
    async fn persist_curriculum(&self, items: &[AggregatedItem]) -> Result<(), OrderingError>;
}
