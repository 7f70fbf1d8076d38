//! Curriculum Ordering Service
//!
//! Main service implementing CurriculumOrderingApi.

use crate::algorithms::{group_by_module, order_module};
use crate::config::OrderingConfig;
use crate::domain::entities::{OrderedCurriculum, OrderingReport, PrerequisiteGraph};
use crate::domain::errors::OrderingError;
use crate::ports::inbound::CurriculumOrderingApi;
use crate::ports::outbound::{
    AggregatedItemsSource, CurriculumSink, MetadataSource, PrerequisiteGraphSource,
};
use async_trait::async_trait;
use shared_items::{AggregatedItem, MetadataStore};
use tracing::{info, warn};

/// Curriculum Ordering Service
///
/// Orchestrates one ordering run:
/// 1. Load the aggregated items (required)
/// 2. Load metadata and prerequisite graph (absent files degrade to defaults)
/// 3. Group by module, order each module, flatten
/// 4. Persist the curriculum atomically
pub struct CurriculumOrderingService<I, M, G, W>
where
    I: AggregatedItemsSource,
    M: MetadataSource,
    G: PrerequisiteGraphSource,
    W: CurriculumSink,
{
    items_source: I,
    metadata_source: M,
    graph_source: G,
    sink: W,
    config: OrderingConfig,
}

impl<I, M, G, W> CurriculumOrderingService<I, M, G, W>
where
    I: AggregatedItemsSource,
    M: MetadataSource,
    G: PrerequisiteGraphSource,
    W: CurriculumSink,
{
    /// Create a new service with default config.
    pub fn new(items_source: I, metadata_source: M, graph_source: G, sink: W) -> Self {
        Self::with_config(
            items_source,
            metadata_source,
            graph_source,
            sink,
            OrderingConfig::default(),
        )
    }

    /// Create a new service with custom config.
    pub fn with_config(
        items_source: I,
        metadata_source: M,
        graph_source: G,
        sink: W,
        config: OrderingConfig,
    ) -> Self {
        Self {
            items_source,
            metadata_source,
            graph_source,
            sink,
            config,
        }
    }

    /// Load the metadata store, degrading an absent file to an empty store.
    ///
    /// Corruption is not degraded: a store that exists but fails to parse
    /// aborts the run rather than silently ordering with defaults.
    async fn load_metadata(&self) -> Result<MetadataStore, OrderingError> {
        match self.metadata_source.load_store().await {
            Ok(store) => Ok(store),
            Err(OrderingError::MetadataNotFound { path }) => {
                warn!(path = %path, "Metadata store missing; ordering with defaults");
                Ok(MetadataStore::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Load the prerequisite graph, degrading an absent file to an empty
    /// graph. Prerequisites then come from metadata records alone.
    async fn load_graph(&self) -> Result<PrerequisiteGraph, OrderingError> {
        match self.graph_source.load_graph().await {
            Ok(graph) => Ok(graph),
            Err(OrderingError::GraphNotFound { path }) => {
                warn!(path = %path, "Prerequisite graph missing; using metadata prerequisites only");
                Ok(PrerequisiteGraph::empty())
            }
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl<I, M, G, W> CurriculumOrderingApi for CurriculumOrderingService<I, M, G, W>
where
    I: AggregatedItemsSource,
    M: MetadataSource,
    G: PrerequisiteGraphSource,
    W: CurriculumSink,
{
    async fn order(&self) -> Result<OrderingReport, OrderingError> {
        // 1. The item list is the input proper; its absence is fatal.
        let items = self.items_source.load_items().await?;
        info!(item_count = items.len(), "Ordering aggregated curriculum items");

        // 2. Optional inputs degrade, corruption aborts.
        let metadata = self.load_metadata().await?;
        let prerequisites = self.load_graph().await?;

        // 3. Order per module and flatten.
        let curriculum = self.order_items(items, &metadata, &prerequisites);

        // 4. Persist before reporting success.
        self.sink.persist_curriculum(&curriculum.items).await?;

        let report = curriculum.report;
        info!(
            module_count = report.module_count,
            total_items = report.total_items,
            resolved_items = report.resolved_items,
            fallback_items = report.fallback_items,
            defaulted_metadata_items = report.defaulted_metadata_items,
            missing_id_items = report.missing_id_items,
            duplicate_id_items = report.duplicate_id_items,
            "Curriculum ordering complete"
        );

        Ok(report)
    }

    fn order_items(
        &self,
        items: Vec<AggregatedItem>,
        metadata: &MetadataStore,
        prerequisites: &PrerequisiteGraph,
    ) -> OrderedCurriculum {
        // Lookup maps are built fresh per invocation; inputs may change
        // between runs, so nothing is cached at the service level.
        let lookup = metadata.by_id();
        let groups = group_by_module(items);

        let mut report = OrderingReport {
            module_count: groups.len(),
            ..OrderingReport::default()
        };
        let mut ordered = Vec::new();

        for group in groups {
            let module = order_module(group, &lookup, prerequisites, &self.config);
            report.resolved_items += module.resolved_items;
            report.fallback_items += module.fallback_items;
            report.defaulted_metadata_items += module.defaulted_metadata_items;
            report.missing_id_items += module.missing_id_items;
            report.duplicate_id_items += module.duplicate_id_items;
            ordered.extend(module.items);
        }
        report.total_items = ordered.len();

        OrderedCurriculum {
            items: ordered,
            report,
        }
    }
}
