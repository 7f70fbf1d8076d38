//! # Curricula Pipeline Runtime
//!
//! The batch entry point for curriculum assembly. One run performs:
//!
//! 1. **Metadata extraction** (cr-01): scan the raw content pool and write a
//!    normalized metadata store. Skippable when the store is prebuilt.
//! 2. **Curriculum ordering** (cr-02): load the aggregated items, order every
//!    module by prerequisite topology with the pedagogical tie-break, and
//!    write the flattened curriculum.
//!
//! The process exits non-zero when a stage fails; a failed run never leaves a
//! partial artifact behind.

mod config;

use anyhow::{Context, Result};
use cr_01_metadata_extraction::{
    FsContentPool, FsMetadataStore, MetadataExtractionApi, MetadataExtractionService,
};
use cr_02_curriculum_ordering::{
    CurriculumOrderingApi, CurriculumOrderingService, FsAggregatedItems, FsCurriculumWriter,
    FsMetadataSource, FsPrerequisiteGraph,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::RuntimeConfig;

async fn run_extraction(config: &RuntimeConfig) -> Result<()> {
    let service = MetadataExtractionService::new(
        FsContentPool::new(&config.content_pool_path),
        FsMetadataStore::new(&config.metadata_store_path),
    );

    let stats = service
        .extract()
        .await
        .context("Metadata extraction failed")?;

    info!(
        total_items = stats.total_items,
        store = %config.metadata_store_path.display(),
        "Extraction stage complete"
    );
    Ok(())
}

async fn run_ordering(config: &RuntimeConfig) -> Result<()> {
    let service = CurriculumOrderingService::new(
        FsAggregatedItems::new(&config.aggregated_items_path),
        FsMetadataSource::new(&config.metadata_store_path),
        FsPrerequisiteGraph::new(&config.dependency_graph_path),
        FsCurriculumWriter::new(&config.ordered_output_path),
    );

    let report = service.order().await.context("Curriculum ordering failed")?;

    info!(
        total_items = report.total_items,
        resolved_items = report.resolved_items,
        fallback_items = report.fallback_items,
        output = %config.ordered_output_path.display(),
        "Ordering stage complete"
    );
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = RuntimeConfig::from_env();

    info!("===========================================");
    info!("  Curricula Pipeline Runtime v0.1.0");
    info!("===========================================");

    if config.skip_extraction {
        info!("Extraction skipped; ordering against the existing metadata store");
    } else {
        run_extraction(&config).await?;
    }

    run_ordering(&config).await?;

    info!("Pipeline run complete");
    Ok(())
}
