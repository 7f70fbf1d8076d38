//! Runtime configuration for the curriculum pipeline.

use std::path::PathBuf;

/// File locations and stage toggles for one pipeline run.
///
/// Defaults point at the conventional `data/` layout; every path can be
/// overridden through the `CURRICULA_*` environment variables.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Raw content pool consumed by metadata extraction.
    pub content_pool_path: PathBuf,
    /// Metadata store written by extraction and read by ordering.
    pub metadata_store_path: PathBuf,
    /// Module-assigned items to order.
    pub aggregated_items_path: PathBuf,
    /// Externally authored prerequisite graph.
    pub dependency_graph_path: PathBuf,
    /// Final ordered curriculum artifact.
    pub ordered_output_path: PathBuf,
    /// Skip extraction and order against an existing metadata store.
    pub skip_extraction: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            content_pool_path: PathBuf::from("data/content-pool.json"),
            metadata_store_path: PathBuf::from("data/items-metadata.json"),
            aggregated_items_path: PathBuf::from("data/aggregated-items.json"),
            dependency_graph_path: PathBuf::from("data/dependency-graph.json"),
            ordered_output_path: PathBuf::from("data/ordered-items.json"),
            skip_extraction: false,
        }
    }
}

impl RuntimeConfig {
    /// Default configuration with environment overrides applied.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup. Tests pass
    /// a plain map here instead of mutating the process environment.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup("CURRICULA_CONTENT_POOL") {
            config.content_pool_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("CURRICULA_METADATA_STORE") {
            config.metadata_store_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("CURRICULA_AGGREGATED_ITEMS") {
            config.aggregated_items_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("CURRICULA_DEPENDENCY_GRAPH") {
            config.dependency_graph_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("CURRICULA_ORDERED_OUTPUT") {
            config.ordered_output_path = PathBuf::from(path);
        }
        if let Some(flag) = lookup("CURRICULA_SKIP_EXTRACTION") {
            config.skip_extraction = flag_enabled(&flag);
        }

        config
    }
}

fn flag_enabled(value: &str) -> bool {
    matches!(value.trim(), "1" | "true" | "yes")
}
