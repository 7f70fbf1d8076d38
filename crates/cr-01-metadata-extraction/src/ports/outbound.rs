//! Outbound Ports (Driven Ports / SPI)

use crate::domain::errors::ExtractionError;
use async_trait::async_trait;
use shared_items::{MetadataStore, PoolContainer};

/// Source of the raw content pool.
///
/// The pool is authored externally; this stage only ever reads it.
#[async_trait]
pub trait ContentPoolSource: Send + Sync {
    /// Load the full pool.
    ///
    /// An absent source is `PoolNotFound`; a present but malformed source is
    /// `PoolParseFailed`. Both abort the extraction run.
    async fn load_pool(&self) -> Result<Vec<PoolContainer>, ExtractionError>;
}

/// Destination for the extracted metadata store.
#[async_trait]
pub trait MetadataSink: Send + Sync {
    /// Persist the store, replacing any previous artifact in full.
    async fn persist_store(&self, store: &MetadataStore) -> Result<(), ExtractionError>;
}
