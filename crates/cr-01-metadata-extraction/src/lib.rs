//! # CR-01: Metadata Extraction Stage
//!
//! Scans the raw content pool and derives one normalized metadata record per
//! eligible item, plus aggregate counts. The resulting store is the ordering
//! stage's lookup source for complexity, relevance, tags, and prerequisites.
//!
//! ## Architecture
//!
//! - **Domain**: The pure pool-to-record projection and its errors
//! - **Ports**: Inbound (MetadataExtractionApi) and Outbound (ContentPoolSource, MetadataSink)
//! - **Adapters**: Filesystem implementations of the outbound ports
//! - **Application**: Service orchestration
//!
//! ## Guarantees
//!
//! Extraction is idempotent: re-running over an unchanged pool produces an
//! identical store, and each run supersedes the prior artifact wholesale.
//! A failed run writes nothing.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;

pub use adapters::{FsContentPool, FsMetadataStore};
pub use application::service::MetadataExtractionService;
pub use domain::errors::ExtractionError;
pub use domain::projection::project_pool;
pub use ports::inbound::MetadataExtractionApi;
pub use ports::outbound::{ContentPoolSource, MetadataSink};
