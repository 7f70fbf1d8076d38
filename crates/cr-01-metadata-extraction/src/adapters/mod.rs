//! # Adapters Layer (Hexagonal Architecture)
//!
//! Filesystem implementations of the outbound ports.

mod fs_content_pool;
mod fs_metadata_store;

pub use fs_content_pool::FsContentPool;
pub use fs_metadata_store::FsMetadataStore;
