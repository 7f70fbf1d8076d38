//! Application layer for Metadata Extraction

pub mod service;

pub use service::MetadataExtractionService;
