//! Ports module for Metadata Extraction
//!
//! Defines inbound (API) and outbound (SPI) port traits.

pub mod inbound;
pub mod outbound;

pub use inbound::MetadataExtractionApi;
pub use outbound::{ContentPoolSource, MetadataSink};
