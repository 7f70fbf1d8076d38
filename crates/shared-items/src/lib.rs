//! # Shared Items Crate
//!
//! This crate contains the wire-facing types every pipeline stage agrees on:
//! the raw content pool, the extracted metadata store, and the aggregated
//! (module-assigned) items the orderer consumes and emits.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-stage artifact types are defined here.
//! - **Wire Fidelity**: Field names serialize in camelCase to match the
//!   artifacts other tooling already produces; unknown fields on aggregated
//!   items are preserved verbatim through the pipeline.
//! - **Lenient Input**: Every optional field tolerates absence; authoring
//!   gaps degrade item-by-item, never at the artifact level.

pub mod aggregated;
pub mod items;
pub mod metadata;

pub use aggregated::{AggregatedItem, DEFAULT_MODULE_ID};
pub use items::*;
pub use metadata::{ExtractionStats, MetadataRecord, MetadataStore};
