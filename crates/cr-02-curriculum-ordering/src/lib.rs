//! # CR-02: Curriculum Ordering Stage
//!
//! Per-module topological ordering of aggregated items using Kahn's algorithm
//! with a deterministic pedagogical tie-break, tolerant of cycles and missing
//! metadata.
//!
//! ## Architecture
//!
//! - **Domain**: Core entities (ModuleGroup, ModuleGraph, OrderedCurriculum), the
//!   tie-break key, errors, and checkable invariants
//! - **Algorithms**: Module grouping, graph building, the ordering traversal
//! - **Ports**: Inbound (CurriculumOrderingApi) and Outbound (item/metadata/graph
//!   sources, curriculum sink)
//! - **Adapters**: Filesystem implementations of the outbound ports
//! - **Application**: Service orchestration
//!
//! ## Guarantees
//!
//! Every item that goes in comes out: cycle members and items without usable
//! identifiers are appended after the resolved prefix instead of being dropped.
//! Output is deterministic for identical input.

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use adapters::{FsAggregatedItems, FsCurriculumWriter, FsMetadataSource, FsPrerequisiteGraph};
pub use application::service::CurriculumOrderingService;
pub use config::OrderingConfig;
pub use domain::entities::*;
pub use domain::errors::OrderingError;
pub use domain::value_objects::OrderingKey;
pub use ports::inbound::CurriculumOrderingApi;
pub use ports::outbound::{
    AggregatedItemsSource, CurriculumSink, MetadataSource, PrerequisiteGraphSource,
};
