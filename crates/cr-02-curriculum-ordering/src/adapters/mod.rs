//! Adapters Layer
//!
//! Filesystem implementations of the outbound ports. Each artifact has its
//! own adapter so a run can mix real and in-memory sources in tests.

pub mod fs_aggregated_items;
pub mod fs_curriculum_writer;
pub mod fs_dependency_graph;
pub mod fs_metadata_source;

pub use fs_aggregated_items::FsAggregatedItems;
pub use fs_curriculum_writer::FsCurriculumWriter;
pub use fs_dependency_graph::FsPrerequisiteGraph;
pub use fs_metadata_source::FsMetadataSource;
