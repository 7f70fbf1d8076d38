//! Algorithms module for Curriculum Ordering
//!
//! Contains:
//! - Module grouping
//! - Module-local graph building
//! - The ordering traversal (Kahn's algorithm with tie-break)

pub mod graph_builder;
pub mod grouping;
pub mod kahn;

pub use graph_builder::build_module_graph;
pub use grouping::group_by_module;
pub use kahn::{order_module, traverse_module};
