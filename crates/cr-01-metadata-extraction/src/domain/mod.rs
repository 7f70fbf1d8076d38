//! Domain module for Metadata Extraction
//!
//! Contains the pure projection logic and error types.

pub mod errors;
pub mod projection;

pub use errors::*;
pub use projection::project_pool;
