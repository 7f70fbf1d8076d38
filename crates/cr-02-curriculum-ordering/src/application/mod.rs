//! Application Layer
//!
//! Service orchestration for curriculum ordering.

pub mod service;

pub use service::CurriculumOrderingService;
