//! Ports Layer
//!
//! Inbound ports drive the ordering stage; outbound ports abstract the
//! upstream artifacts and the ordered-curriculum sink.

pub mod inbound;
pub mod outbound;

pub use inbound::CurriculumOrderingApi;
pub use outbound::{
    AggregatedItemsSource, CurriculumSink, MetadataSource, PrerequisiteGraphSource,
};
