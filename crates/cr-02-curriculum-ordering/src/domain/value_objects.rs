//! Value objects for Curriculum Ordering

use crate::config::OrderingConfig;
use shared_items::{AggregatedItem, MetadataRecord};
use std::cmp::Ordering;

/// Resolved ordering attributes for one aggregated item.
///
/// Implements `Ord` as the tie-break cascade applied whenever several items
/// are simultaneously ready: lower complexity wins, then higher relevance,
/// then denser tagging, with the aggregation position as the reproducible
/// final fallback.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OrderingKey {
    /// Effective complexity (metadata, then inline, then default).
    pub complexity: u8,
    /// Relevance from whichever field the metadata declares.
    pub primary_relevance: u8,
    /// Relevance from the field matching the record's kind.
    pub declared_relevance: u8,
    /// Number of tags on the metadata record.
    pub tag_count: usize,
    /// Position assigned during aggregation.
    pub input_index: u64,
    /// Position within the module group, unique by construction.
    pub position: usize,
}

impl OrderingKey {
    /// Resolve the key for an item at `position` in its module.
    ///
    /// A missing record degrades field by field: complexity falls back to the
    /// item's inline value and then the configured default, relevance and tags
    /// to the configured default and zero. No combination of gaps prevents a
    /// key from being built.
    pub fn resolve(
        position: usize,
        item: &AggregatedItem,
        record: Option<&MetadataRecord>,
        config: &OrderingConfig,
    ) -> Self {
        let complexity = record
            .and_then(|r| r.complexity)
            .or(item.complexity)
            .unwrap_or(config.default_complexity);
        let primary_relevance = record
            .and_then(MetadataRecord::primary_relevance)
            .unwrap_or(config.default_relevance);
        let declared_relevance = record
            .and_then(MetadataRecord::declared_relevance)
            .unwrap_or(config.default_relevance);
        let tag_count = record.map(|r| r.tags.len()).unwrap_or(0);

        Self {
            complexity,
            primary_relevance,
            declared_relevance,
            tag_count,
            input_index: item.index,
            position,
        }
    }
}

impl Ord for OrderingKey {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lower complexity = higher priority
        self.complexity
            .cmp(&other.complexity)
            // Higher relevance = higher priority (so reverse comparison)
            .then_with(|| other.primary_relevance.cmp(&self.primary_relevance))
            .then_with(|| other.declared_relevance.cmp(&self.declared_relevance))
            // Denser tagging = higher priority
            .then_with(|| other.tag_count.cmp(&self.tag_count))
            // Reproducible fallback: aggregation order
            .then_with(|| self.input_index.cmp(&other.input_index))
            .then_with(|| self.position.cmp(&other.position))
    }
}

impl PartialOrd for OrderingKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
