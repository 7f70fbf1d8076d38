//! # Extracted Metadata Types
//!
//! The metadata store is the persisted output of extraction and the ordering
//! pipeline's lookup source. One record per non-irrelevant pool item; records
//! are immutable once written and superseded wholesale on re-extraction.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::items::{ItemKind, LearningPath};

/// The ordering-relevant projection of a single pool item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataRecord {
    /// The item identifier used for prerequisite lookups.
    pub id: String,
    /// Which pool array the item came from.
    pub kind: ItemKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<u8>,
    /// Relevance as declared on theory items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interview_relevance: Option<u8>,
    /// Relevance as declared on question and task items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interview_frequency: Option<u8>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_path: Option<LearningPath>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    /// Stable position across the whole extraction scan.
    ///
    /// Assigned from a single incrementing counter, so it is collision-free
    /// regardless of how many items a container holds.
    pub original_index: u64,
}

impl MetadataRecord {
    /// Relevance score regardless of which variant declared it.
    ///
    /// Theory items declare `interviewRelevance`, questions and tasks declare
    /// `interviewFrequency`; either satisfies the primary comparison.
    pub fn primary_relevance(&self) -> Option<u8> {
        self.interview_relevance.or(self.interview_frequency)
    }

    /// The relevance field matching this record's kind, ignoring the other.
    pub fn declared_relevance(&self) -> Option<u8> {
        match self.kind {
            ItemKind::Theory => self.interview_relevance,
            ItemKind::Question | ItemKind::Task => self.interview_frequency,
        }
    }
}

/// Aggregate counts produced by one extraction run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionStats {
    pub theory_items: u64,
    pub question_items: u64,
    pub task_items: u64,
    pub total_items: u64,
}

/// The persisted metadata artifact: records plus run statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetadataStore {
    #[serde(default)]
    pub items: Vec<MetadataRecord>,
    #[serde(default)]
    pub stats: ExtractionStats,
}

impl MetadataStore {
    /// Builds the id-to-record lookup for one ordering run.
    ///
    /// First occurrence wins when ids collide; the map is locally scoped per
    /// invocation, never cached across runs.
    pub fn by_id(&self) -> HashMap<&str, &MetadataRecord> {
        let mut lookup = HashMap::with_capacity(self.items.len());
        for record in &self.items {
            lookup.entry(record.id.as_str()).or_insert(record);
        }
        lookup
    }
}
