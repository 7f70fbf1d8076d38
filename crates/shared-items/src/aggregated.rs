//! # Aggregated Item Types
//!
//! An aggregated item has already been assigned to a module by the external
//! clustering step. It is the unit the orderer consumes and, reordered, the
//! unit the final curriculum artifact contains.

use serde::{Deserialize, Serialize};

/// Module assigned to items that arrive without one.
pub const DEFAULT_MODULE_ID: &str = "default";

/// A module-assigned item flowing through the ordering pipeline.
///
/// Only the fields the orderer interprets are typed; everything else the
/// clustering step attached rides along in `extra` and is persisted verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedItem {
    /// Position assigned during aggregation, unique across the input.
    pub index: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_id: Option<String>,
    /// Identifier for metadata and prerequisite lookups. Items without one
    /// are unorderable orphans but are never dropped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<u8>,
    /// Uninterpreted fields, preserved through ordering.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl AggregatedItem {
    /// The identifier used for graph and metadata lookups.
    ///
    /// Empty strings count as missing; the invariant is a non-empty id or
    /// orphan treatment, nothing in between.
    pub fn lookup_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// The module this item belongs to, defaulting when unassigned.
    pub fn module_or_default(&self) -> &str {
        self.module_id
            .as_deref()
            .filter(|module| !module.is_empty())
            .unwrap_or(DEFAULT_MODULE_ID)
    }
}
