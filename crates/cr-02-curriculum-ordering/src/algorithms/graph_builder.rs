//! Module-local graph builder
//!
//! Builds the directed prerequisite graph for one module's items. Nodes are
//! item positions; edges come from the union of metadata-declared and
//! graph-declared prerequisites that resolve within the module.

use crate::domain::entities::{ModuleGraph, PrerequisiteGraph};
use shared_items::{AggregatedItem, MetadataRecord};
use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};
use tracing::warn;

/// A module's graph plus the data-integrity counts observed while building it.
#[derive(Debug)]
pub struct BuiltGraph {
    pub graph: ModuleGraph,
    /// Whether each position owns its identifier and takes part in the
    /// traversal. Id-less items and later duplicates are unorderable; they
    /// are appended by the fallback instead.
    pub orderable: Vec<bool>,
    pub missing_id_items: usize,
    pub duplicate_id_items: usize,
}

/// Build the prerequisite graph for one module.
///
/// The id-to-position index is module-local and first occurrence wins on
/// duplicate ids; a later duplicate keeps its own node but is unorderable,
/// exactly like an item with no id at all. Prerequisite identifiers that do
/// not resolve within the module are discarded: cross-module sequencing is a
/// higher-level concern and is not enforced by this pass.
pub fn build_module_graph(
    module_id: &str,
    items: &[AggregatedItem],
    metadata: &HashMap<&str, &MetadataRecord>,
    prerequisites: &PrerequisiteGraph,
) -> BuiltGraph {
    let mut graph = ModuleGraph::new(items.len());
    let mut orderable = vec![false; items.len()];
    let mut position_of: HashMap<&str, usize> = HashMap::with_capacity(items.len());
    let mut missing_id_items = 0;
    let mut duplicate_id_items = 0;

    for (position, item) in items.iter().enumerate() {
        match item.lookup_id() {
            Some(id) => match position_of.entry(id) {
                Entry::Vacant(slot) => {
                    slot.insert(position);
                    orderable[position] = true;
                }
                Entry::Occupied(_) => {
                    duplicate_id_items += 1;
                    warn!(
                        module_id,
                        item_id = id,
                        position,
                        "Duplicate item id in module; the earlier occurrence keeps the id"
                    );
                }
            },
            None => {
                missing_id_items += 1;
                warn!(
                    module_id,
                    position, "Item has no usable id and cannot be ordered by prerequisites"
                );
            }
        }
    }

    for (position, item) in items.iter().enumerate() {
        if !orderable[position] {
            continue;
        }
        let Some(id) = item.lookup_id() else {
            continue;
        };

        // Union of both prerequisite sources, deduplicated.
        let mut prerequisite_ids: BTreeSet<&str> = BTreeSet::new();
        if let Some(record) = metadata.get(id) {
            prerequisite_ids.extend(record.prerequisites.iter().map(String::as_str));
        }
        prerequisite_ids.extend(prerequisites.prerequisites_of(id).iter().map(String::as_str));

        for prerequisite_id in prerequisite_ids {
            if let Some(&from) = position_of.get(prerequisite_id) {
                graph.add_edge(from, position);
            }
        }
    }

    BuiltGraph {
        graph,
        orderable,
        missing_id_items,
        duplicate_id_items,
    }
}
