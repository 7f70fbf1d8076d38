//! Ordering traversal
//!
//! Kahn's algorithm over the module-local graph, with the tie-break cascade
//! deciding among simultaneously ready items and a complexity-sorted fallback
//! guaranteeing that cycle members and orphans are appended, never dropped.

use crate::algorithms::graph_builder::build_module_graph;
use crate::config::OrderingConfig;
use crate::domain::entities::{ModuleGraph, ModuleGroup, PrerequisiteGraph};
use crate::domain::value_objects::OrderingKey;
use shared_items::{AggregatedItem, MetadataRecord};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Position-level result of one module traversal.
#[derive(Debug)]
pub struct Traversal {
    /// Positions placed by the topological traversal, in placement order.
    pub resolved: Vec<usize>,
    /// Unreached positions, sorted ascending by effective complexity.
    pub fallback: Vec<usize>,
}

/// One module's ordered items plus resolution counts.
#[derive(Debug)]
pub struct OrderedModule {
    pub module_id: String,
    pub items: Vec<AggregatedItem>,
    pub resolved_items: usize,
    pub fallback_items: usize,
    pub defaulted_metadata_items: usize,
    pub missing_id_items: usize,
    pub duplicate_id_items: usize,
}

/// Run the traversal over a built module graph.
///
/// Whenever more than one position is ready, the whole ready set is re-ranked
/// under the tie-break cascade and the minimum is extracted. Positions never
/// reached (cycle members, unorderable items) land in the fallback,
/// stable-sorted by complexity alone so ties keep input order.
pub fn traverse_module(graph: &ModuleGraph, keys: &[OrderingKey], orderable: &[bool]) -> Traversal {
    let node_count = graph.node_count();
    let mut in_degree = graph.in_degree.clone();
    let mut placed = vec![false; node_count];

    let mut ready: Vec<usize> = graph
        .zero_degree_nodes()
        .into_iter()
        .filter(|&position| orderable[position])
        .collect();
    let mut resolved = Vec::with_capacity(node_count);

    while !ready.is_empty() {
        ready.sort_unstable_by(|&a, &b| keys[a].cmp(&keys[b]));
        let next = ready.remove(0);
        placed[next] = true;
        resolved.push(next);

        for &successor in graph.successors(next) {
            let degree = &mut in_degree[successor];
            *degree = degree.saturating_sub(1);
            if *degree == 0 {
                ready.push(successor);
            }
        }
    }

    let mut fallback: Vec<usize> = (0..node_count).filter(|&p| !placed[p]).collect();
    fallback.sort_by_key(|&position| keys[position].complexity);

    Traversal { resolved, fallback }
}

/// Order one module end to end: build its graph, resolve tie-break keys,
/// traverse, and reassemble the items.
pub fn order_module(
    group: ModuleGroup,
    metadata: &HashMap<&str, &MetadataRecord>,
    prerequisites: &PrerequisiteGraph,
    config: &OrderingConfig,
) -> OrderedModule {
    let ModuleGroup { module_id, items } = group;

    let built = build_module_graph(&module_id, &items, metadata, prerequisites);

    let mut defaulted_metadata_items = 0;
    let keys: Vec<OrderingKey> = items
        .iter()
        .enumerate()
        .map(|(position, item)| {
            let record = match item.lookup_id() {
                Some(id) => {
                    let found = metadata.get(id).copied();
                    if found.is_none() {
                        defaulted_metadata_items += 1;
                        warn!(
                            module_id = %module_id,
                            item_id = id,
                            "No metadata record for item; ordering with defaults"
                        );
                    }
                    found
                }
                None => None,
            };
            OrderingKey::resolve(position, item, record, config)
        })
        .collect();

    let traversal = traverse_module(&built.graph, &keys, &built.orderable);
    let resolved_items = traversal.resolved.len();
    let fallback_items = traversal.fallback.len();

    let mut slots: Vec<Option<AggregatedItem>> = items.into_iter().map(Some).collect();
    let mut ordered = Vec::with_capacity(slots.len());
    for &position in traversal.resolved.iter().chain(&traversal.fallback) {
        if let Some(item) = slots[position].take() {
            ordered.push(item);
        }
    }

    debug!(
        module_id = %module_id,
        resolved = resolved_items,
        fallback = fallback_items,
        "Module traversal complete"
    );

    OrderedModule {
        module_id,
        items: ordered,
        resolved_items,
        fallback_items,
        defaulted_metadata_items,
        missing_id_items: built.missing_id_items,
        duplicate_id_items: built.duplicate_id_items,
    }
}
