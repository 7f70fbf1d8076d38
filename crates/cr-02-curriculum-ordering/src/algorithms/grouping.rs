//! Module grouping
//!
//! Partitions the aggregated item list by module identifier. Pure function;
//! ordering within a module is the traversal's job, not this one's.

use crate::domain::entities::ModuleGroup;
use shared_items::AggregatedItem;
use std::collections::HashMap;

/// Partition items by module, defaulting absent identifiers to `"default"`.
///
/// Modules appear in first-seen input order; items keep their input order
/// within each group. Every item lands in exactly one group.
pub fn group_by_module(items: Vec<AggregatedItem>) -> Vec<ModuleGroup> {
    let mut groups: Vec<ModuleGroup> = Vec::new();
    let mut slot_by_module: HashMap<String, usize> = HashMap::new();

    for item in items {
        let module_id = item.module_or_default().to_string();
        let slot = *slot_by_module.entry(module_id.clone()).or_insert_with(|| {
            groups.push(ModuleGroup::new(module_id));
            groups.len() - 1
        });
        groups[slot].items.push(item);
    }

    groups
}
