//! Domain invariants for Curriculum Ordering
//!
//! Checkable statements the ordering must uphold for every module on every
//! run. Exercised directly by unit and property tests.

use super::entities::ModuleGraph;
use shared_items::AggregatedItem;

/// Within the resolved prefix, every retained prerequisite edge is respected:
/// if `from -> to` exists and both were resolved, `from` comes first.
pub fn invariant_topological_order(resolved: &[usize], graph: &ModuleGraph) -> bool {
    let mut rank = vec![None; graph.node_count()];
    for (order, &position) in resolved.iter().enumerate() {
        rank[position] = Some(order);
    }

    for from in 0..graph.node_count() {
        let Some(from_rank) = rank[from] else {
            continue;
        };
        for &to in graph.successors(from) {
            if let Some(to_rank) = rank[to] {
                if from_rank >= to_rank {
                    return false;
                }
            }
        }
    }

    true
}

/// Resolved prefix and fallback tail together place every position exactly once.
pub fn invariant_completeness(resolved: &[usize], fallback: &[usize], node_count: usize) -> bool {
    let mut seen = vec![false; node_count];
    for &position in resolved.iter().chain(fallback) {
        if position >= node_count || seen[position] {
            return false;
        }
        seen[position] = true;
    }
    seen.into_iter().all(|placed| placed)
}

/// The output is a permutation of the input: same length, same multiset of
/// aggregation indexes.
pub fn invariant_permutation(input: &[AggregatedItem], output: &[AggregatedItem]) -> bool {
    if input.len() != output.len() {
        return false;
    }
    let mut input_indexes: Vec<u64> = input.iter().map(|item| item.index).collect();
    let mut output_indexes: Vec<u64> = output.iter().map(|item| item.index).collect();
    input_indexes.sort_unstable();
    output_indexes.sort_unstable();
    input_indexes == output_indexes
}
