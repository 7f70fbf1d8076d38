//! Core entities for Curriculum Ordering

use serde::{Deserialize, Serialize};
use shared_items::AggregatedItem;
use std::collections::HashMap;

/// The externally built prerequisite graph, keyed by item identifier.
///
/// Directed and possibly cyclic; the ordering algorithm tolerates cycles
/// rather than assuming a DAG. Loaded read-only.
#[derive(Debug, Clone, Default)]
pub struct PrerequisiteGraph {
    nodes: HashMap<String, Vec<String>>,
}

impl PrerequisiteGraph {
    /// Graph with no declared prerequisites at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from an id-to-prerequisites mapping.
    pub fn from_nodes(nodes: HashMap<String, Vec<String>>) -> Self {
        Self { nodes }
    }

    /// Declared prerequisites of an item, empty when unknown.
    pub fn prerequisites_of(&self, id: &str) -> &[String] {
        self.nodes.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of items with declared prerequisites.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// One module's share of the aggregated item list.
///
/// Partitions are disjoint and their union is the full input set.
#[derive(Debug, Clone)]
pub struct ModuleGroup {
    pub module_id: String,
    pub items: Vec<AggregatedItem>,
}

impl ModuleGroup {
    pub fn new(module_id: impl Into<String>) -> Self {
        Self {
            module_id: module_id.into(),
            items: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Module-local dependency graph, nodes keyed by item position.
///
/// Positions rather than identifiers keep duplicate-id and id-less items as
/// distinct nodes, so every input item has exactly one node no matter how
/// dirty the identifiers are. Built fresh for each module on every run.
#[derive(Debug, Clone)]
pub struct ModuleGraph {
    /// Adjacency list: prerequisite position -> dependent positions.
    adjacency: Vec<Vec<usize>>,
    /// Unresolved prerequisite count per position.
    pub in_degree: Vec<usize>,
    edge_count: usize,
}

impl ModuleGraph {
    /// Graph over `node_count` positions with no edges yet.
    pub fn new(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
            in_degree: vec![0; node_count],
            edge_count: 0,
        }
    }

    /// Add a prerequisite edge `from -> to`.
    ///
    /// Callers must not add the same edge twice; the builder deduplicates
    /// prerequisite sets before edges reach this point.
    pub fn add_edge(&mut self, from: usize, to: usize) {
        self.adjacency[from].push(to);
        self.in_degree[to] += 1;
        self.edge_count += 1;
    }

    /// Check if an edge exists `from -> to`.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.adjacency[from].contains(&to)
    }

    /// Positions directly unblocked by completing `position`.
    pub fn successors(&self, position: usize) -> &[usize] {
        &self.adjacency[position]
    }

    /// All positions with no unresolved prerequisites.
    pub fn zero_degree_nodes(&self) -> Vec<usize> {
        self.in_degree
            .iter()
            .enumerate()
            .filter(|(_, &degree)| degree == 0)
            .map(|(position, _)| position)
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.in_degree.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

/// The final flattened ordering plus its run report.
#[derive(Debug, Clone)]
pub struct OrderedCurriculum {
    /// Every input item, module by module, internally ordered.
    pub items: Vec<AggregatedItem>,
    pub report: OrderingReport,
}

/// Counters describing one ordering run.
///
/// Returned to the caller and logged; not part of the curriculum artifact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderingReport {
    /// Modules seen in the input.
    pub module_count: usize,
    /// Items across all modules.
    pub total_items: usize,
    /// Items placed by the topological traversal.
    pub resolved_items: usize,
    /// Items appended by the complexity-sorted fallback.
    pub fallback_items: usize,
    /// Items with an id but no metadata record.
    pub defaulted_metadata_items: usize,
    /// Items with no usable id.
    pub missing_id_items: usize,
    /// Items whose id repeats an earlier item in the same module.
    pub duplicate_id_items: usize,
}
