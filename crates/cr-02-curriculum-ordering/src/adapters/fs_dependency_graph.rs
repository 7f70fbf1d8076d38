//! Filesystem-backed prerequisite graph source

use crate::domain::entities::PrerequisiteGraph;
use crate::domain::errors::OrderingError;
use crate::ports::outbound::PrerequisiteGraphSource;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// On-disk graph file shape: `{"dependency": {"nodes": {id: {"prerequisites": []}}}}`.
///
/// The envelope stays private; the rest of the crate only ever sees
/// [`PrerequisiteGraph`].
#[derive(Debug, Deserialize)]
struct GraphFile {
    #[serde(default)]
    dependency: GraphEnvelope,
}

#[derive(Debug, Default, Deserialize)]
struct GraphEnvelope {
    #[serde(default)]
    nodes: HashMap<String, GraphNode>,
}

#[derive(Debug, Deserialize)]
struct GraphNode {
    #[serde(default)]
    prerequisites: Vec<String>,
}

/// Reads the externally authored prerequisite graph from disk.
pub struct FsPrerequisiteGraph {
    path: PathBuf,
}

impl FsPrerequisiteGraph {
    /// Create a source for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl PrerequisiteGraphSource for FsPrerequisiteGraph {
    async fn load_graph(&self) -> Result<PrerequisiteGraph, OrderingError> {
        if !self.path.exists() {
            return Err(OrderingError::GraphNotFound {
                path: self.path.display().to_string(),
            });
        }

        let bytes = std::fs::read(&self.path).map_err(|e| OrderingError::ReadFailed {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        let file: GraphFile =
            serde_json::from_slice(&bytes).map_err(|e| OrderingError::ParseFailed {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;

        let nodes = file
            .dependency
            .nodes
            .into_iter()
            .map(|(id, node)| (id, node.prerequisites))
            .collect();
        Ok(PrerequisiteGraph::from_nodes(nodes))
    }
}
