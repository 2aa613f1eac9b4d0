//! In-memory graph document and its adapter.
//!
//! # Document format
//!
//! ```json
//! {
//!   "nodes": ["A", "B", "C"],
//!   "edges": [
//!     { "from": "A", "to": "B", "cost": 1 },
//!     { "from": "B", "to": "C" }
//!   ]
//! }
//! ```
//!
//! `cost` defaults to `1`. Edges may name targets that are not listed under
//! `nodes`; the adapter still reports them, so a build surfaces them as
//! broken edges instead of silently dropping them.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::capability::Capabilities;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemoryNode {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryEdge {
    pub from: String,
    pub to: String,
    #[serde(default = "default_cost")]
    pub cost: i64,
}

const fn default_cost() -> i64 {
    1
}

/// Serialized shape of a [`MemoryGraph`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct GraphDocument {
    #[serde(default)]
    nodes: Vec<String>,
    #[serde(default)]
    edges: Vec<MemoryEdge>,
}

/// A graph held entirely in memory, keyed by node name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "GraphDocument", into = "GraphDocument")]
pub struct MemoryGraph {
    pub nodes: BTreeMap<String, MemoryNode>,
    pub edges: Vec<MemoryEdge>,
}

impl From<GraphDocument> for MemoryGraph {
    fn from(doc: GraphDocument) -> Self {
        let nodes = doc
            .nodes
            .into_iter()
            .map(|name| (name.clone(), MemoryNode { name }))
            .collect();
        Self {
            nodes,
            edges: doc.edges,
        }
    }
}

impl From<MemoryGraph> for GraphDocument {
    fn from(graph: MemoryGraph) -> Self {
        Self {
            nodes: graph.nodes.into_keys().collect(),
            edges: graph.edges,
        }
    }
}

impl MemoryGraph {
    /// Convenience constructor for fixtures.
    #[must_use]
    pub fn from_edges(nodes: &[&str], edges: &[(&str, &str, i64)]) -> Self {
        GraphDocument {
            nodes: nodes.iter().map(ToString::to_string).collect(),
            edges: edges
                .iter()
                .map(|&(from, to, cost)| MemoryEdge {
                    from: from.to_string(),
                    to: to.to_string(),
                    cost,
                })
                .collect(),
        }
        .into()
    }

    /// Parse a JSON graph document.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not a valid graph document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("parse graph document")
    }

    /// Read and parse a JSON graph document from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read graph document {}", path.display()))?;
        Self::from_json_str(&raw).with_context(|| format!("in {}", path.display()))
    }
}

/// Adapter over [`MemoryGraph`]. Enumeration is sorted by node name.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryCapabilities;

impl Capabilities for MemoryCapabilities {
    type Source = MemoryGraph;
    type Node = MemoryNode;
    type Id = String;

    fn name(&self, node: &MemoryNode) -> String {
        node.name.clone()
    }

    fn lookup(&self, source: &MemoryGraph, id: &String) -> Option<MemoryNode> {
        source.nodes.get(id).cloned()
    }

    fn neighbors(&self, source: &MemoryGraph, node: &MemoryNode) -> (Vec<String>, Vec<i64>) {
        source
            .edges
            .iter()
            .filter(|edge| edge.from == node.name)
            .map(|edge| (edge.to.clone(), edge.cost))
            .unzip()
    }

    fn all_ids(&self, source: &MemoryGraph) -> Vec<String> {
        source.nodes.keys().cloned().collect()
    }
}
