//! Adapter for graphs that are only reachable through a lookup service.
//!
//! There is no local source value here (`Source = ()`). Nodes and edges are
//! fetched one call at a time from a [`LookupClient`], and the build starts
//! from a configured list of ids because the service cannot enumerate.
//!
//! Service failures never reach the engine: a failed node fetch becomes
//! "not found" and a failed edge fetch becomes "no outgoing edges", each
//! logged with `warn!`.

use std::collections::HashSet;

use tracing::warn;

use super::memory::MemoryGraph;
use crate::capability::Capabilities;

/// Errors a lookup service can return.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("not found: {0}")]
    NotFound(String),

    /// Transport-level failure (timeout, refused connection, ...).
    #[error("service unavailable while fetching {0}")]
    Unavailable(String),
}

/// Client side of a node/edge lookup service.
pub trait LookupClient {
    /// Fetch a node by id, returning its canonical name.
    ///
    /// # Errors
    ///
    /// [`LookupError::NotFound`] for unknown ids, [`LookupError::Unavailable`]
    /// when the service could not answer.
    fn fetch_node(&self, id: &str) -> Result<String, LookupError>;

    /// Fetch the outgoing edges of `id` as aligned target and cost lists.
    ///
    /// # Errors
    ///
    /// [`LookupError::Unavailable`] when the service could not answer.
    fn fetch_edges(&self, id: &str) -> Result<(Vec<String>, Vec<i64>), LookupError>;
}

/// [`Capabilities`] over a [`LookupClient`], enumerating only `start`.
#[derive(Debug, Clone)]
pub struct RemoteCapabilities<Cl> {
    client: Cl,
    start: Vec<String>,
}

impl<Cl: LookupClient> RemoteCapabilities<Cl> {
    pub fn new(client: Cl, start: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            client,
            start: start.into_iter().map(Into::into).collect(),
        }
    }

    pub const fn client(&self) -> &Cl {
        &self.client
    }
}

impl<Cl: LookupClient> Capabilities for RemoteCapabilities<Cl> {
    type Source = ();
    type Node = String;
    type Id = String;

    fn name(&self, node: &String) -> String {
        node.clone()
    }

    fn lookup(&self, (): &(), id: &String) -> Option<String> {
        match self.client.fetch_node(id) {
            Ok(node) => Some(node),
            Err(err) => {
                warn!(id = %id, error = %err, "node lookup failed");
                None
            }
        }
    }

    fn neighbors(&self, (): &(), node: &String) -> (Vec<String>, Vec<i64>) {
        self.client.fetch_edges(node).unwrap_or_else(|err| {
            warn!(id = %node, error = %err, "edge lookup failed");
            (Vec::new(), Vec::new())
        })
    }

    fn all_ids(&self, (): &()) -> Vec<String> {
        self.start.clone()
    }
}

/// Mock lookup service answering from a [`MemoryGraph`].
///
/// Ids marked unavailable fail every request with
/// [`LookupError::Unavailable`]. Edges to unknown targets are filtered out,
/// the way a service with referential integrity would.
#[derive(Debug, Clone, Default)]
pub struct InMemoryClient {
    graph: MemoryGraph,
    unavailable: HashSet<String>,
}

impl InMemoryClient {
    #[must_use]
    pub fn new(graph: MemoryGraph) -> Self {
        Self {
            graph,
            unavailable: HashSet::new(),
        }
    }

    /// Make every request touching `id` fail as if the service timed out.
    #[must_use]
    pub fn with_unavailable(mut self, id: impl Into<String>) -> Self {
        self.unavailable.insert(id.into());
        self
    }

    fn check(&self, id: &str) -> Result<(), LookupError> {
        if self.unavailable.contains(id) {
            return Err(LookupError::Unavailable(id.to_string()));
        }
        Ok(())
    }
}

impl LookupClient for InMemoryClient {
    fn fetch_node(&self, id: &str) -> Result<String, LookupError> {
        self.check(id)?;
        self.graph
            .nodes
            .get(id)
            .map(|node| node.name.clone())
            .ok_or_else(|| LookupError::NotFound(id.to_string()))
    }

    fn fetch_edges(&self, id: &str) -> Result<(Vec<String>, Vec<i64>), LookupError> {
        self.check(id)?;
        Ok(self
            .graph
            .edges
            .iter()
            .filter(|edge| edge.from == id && self.graph.nodes.contains_key(&edge.to))
            .map(|edge| (edge.to.clone(), edge.cost))
            .unzip())
    }
}
