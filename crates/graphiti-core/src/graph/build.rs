//! Graph construction through a [`Capabilities`] adapter.
//!
//! # Overview
//!
//! The builder starts from an initial id list (the caller's seed nodes, or
//! the adapter's full enumeration when no seeds are given), assigns indices
//! in that order, then walks the index space front to back. Each resolved
//! node has its outgoing edges pulled through `neighbors`; a target that is
//! not yet indexed is looked up and appended, so the walk also visits nodes
//! the initial list never mentioned.
//!
//! ## Modes
//!
//! - [`BuildMode::Strict`] stops at the first structural fault and returns
//!   no graph.
//! - [`BuildMode::Lenient`] skips the offending node or edge, keeps going,
//!   and returns a best-effort graph together with every fault it found.
//!   The graph is absent only when none of the initial nodes resolve.
//!
//! A length mismatch between neighbor ids and costs means the adapter itself
//! is broken and aborts the build in both modes.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashSet;
use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

use super::Graph;
use crate::capability::Capabilities;
use crate::error::GraphError;

// ---------------------------------------------------------------------------
// Modes and results
// ---------------------------------------------------------------------------

/// Fail-fast or collect-all construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    #[default]
    Strict,
    Lenient,
}

/// Outcome of [`GraphBuilder::build`] and [`GraphBuilder::build_lenient`].
///
/// `graph` is `None` on total failure: no initial node resolved, or the
/// adapter violated its contract. A present graph with a non-empty `errors`
/// list is usable but incomplete.
#[derive(Debug, Clone)]
pub struct Validation<Id> {
    pub graph: Option<Graph<Id>>,
    pub errors: Vec<GraphError<Id>>,
}

impl<Id> Validation<Id> {
    /// A graph was produced and nothing was skipped.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.graph.is_some() && self.errors.is_empty()
    }

    /// A graph was produced, possibly with skipped nodes or edges.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.graph.is_some()
    }
}

/// Marker returned through `?` when the current build must stop.
struct Abort;

// ---------------------------------------------------------------------------
// GraphBuilder
// ---------------------------------------------------------------------------

/// Builds [`Graph`] snapshots from one adapter.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder<C> {
    caps: C,
}

impl<C: Capabilities> GraphBuilder<C> {
    pub const fn new(caps: C) -> Self {
        Self { caps }
    }

    #[must_use]
    pub const fn capabilities(&self) -> &C {
        &self.caps
    }

    /// Build, stopping at the first fault.
    ///
    /// `seeds` selects the initial nodes; `None` or an empty slice falls back
    /// to [`Capabilities::all_ids`]. An empty initial set yields an empty
    /// graph.
    ///
    /// # Errors
    ///
    /// Returns the first [`GraphError`] encountered: an initial node that
    /// cannot be resolved, an edge to an unresolvable target, a negative
    /// edge cost, or an adapter contract violation.
    pub fn build_strict(
        &self,
        source: &C::Source,
        seeds: Option<&[C::Node]>,
    ) -> Result<Graph<C::Id>, GraphError<C::Id>> {
        let Validation { graph, errors } = self.build(source, seeds, BuildMode::Strict);
        match (graph, errors.into_iter().next()) {
            (_, Some(err)) => Err(err),
            (Some(graph), None) => Ok(graph),
            (None, None) => Ok(Graph::default()),
        }
    }

    /// Build, skipping recoverable faults and collecting them.
    pub fn build_lenient(&self, source: &C::Source, seeds: Option<&[C::Node]>) -> Validation<C::Id> {
        self.build(source, seeds, BuildMode::Lenient)
    }

    /// Build in the given mode. In strict mode the returned error list holds
    /// at most one entry and the graph is absent whenever it does.
    #[instrument(skip_all, fields(mode = ?mode))]
    pub fn build(
        &self,
        source: &C::Source,
        seeds: Option<&[C::Node]>,
        mode: BuildMode,
    ) -> Validation<C::Id> {
        let initial = self.initial_ids(source, seeds);
        if initial.is_empty() {
            debug!("no initial nodes, returning empty graph");
            return Validation {
                graph: Some(Graph::default()),
                errors: Vec::new(),
            };
        }

        let seeded = initial.len();
        let mut graph = Graph::with_nodes(initial);
        let mut errors = Vec::new();
        let mut resolved = 0_usize;

        // `graph.len()` grows as targets are discovered.
        let mut idx = 0;
        while idx < graph.len() {
            match self.expand(source, &mut graph, idx, mode, &mut errors) {
                Ok(true) if idx < seeded => resolved += 1,
                Ok(_) => {}
                Err(Abort) => return Validation {
                    graph: None,
                    errors,
                },
            }
            idx += 1;
        }

        if resolved == 0 {
            warn!(seeded, "none of the initial nodes resolved");
            return Validation {
                graph: None,
                errors,
            };
        }

        info!(
            nodes = graph.len(),
            edges = graph.edge_count(),
            errors = errors.len(),
            "graph built"
        );
        Validation {
            graph: Some(graph),
            errors,
        }
    }

    /// Seed names, or the full enumeration, with repeats dropped so that
    /// every id maps to exactly one index.
    fn initial_ids(&self, source: &C::Source, seeds: Option<&[C::Node]>) -> Vec<C::Id> {
        let ids: Vec<C::Id> = match seeds {
            Some(nodes) if !nodes.is_empty() => nodes.iter().map(|n| self.caps.name(n)).collect(),
            _ => self.caps.all_ids(source),
        };

        let mut seen = HashSet::with_capacity(ids.len());
        ids.into_iter()
            .filter(|id| {
                let fresh = seen.insert(id.clone());
                if !fresh {
                    debug!(id = ?id, "dropping repeated initial id");
                }
                fresh
            })
            .collect()
    }

    /// Resolve node `idx` and add its outgoing edges.
    ///
    /// Returns `Ok(false)` when the node itself could not be resolved and was
    /// skipped.
    fn expand(
        &self,
        source: &C::Source,
        graph: &mut Graph<C::Id>,
        idx: usize,
        mode: BuildMode,
        errors: &mut Vec<GraphError<C::Id>>,
    ) -> Result<bool, Abort> {
        let id = graph.nodes[idx].clone();

        let Some(node) = self.caps.lookup(source, &id) else {
            record(mode, errors, GraphError::NodeNotFound { id })?;
            return Ok(false);
        };

        let (targets, costs) = self.caps.neighbors(source, &node);
        if targets.len() != costs.len() {
            let violation = GraphError::ContractViolation {
                expected: targets.len(),
                actual: costs.len(),
            };
            error!(id = ?id, error = ?violation, "adapter contract violated");
            errors.clear();
            errors.push(violation);
            return Err(Abort);
        }

        for (to, cost) in targets.into_iter().zip(costs) {
            let Ok(cost) = u64::try_from(cost) else {
                record(
                    mode,
                    errors,
                    GraphError::NegativeCost {
                        from: id.clone(),
                        to,
                        cost,
                    },
                )?;
                continue;
            };

            let to_idx = if let Some(existing) = graph.index_of(&to) {
                existing
            } else if let Some(found) = self.caps.lookup(source, &to) {
                let name = self.caps.name(&found);
                graph.index_of(&name).unwrap_or_else(|| {
                    debug!(id = ?name, index = graph.len(), "discovered node");
                    graph.push_node(name)
                })
            } else {
                record(
                    mode,
                    errors,
                    GraphError::BrokenEdge {
                        from: id.clone(),
                        to,
                    },
                )?;
                continue;
            };

            graph.link(idx, to_idx, cost);
        }

        Ok(true)
    }
}

/// Collect `err`; abort unless the build is lenient.
fn record<Id: Debug>(
    mode: BuildMode,
    errors: &mut Vec<GraphError<Id>>,
    err: GraphError<Id>,
) -> Result<(), Abort> {
    match mode {
        BuildMode::Strict => {
            debug!(error = ?err, "strict build stopping");
            errors.push(err);
            Err(Abort)
        }
        BuildMode::Lenient => {
            warn!(error = ?err, "skipping");
            errors.push(err);
            Ok(())
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
