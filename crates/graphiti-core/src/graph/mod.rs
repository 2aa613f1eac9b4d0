//! Canonical graph snapshot and the analyses that run on it.
//!
//! # Overview
//!
//! A [`Graph`] is produced once by [`build::GraphBuilder`] and afterwards
//! only mutated by the distance engine writing result cells. It holds:
//!
//! - `nodes`: ids in index order (initial set first, then discovery order)
//! - `index_of`: the inverse mapping id → index
//! - `edges`: every discovered edge, duplicates included
//! - `group_of`: connectivity group per node, `0` for untouched nodes
//! - the N×N result matrix of [`Cell`]s, all [`Cell::UNSET`] until
//!   [`Graph::all_distances`] or [`Graph::steps`] fills rows in
//!
//! ## Submodules
//!
//! - [`build`]: strict and lenient construction from a [`Capabilities`]
//!   adapter.
//! - [`distance`]: layered frontier expansion per source row.
//! - [`groups`]: incremental group merging and the [`Graph::groups`] reader.
//! - [`cycles`]: diagonal-based cycle detection.
//! - [`render`]: the tab-separated diagnostic text form.
//!
//! [`Capabilities`]: crate::Capabilities

pub mod build;
pub mod cycles;
pub mod distance;
pub mod groups;
pub mod render;

use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

/// One result cell: cumulative cost and hop count from a row's source node
/// to a column's node.
///
/// `(0, 0)` doubles as "unset / unreachable". A genuine zero-cost,
/// zero-hop path cannot be told apart from it. `dist` saturates at
/// `u64::MAX`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Cell {
    pub dist: u64,
    pub steps: usize,
}

impl Cell {
    pub const UNSET: Self = Self { dist: 0, steps: 0 };

    #[must_use]
    pub const fn is_unset(self) -> bool {
        self.dist == 0 && self.steps == 0
    }
}

/// A directed edge between two node indices with a non-negative cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub cost: u64,
}

/// Indexed snapshot of a source graph plus its result matrix.
#[derive(Debug, Clone)]
pub struct Graph<Id> {
    nodes: Vec<Id>,
    index_of: HashMap<Id, usize>,
    edges: Vec<Edge>,
    /// Per-node `(target, cost)` lists in edge insertion order.
    outgoing: Vec<Vec<(usize, u64)>>,
    group_of: Vec<u32>,
    /// Row-major arena; `matrix[from][to]`.
    matrix: Vec<Vec<Cell>>,
}

impl<Id> Default for Graph<Id> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index_of: HashMap::new(),
            edges: Vec::new(),
            outgoing: Vec::new(),
            group_of: Vec::new(),
            matrix: Vec::new(),
        }
    }
}

impl<Id: Eq + Hash> PartialEq for Graph<Id> {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
            && self.index_of == other.index_of
            && self.edges == other.edges
            && self.group_of == other.group_of
            && self.matrix == other.matrix
    }
}

impl<Id: Eq + Hash> Eq for Graph<Id> {}

impl<Id> Graph<Id> {
    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node ids in index order.
    #[must_use]
    pub fn nodes(&self) -> &[Id] {
        &self.nodes
    }

    /// The id stored at `idx`.
    #[must_use]
    pub fn node(&self, idx: usize) -> Option<&Id> {
        self.nodes.get(idx)
    }

    /// Every discovered edge in discovery order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Group id per node index. `0` marks a node no edge ever touched.
    #[must_use]
    pub fn group_of(&self) -> &[u32] {
        &self.group_of
    }

    /// Outgoing `(target, cost)` pairs of `idx`, in discovery order.
    #[must_use]
    pub fn outgoing(&self, idx: usize) -> &[(usize, u64)] {
        self.outgoing.get(idx).map_or(&[], Vec::as_slice)
    }

    /// The result cell at `(from, to)`, or `None` if either index is out of
    /// range.
    #[must_use]
    pub fn cell(&self, from: usize, to: usize) -> Option<Cell> {
        self.matrix.get(from).and_then(|row| row.get(to)).copied()
    }

    /// The full result row of `from`.
    #[must_use]
    pub fn row(&self, from: usize) -> Option<&[Cell]> {
        self.matrix.get(from).map(Vec::as_slice)
    }

    /// All result rows, `matrix()[from][to]`.
    #[must_use]
    pub fn matrix(&self) -> &[Vec<Cell>] {
        &self.matrix
    }
}

impl<Id: Clone + Eq + Hash> Graph<Id> {
    /// A graph over `ids` with no edges, zero groups and a zeroed matrix.
    ///
    /// Callers must pass distinct ids.
    pub(crate) fn with_nodes(ids: Vec<Id>) -> Self {
        let n = ids.len();
        let index_of = ids
            .iter()
            .enumerate()
            .map(|(idx, id)| (id.clone(), idx))
            .collect();

        Self {
            nodes: ids,
            index_of,
            edges: Vec::new(),
            outgoing: vec![Vec::new(); n],
            group_of: vec![0; n],
            matrix: vec![vec![Cell::UNSET; n]; n],
        }
    }

    /// Index of `id`, if the graph contains it.
    #[must_use]
    pub fn index_of(&self, id: &Id) -> Option<usize> {
        self.index_of.get(id).copied()
    }

    #[must_use]
    pub fn contains(&self, id: &Id) -> bool {
        self.index_of.contains_key(id)
    }

    /// Append a newly discovered node and grow the matrix by one
    /// zero-initialized row and column. Returns the new index.
    pub(crate) fn push_node(&mut self, id: Id) -> usize {
        let idx = self.nodes.len();
        self.index_of.insert(id.clone(), idx);
        self.nodes.push(id);
        self.group_of.push(0);
        self.outgoing.push(Vec::new());

        for row in &mut self.matrix {
            row.push(Cell::UNSET);
        }
        self.matrix.push(vec![Cell::UNSET; idx + 1]);

        idx
    }

    /// Record edge `from → to`: merge the endpoint groups, then append.
    pub(crate) fn link(&mut self, from: usize, to: usize, cost: u64) {
        self.merge_groups(from, to);
        self.edges.push(Edge { from, to, cost });
        self.outgoing[from].push((to, cost));
    }
}
