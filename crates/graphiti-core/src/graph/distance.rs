//! Distance engine: fills result-matrix rows by layered frontier expansion.
//!
//! # Algorithm
//!
//! For a source row `from`, the first frontier is the list of `from`'s own
//! outgoing edges. Each layer then:
//!
//! 1. computes `candidate = base + edge_cost` for every frontier entry and
//!    writes it into cell `(from, target)` when the cell is unset or the
//!    candidate is smaller; the hop count is written independently under the
//!    same rule, so `dist` and `steps` of one cell may come from different
//!    layers;
//! 2. expands each entry's target into the next frontier, skipping targets
//!    already queued during this call;
//! 3. carries forward, as the next layer's `base`, the candidate of the
//!    *last* entry whose `dist` improved (or `0` if none did).
//!
//! # Limitation
//!
//! The shared, overwritten `base` makes this a BFS-shaped approximation.
//! `steps` is always the minimum hop count. `dist` equals the true minimum
//! cost only when every edge in the graph has the same cost; with mixed
//! costs it is an estimate and may be too high or too low. This is the
//! engine's defined behavior and callers relying on `dist` for weighted
//! graphs must account for it.
//!
//! Cumulative costs saturate at `u64::MAX` instead of wrapping.

use std::hash::Hash;

use tracing::{instrument, trace};

use super::{Cell, Graph};
use crate::error::GraphError;

impl<Id> Graph<Id> {
    /// Run the per-source procedure for every row, `0..len()`.
    ///
    /// Cells only ever improve or hold, so calling this again leaves the
    /// matrix unchanged.
    #[instrument(skip_all, fields(nodes = self.nodes.len()))]
    pub fn all_distances(&mut self) {
        for from in 0..self.nodes.len() {
            self.distances_from(from);
        }
    }

    /// Fill row `from` of the result matrix.
    pub(crate) fn distances_from(&mut self, from: usize) {
        let mut queued = vec![false; self.nodes.len()];
        let mut frontier: Vec<(usize, u64)> = self.outgoing[from].clone();
        let mut base: u64 = 0;
        let mut hop: usize = 1;

        while !frontier.is_empty() {
            let mut next: Vec<(usize, u64)> = Vec::new();
            let mut next_base: u64 = 0;

            for &(target, cost) in &frontier {
                let candidate = base.saturating_add(cost);
                if self.improve(from, target, candidate, hop) {
                    next_base = candidate;
                }

                for &(onward, onward_cost) in &self.outgoing[target] {
                    if !queued[onward] {
                        queued[onward] = true;
                        next.push((onward, onward_cost));
                    }
                }
            }

            trace!(from, hop, frontier = frontier.len(), base, "frontier layer");
            frontier = next;
            base = next_base;
            hop += 1;
        }
    }

    /// Write `dist` and `steps` into `(from, to)` independently, each only
    /// when the stored value is unset (`0`) or larger. Returns whether `dist`
    /// was written.
    fn improve(&mut self, from: usize, to: usize, dist: u64, steps: usize) -> bool {
        let cell = &mut self.matrix[from][to];

        let shorter = cell.dist == 0 || cell.dist > dist;
        if shorter {
            cell.dist = dist;
        }
        if cell.steps == 0 || cell.steps > steps {
            cell.steps = steps;
        }
        shorter
    }
}

impl<Id: Clone + Eq + Hash> Graph<Id> {
    /// Minimum hop count from `from` to `to`; `0` when `to` is unreachable.
    ///
    /// Recomputes `from`'s row on every call, even if it was already filled.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either id is not in the graph.
    pub fn steps(&mut self, from: &Id, to: &Id) -> Result<usize, GraphError<Id>> {
        self.route(from, to).map(|cell| cell.steps)
    }

    /// Cumulative cost from `from` to `to` as computed by the frontier
    /// expansion; `0` when unreachable, `u64::MAX` when the sum saturated.
    /// See the module docs for when this is a true minimum.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either id is not in the graph.
    pub fn dist(&mut self, from: &Id, to: &Id) -> Result<u64, GraphError<Id>> {
        self.route(from, to).map(|cell| cell.dist)
    }

    /// The full result cell for `(from, to)` after recomputing `from`'s row.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either id is not in the graph.
    pub fn route(&mut self, from: &Id, to: &Id) -> Result<Cell, GraphError<Id>> {
        let x = self
            .index_of(from)
            .ok_or_else(|| GraphError::NodeNotFound { id: from.clone() })?;
        let y = self
            .index_of(to)
            .ok_or_else(|| GraphError::NodeNotFound { id: to.clone() })?;

        self.distances_from(x);
        Ok(self.matrix[x][y])
    }
}
