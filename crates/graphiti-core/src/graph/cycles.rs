//! Cycle detection from the diagonal of a computed result matrix.
//!
//! A node's own cell `(i, i)` is only written when a frontier expansion from
//! `i` routes back to `i`, so a set diagonal cell means `i` lies on a cycle
//! (a self-loop included). Nothing here triggers computation: call
//! [`Graph::all_distances`] first, otherwise every diagonal cell is still
//! unset and no cycle is reported.

use super::Graph;

impl<Id> Graph<Id> {
    /// `true` iff any diagonal cell is set.
    #[must_use]
    pub fn has_cycles(&self) -> bool {
        self.matrix
            .iter()
            .enumerate()
            .any(|(i, row)| !row[i].is_unset())
    }
}

impl<Id: Clone> Graph<Id> {
    /// Ids whose diagonal cell is set, in index order.
    #[must_use]
    pub fn cyclic_nodes(&self) -> Vec<Id> {
        self.matrix
            .iter()
            .enumerate()
            .filter(|(i, row)| !row[*i].is_unset())
            .map(|(i, _)| self.nodes[i].clone())
            .collect()
    }
}
