//! Weak-connectivity grouping, maintained incrementally while edges are
//! discovered.
//!
//! Every discovered edge `(src, dst)` runs [`Graph::merge_groups`]:
//!
//! 1. An ungrouped endpoint (id `0`) receives `max(group_of) + 1`. When both
//!    endpoints are ungrouped they receive the same fresh id.
//! 2. Endpoints already sharing an id are left alone.
//! 3. Otherwise every node in the higher id is relabelled to the lower id.
//!
//! The relabel is a full scan, O(N) per merge. Group ids are therefore not
//! contiguous once merges have happened.

use std::collections::BTreeMap;
use std::hash::Hash;

use super::Graph;

impl<Id: Clone + Eq + Hash> Graph<Id> {
    pub(crate) fn merge_groups(&mut self, src: usize, dst: usize) {
        let fresh = self.group_of.iter().copied().max().unwrap_or(0) + 1;

        if self.group_of[src] == 0 {
            self.group_of[src] = fresh;
        }
        if self.group_of[dst] == 0 {
            self.group_of[dst] = fresh;
        }

        let (a, b) = (self.group_of[src], self.group_of[dst]);
        if a == b {
            return;
        }

        let (lo, hi) = (a.min(b), a.max(b));
        for group in &mut self.group_of {
            if *group == hi {
                *group = lo;
            }
        }
    }
}

impl<Id: Clone> Graph<Id> {
    /// Members of each connectivity group.
    ///
    /// One list per distinct positive group id, in ascending id order, with
    /// members in index order. Nodes that no edge touched (group `0`) follow
    /// as singleton lists in index order, so every node appears exactly once.
    #[must_use]
    pub fn groups(&self) -> Vec<Vec<Id>> {
        let mut grouped: BTreeMap<u32, Vec<Id>> = BTreeMap::new();
        let mut isolated: Vec<Vec<Id>> = Vec::new();

        for (id, &group) in self.nodes.iter().zip(&self.group_of) {
            if group == 0 {
                isolated.push(vec![id.clone()]);
            } else {
                grouped.entry(group).or_default().push(id.clone());
            }
        }

        grouped.into_values().chain(isolated).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::Graph;

    fn linked(ids: &[&'static str], edges: &[(usize, usize)]) -> Graph<&'static str> {
        let mut graph = Graph::with_nodes(ids.to_vec());
        for &(from, to) in edges {
            graph.link(from, to, 1);
        }
        graph
    }

    #[test]
    fn first_edge_opens_group_one() {
        let graph = linked(&["A", "B", "C"], &[(0, 1)]);
        assert_eq!(graph.group_of(), &[1, 1, 0]);
    }

    #[test]
    fn disjoint_edges_open_separate_groups() {
        let graph = linked(&["A", "B", "C", "D"], &[(0, 1), (2, 3)]);
        assert_eq!(graph.group_of(), &[1, 1, 2, 2]);
        assert_eq!(graph.groups(), vec![vec!["A", "B"], vec!["C", "D"]]);
    }

    #[test]
    fn bridging_edge_relabels_higher_group() {
        let graph = linked(&["A", "B", "C", "D"], &[(0, 1), (2, 3), (3, 1)]);
        assert_eq!(graph.group_of(), &[1, 1, 1, 1]);
        assert_eq!(graph.groups(), vec![vec!["A", "B", "C", "D"]]);
    }

    #[test]
    fn ungrouped_endpoint_joins_existing_group() {
        let graph = linked(&["A", "B", "C"], &[(0, 1), (2, 0)]);
        assert_eq!(graph.group_of(), &[1, 1, 1]);
    }

    #[test]
    fn self_loop_groups_single_node() {
        let graph = linked(&["A", "B"], &[(1, 1)]);
        assert_eq!(graph.group_of(), &[0, 1]);
        assert_eq!(graph.groups(), vec![vec!["B"], vec!["A"]]);
    }

    #[test]
    fn group_ids_can_leave_gaps() {
        // Groups 1, 2, 3 open; then 1 and 2 merge into 1, leaving {1, 3}.
        let graph = linked(
            &["A", "B", "C", "D", "E", "F"],
            &[(0, 1), (2, 3), (4, 5), (1, 2)],
        );
        assert_eq!(graph.group_of(), &[1, 1, 1, 1, 3, 3]);
        assert_eq!(
            graph.groups(),
            vec![vec!["A", "B", "C", "D"], vec!["E", "F"]]
        );
    }

    #[test]
    fn empty_graph_has_no_groups() {
        let graph: Graph<&str> = Graph::default();
        assert!(graph.groups().is_empty());
    }
}
