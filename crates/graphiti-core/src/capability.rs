//! The four lookup functions that connect the engine to a graph it does not
//! hold.
//!
//! The engine never walks a concrete structure. Everything it learns about
//! the source graph comes through an implementation of [`Capabilities`],
//! which may be backed by an in-memory map, a file, or a remote service.
//! Resource failures (timeouts, transport errors) are the adapter's business:
//! they must surface as `None` from [`Capabilities::lookup`] or as an empty
//! neighbor list, never as something the engine has to interpret.

use std::fmt::Debug;
use std::hash::Hash;

/// Adapter over an opaque source graph.
///
/// One implementation binds one source type, one node type and one
/// identifier type. Implementations are expected to be stateless with
/// respect to a single build: the builder may call any method any number of
/// times and in any order.
pub trait Capabilities {
    /// The opaque graph (or connection handle) passed to every lookup.
    type Source: ?Sized;
    /// A resolved node as the source represents it.
    type Node;
    /// Caller-domain identifier. Must be comparable and hashable so the
    /// snapshot can index it.
    type Id: Clone + Eq + Hash + Debug;

    /// Deterministic projection of a node onto its identifier.
    fn name(&self, node: &Self::Node) -> Self::Id;

    /// Point lookup. `None` means the identifier is unknown to the source.
    fn lookup(&self, source: &Self::Source, id: &Self::Id) -> Option<Self::Node>;

    /// Every outgoing edge of `node` as index-aligned target ids and costs.
    ///
    /// Both vectors must have the same length. A mismatch is treated as a
    /// broken adapter and aborts the build in every mode.
    fn neighbors(&self, source: &Self::Source, node: &Self::Node) -> (Vec<Self::Id>, Vec<i64>);

    /// Every node identifier of the source.
    ///
    /// Only consulted when the caller supplies no seed nodes. Order is
    /// whatever the source yields; return a sorted list when the resulting
    /// indices must be reproducible.
    fn all_ids(&self, source: &Self::Source) -> Vec<Self::Id>;
}

impl<C: Capabilities + ?Sized> Capabilities for &C {
    type Source = C::Source;
    type Node = C::Node;
    type Id = C::Id;

    fn name(&self, node: &Self::Node) -> Self::Id {
        (**self).name(node)
    }

    fn lookup(&self, source: &Self::Source, id: &Self::Id) -> Option<Self::Node> {
        (**self).lookup(source, id)
    }

    fn neighbors(&self, source: &Self::Source, node: &Self::Node) -> (Vec<Self::Id>, Vec<i64>) {
        (**self).neighbors(source, node)
    }

    fn all_ids(&self, source: &Self::Source) -> Vec<Self::Id> {
        (**self).all_ids(source)
    }
}
