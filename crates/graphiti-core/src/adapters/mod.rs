//! Reference [`Capabilities`](crate::Capabilities) adapters.
//!
//! ## Submodules
//!
//! - [`memory`]: a locally held graph document (JSON), enumerable and
//!   deterministic.
//! - [`lookup`]: a graph that only exists behind a lookup service; nodes and
//!   edges are fetched one at a time and service failures become "not found".

pub mod lookup;
pub mod memory;

pub use lookup::{InMemoryClient, LookupClient, LookupError, RemoteCapabilities};
pub use memory::{MemoryCapabilities, MemoryEdge, MemoryGraph, MemoryNode};
