#![forbid(unsafe_code)]
//! graphiti-core library.
//!
//! Builds a canonical, index-addressed snapshot of a directed weighted graph
//! that is reachable only through four lookup functions (see
//! [`Capabilities`]), then answers pairwise hop/cost questions, connectivity
//! grouping and cycle detection on that snapshot.
//!
//! ```text
//! Capabilities (caller adapter)
//!        ↓  GraphBuilder::build_strict / build_lenient
//! Graph (nodes, edges, groups, zeroed result matrix)
//!        ↓  Graph::all_distances / Graph::steps
//! Graph (result matrix filled in)
//!        ↓  Graph::has_cycles / Graph::groups / Display
//! ```
//!
//! # Conventions
//!
//! - **Errors**: library operations return the typed [`GraphError`];
//!   configuration loading uses `anyhow::Result`.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod adapters;
pub mod capability;
pub mod config;
pub mod error;
pub mod graph;

pub use capability::Capabilities;
pub use config::AnalysisConfig;
pub use error::{ErrorCode, GraphError};
pub use graph::build::{BuildMode, GraphBuilder, Validation};
pub use graph::{Cell, Edge, Graph};
