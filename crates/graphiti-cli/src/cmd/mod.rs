pub mod cycles;
pub mod groups;
pub mod matrix;
pub mod steps;
pub mod validate;

use std::path::Path;

use graphiti_core::adapters::{MemoryCapabilities, MemoryGraph, MemoryNode};
use graphiti_core::{AnalysisConfig, Graph, GraphBuilder};
use tracing::{debug, warn};

use crate::output::{Fault, OutputMode, Severity, report_faults};

/// Settings shared by every subcommand: resolved output mode plus the
/// analysis config after CLI overrides.
#[derive(Debug, Clone)]
pub struct Context {
    pub output: OutputMode,
    pub config: AnalysisConfig,
}

/// A built graph plus the faults a lenient build skipped to get it.
#[derive(Debug)]
pub struct Loaded {
    pub graph: Graph<String>,
    pub skipped: Vec<Fault>,
}

impl Loaded {
    pub fn is_incomplete(&self) -> bool {
        !self.skipped.is_empty()
    }
}

/// Seed nodes named by the config. An empty list means "enumerate all".
pub fn seed_nodes(config: &AnalysisConfig) -> Vec<MemoryNode> {
    config
        .seeds
        .iter()
        .map(|name| MemoryNode { name: name.clone() })
        .collect()
}

/// Read a graph document, build it in the configured mode and, unless
/// disabled, fill the result matrix.
///
/// A failed build is reported on stderr before the error is returned.
/// Faults skipped by a lenient build are reported as warnings and kept on
/// the result so payloads can flag it as incomplete.
pub fn load_graph(path: &Path, ctx: &Context) -> anyhow::Result<Loaded> {
    let source = MemoryGraph::from_path(path)?;
    let seeds = seed_nodes(&ctx.config);
    let validation = GraphBuilder::new(MemoryCapabilities).build(
        &source,
        Some(seeds.as_slice()),
        ctx.config.mode,
    );
    let faults: Vec<Fault> = validation.errors.iter().map(Fault::from).collect();

    let Some(mut graph) = validation.graph else {
        report_faults(ctx.output, Severity::Error, &faults)?;
        anyhow::bail!("failed to build graph from {}", path.display());
    };

    if !faults.is_empty() {
        warn!(skipped = faults.len(), "graph is incomplete");
        report_faults(ctx.output, Severity::Warning, &faults)?;
    }
    debug!(nodes = graph.len(), edges = graph.edge_count(), "graph loaded");

    if ctx.config.distances {
        graph.all_distances();
    }
    Ok(Loaded {
        graph,
        skipped: faults,
    })
}
