//! `graphiti cycles` — report nodes that can reach themselves.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use super::{Context, Loaded, load_graph};
use crate::output::{Fault, emit, section};

/// Arguments for `graphiti cycles`.
#[derive(Args, Debug)]
pub struct CyclesArgs {
    /// Graph document (JSON).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Debug, Serialize)]
struct CyclesOutput {
    has_cycles: bool,
    nodes: Vec<String>,
    incomplete: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    skipped: Vec<Fault>,
}

/// Execute `graphiti cycles`.
pub fn run_cycles(args: &CyclesArgs, ctx: &Context) -> anyhow::Result<()> {
    let Loaded { mut graph, skipped } = load_graph(&args.file, ctx)?;
    // Detection reads the diagonal, so the matrix must be filled.
    if !ctx.config.distances {
        graph.all_distances();
    }

    let payload = CyclesOutput {
        has_cycles: graph.has_cycles(),
        nodes: graph.cyclic_nodes(),
        incomplete: !skipped.is_empty(),
        skipped,
    };

    emit(ctx.output, &payload, |report, w| {
        render_cycles_human(report, ctx.output.is_pretty(), w)
    })
}

fn render_cycles_human(
    payload: &CyclesOutput,
    pretty: bool,
    w: &mut dyn Write,
) -> std::io::Result<()> {
    if !payload.has_cycles {
        writeln!(w, "No cycles found.")?;
        return Ok(());
    }

    if pretty {
        section(w, &format!("Nodes on a cycle ({})", payload.nodes.len()))?;
    } else {
        writeln!(w, "Nodes on a cycle ({}):", payload.nodes.len())?;
    }
    for id in &payload.nodes {
        writeln!(w, "  - {id}")?;
    }
    Ok(())
}
