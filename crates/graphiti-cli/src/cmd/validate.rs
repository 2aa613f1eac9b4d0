//! `graphiti validate` — lenient build that reports every fault found.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use graphiti_core::adapters::{MemoryCapabilities, MemoryGraph};
use graphiti_core::GraphBuilder;
use serde::Serialize;

use super::{Context, seed_nodes};
use crate::output::{Fault, emit, field, section};

/// Arguments for `graphiti validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Graph document (JSON).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Debug, Serialize)]
struct ValidateOutput {
    usable: bool,
    nodes: usize,
    edges: usize,
    cyclic: Vec<String>,
    problems: Vec<Fault>,
}

impl ValidateOutput {
    fn is_clean(&self) -> bool {
        self.usable && self.problems.is_empty()
    }
}

/// Execute `graphiti validate`.
///
/// Always builds leniently, whatever the configured mode. Exits non-zero
/// when the graph could not be built or any fault was skipped.
pub fn run_validate(args: &ValidateArgs, ctx: &Context) -> anyhow::Result<()> {
    let source = MemoryGraph::from_path(&args.file)?;
    let seeds = seed_nodes(&ctx.config);
    let validation =
        GraphBuilder::new(MemoryCapabilities).build_lenient(&source, Some(seeds.as_slice()));

    let problems: Vec<Fault> = validation.errors.iter().map(Fault::from).collect();
    let payload = match validation.graph {
        Some(mut graph) => {
            let cyclic = if ctx.config.distances {
                graph.all_distances();
                graph.cyclic_nodes()
            } else {
                Vec::new()
            };
            ValidateOutput {
                usable: true,
                nodes: graph.len(),
                edges: graph.edge_count(),
                cyclic,
                problems,
            }
        }
        None => ValidateOutput {
            usable: false,
            nodes: 0,
            edges: 0,
            cyclic: Vec::new(),
            problems,
        },
    };

    emit(ctx.output, &payload, |report, w| {
        if ctx.output.is_pretty() {
            render_validate_pretty(report, w)
        } else {
            render_validate_text(report, w)
        }
    })?;

    if !payload.is_clean() {
        anyhow::bail!(
            "validation failed: {} problem(s){}",
            payload.problems.len(),
            if payload.usable { "" } else { ", graph unusable" }
        );
    }
    Ok(())
}

fn render_validate_text(payload: &ValidateOutput, w: &mut dyn Write) -> std::io::Result<()> {
    for problem in &payload.problems {
        writeln!(w, "{}\t{}", problem.code, problem.message)?;
    }
    if payload.is_clean() {
        writeln!(
            w,
            "ok: {} nodes, {} edges",
            payload.nodes, payload.edges
        )?;
    }
    Ok(())
}

fn render_validate_pretty(payload: &ValidateOutput, w: &mut dyn Write) -> std::io::Result<()> {
    section(w, "Validation")?;
    field(w, "usable", if payload.usable { "yes" } else { "no" })?;
    field(w, "nodes", payload.nodes)?;
    field(w, "edges", payload.edges)?;
    if !payload.cyclic.is_empty() {
        field(w, "cyclic", payload.cyclic.join(", "))?;
    }

    if payload.problems.is_empty() {
        return Ok(());
    }
    writeln!(w)?;
    section(w, &format!("Problems ({})", payload.problems.len()))?;
    for problem in &payload.problems {
        writeln!(w, "[{}] {}", problem.code, problem.message)?;
        if let Some(hint) = problem.hint {
            writeln!(w, "       {hint}")?;
        }
    }
    Ok(())
}
