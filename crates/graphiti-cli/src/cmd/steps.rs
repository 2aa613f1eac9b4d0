//! `graphiti steps` — hop count and distance between two nodes.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use super::{Context, Loaded, load_graph};
use crate::output::{Fault, Severity, emit, field, report_faults, section};

/// Arguments for `graphiti steps`.
#[derive(Args, Debug)]
pub struct StepsArgs {
    /// Graph document (JSON).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Source node id.
    pub from: String,

    /// Target node id.
    pub to: String,
}

#[derive(Debug, Serialize)]
struct StepsOutput {
    from: String,
    to: String,
    steps: usize,
    dist: u64,
    reachable: bool,
    incomplete: bool,
}

/// Execute `graphiti steps`.
pub fn run_steps(args: &StepsArgs, ctx: &Context) -> anyhow::Result<()> {
    let Loaded { mut graph, skipped } = load_graph(&args.file, ctx)?;

    let cell = match graph.route(&args.from, &args.to) {
        Ok(cell) => cell,
        Err(err) => {
            report_faults(ctx.output, Severity::Error, &[Fault::from(&err)])?;
            anyhow::bail!("{err}");
        }
    };

    let payload = StepsOutput {
        from: args.from.clone(),
        to: args.to.clone(),
        steps: cell.steps,
        dist: cell.dist,
        reachable: !cell.is_unset(),
        incomplete: !skipped.is_empty(),
    };

    emit(ctx.output, &payload, |report, w| {
        if ctx.output.is_pretty() {
            render_steps_pretty(report, w)
        } else {
            writeln!(w, "steps={} dist={}", report.steps, report.dist)
        }
    })
}

fn render_steps_pretty(payload: &StepsOutput, w: &mut dyn Write) -> std::io::Result<()> {
    section(w, &format!("{} -> {}", payload.from, payload.to))?;
    if !payload.reachable {
        return writeln!(w, "not reachable");
    }
    field(w, "steps", payload.steps)?;
    field(w, "dist", payload.dist)
}
