//! `graphiti groups` — list weakly connected node groups.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use super::{Context, load_graph};
use crate::output::{emit, section};

/// Arguments for `graphiti groups`.
#[derive(Args, Debug)]
pub struct GroupsArgs {
    /// Graph document (JSON).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
struct GroupsOutput {
    groups: Vec<Vec<String>>,
}

/// Execute `graphiti groups`.
///
/// The JSON payload stays a bare list of lists; faults skipped by a lenient
/// build are reported on stderr only.
pub fn run_groups(args: &GroupsArgs, ctx: &Context) -> anyhow::Result<()> {
    let loaded = load_graph(&args.file, ctx)?;
    let payload = GroupsOutput {
        groups: loaded.graph.groups(),
    };

    emit(ctx.output, &payload, |report, w| {
        if ctx.output.is_pretty() {
            render_groups_pretty(report, w)
        } else {
            render_groups_text(report, w)
        }
    })
}

fn render_groups_text(payload: &GroupsOutput, w: &mut dyn Write) -> std::io::Result<()> {
    for group in &payload.groups {
        writeln!(w, "{}", group.join(" "))?;
    }
    Ok(())
}

fn render_groups_pretty(payload: &GroupsOutput, w: &mut dyn Write) -> std::io::Result<()> {
    section(w, &format!("Groups ({})", payload.groups.len()))?;
    for (idx, group) in payload.groups.iter().enumerate() {
        writeln!(w, "{:>3}. {}", idx + 1, group.join(", "))?;
    }
    Ok(())
}
