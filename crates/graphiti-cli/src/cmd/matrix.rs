//! `graphiti matrix` — print the pairwise distance matrix.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use graphiti_core::Cell;
use serde::Serialize;

use super::{Context, load_graph};
use crate::output::{Fault, emit, section};

/// Arguments for `graphiti matrix`.
#[derive(Args, Debug)]
pub struct MatrixArgs {
    /// Graph document (JSON).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Debug, Serialize)]
struct MatrixOutput<'a> {
    incomplete: bool,
    skipped: &'a [Fault],
    nodes: &'a [String],
    group_of: &'a [u32],
    matrix: &'a [Vec<Cell>],
}

/// Execute `graphiti matrix`.
pub fn run_matrix(args: &MatrixArgs, ctx: &Context) -> anyhow::Result<()> {
    let loaded = load_graph(&args.file, ctx)?;
    let graph = &loaded.graph;
    let payload = MatrixOutput {
        incomplete: loaded.is_incomplete(),
        skipped: &loaded.skipped,
        nodes: graph.nodes(),
        group_of: graph.group_of(),
        matrix: graph.matrix(),
    };

    emit(ctx.output, &payload, |report, w| {
        if ctx.output.is_pretty() {
            let suffix = if report.incomplete { ", incomplete" } else { "" };
            section(
                w,
                &format!("Distance matrix ({} nodes{suffix})", report.nodes.len()),
            )?;
        }
        write!(w, "{graph}")
    })
}
