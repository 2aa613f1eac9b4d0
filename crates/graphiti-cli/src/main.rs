#![forbid(unsafe_code)]

mod cmd;
mod output;

use clap::{Parser, Subcommand};
use graphiti_core::{AnalysisConfig, BuildMode};
use output::OutputMode;
use std::env;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "graphiti: reachability, hop counts and groups over directed graphs",
    long_about = None
)]
struct Cli {
    /// Output format: pretty, text, or json.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Shorthand for `--format json`.
    #[arg(long, global = true, hide = true)]
    json: bool,

    /// Analysis config (TOML). CLI flags override its values.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Skip recoverable faults instead of stopping at the first one.
    #[arg(long, global = true)]
    lenient: bool,

    /// Start the build from this node id (repeatable). Default: every node.
    #[arg(long = "seed", global = true, value_name = "ID")]
    seeds: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn output_mode(&self) -> OutputMode {
        OutputMode::resolve(self.format, self.json)
    }

    /// Load the config file (if any) and apply flag overrides.
    fn analysis_config(&self) -> anyhow::Result<AnalysisConfig> {
        let mut config = AnalysisConfig::load_or_default(self.config.as_deref())?;
        if self.lenient {
            config.mode = BuildMode::Lenient;
        }
        if !self.seeds.is_empty() {
            config.seeds.clone_from(&self.seeds);
        }
        Ok(config)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Print the distance matrix",
        long_about = "Build the graph, fill every pairwise cell, and print one row per node as dist/steps pairs followed by the node id and its group.",
        after_help = "EXAMPLES:\n    # Text matrix\n    graphiti matrix graph.json\n\n    # Skip dangling edges\n    graphiti --lenient matrix graph.json\n\n    # Emit machine-readable output\n    graphiti matrix graph.json --json"
    )]
    Matrix(cmd::matrix::MatrixArgs),

    #[command(
        about = "List weakly connected groups",
        after_help = "EXAMPLES:\n    # One group per line\n    graphiti groups graph.json\n\n    # Only the part reachable from A\n    graphiti --seed A groups graph.json"
    )]
    Groups(cmd::groups::GroupsArgs),

    #[command(
        about = "Report nodes that lie on a cycle",
        after_help = "EXAMPLES:\n    graphiti cycles graph.json"
    )]
    Cycles(cmd::cycles::CyclesArgs),

    #[command(
        about = "Hop count and distance between two nodes",
        after_help = "EXAMPLES:\n    graphiti steps graph.json A C"
    )]
    Steps(cmd::steps::StepsArgs),

    #[command(
        about = "Build leniently and report every fault",
        long_about = "Build the graph in lenient mode and list every skipped fault with its error code. Exits non-zero if any fault was found or the graph is unusable.",
        after_help = "EXAMPLES:\n    graphiti validate graph.json\n\n    graphiti validate graph.json --json"
    )]
    Validate(cmd::validate::ValidateArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("GRAPHITI_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "graphiti_core=debug,graphiti_cli=debug,info"
        } else {
            "graphiti_core=info,graphiti_cli=info,warn"
        })
    });

    let format = env::var("GRAPHITI_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let ctx = cmd::Context {
        output: cli.output_mode(),
        config: cli.analysis_config()?,
    };
    debug!(mode = ?ctx.config.mode, seeds = ctx.config.seeds.len(), "resolved config");

    match cli.command {
        Commands::Matrix(ref args) => cmd::matrix::run_matrix(args, &ctx),
        Commands::Groups(ref args) => cmd::groups::run_groups(args, &ctx),
        Commands::Cycles(ref args) => cmd::cycles::run_cycles(args, &ctx),
        Commands::Steps(ref args) => cmd::steps::run_steps(args, &ctx),
        Commands::Validate(ref args) => cmd::validate::run_validate(args, &ctx),
    }
}
