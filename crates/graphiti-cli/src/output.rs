//! How `graphiti` writes results and graph faults.
//!
//! Results go to stdout, faults to stderr. The [`OutputMode`] is chosen
//! once per run: `--format`, then `--json`, then the `FORMAT` env var, and
//! finally pretty on a terminal, text when piped.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

use clap::ValueEnum;
use graphiti_core::GraphError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Headed sections for people at a terminal.
    Pretty,
    /// Bare lines, stable for scripts.
    Text,
    Json,
}

impl OutputMode {
    pub const fn is_pretty(self) -> bool {
        matches!(self, Self::Pretty)
    }

    /// Resolve the mode for this process.
    pub fn resolve(flag: Option<Self>, json: bool) -> Self {
        let env = std::env::var("FORMAT").ok();
        Self::pick(flag, json, env.as_deref(), io::stdout().is_terminal())
    }

    fn pick(flag: Option<Self>, json: bool, env: Option<&str>, tty: bool) -> Self {
        flag.or_else(|| json.then_some(Self::Json))
            .or_else(|| env.and_then(|value| Self::from_str(value, true).ok()))
            .unwrap_or(if tty { Self::Pretty } else { Self::Text })
    }
}

/// A graph fault as shown to users: stable code, message, optional hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fault {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
}

impl<Id: Display> From<&GraphError<Id>> for Fault {
    fn from(err: &GraphError<Id>) -> Self {
        let code = err.code();
        Self {
            code: code.code(),
            message: err.to_string(),
            hint: code.hint(),
        }
    }
}

/// Whether a fault stopped the command or was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    const fn label(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

/// Write `payload` to stdout: JSON as-is, otherwise through `human`.
pub fn emit<T: Serialize>(
    mode: OutputMode,
    payload: &T,
    human: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    if mode == OutputMode::Json {
        serde_json::to_writer_pretty(&mut out, payload)?;
        writeln!(out)?;
    } else {
        human(payload, &mut out)?;
    }
    Ok(())
}

/// Report faults on stderr.
pub fn report_faults(mode: OutputMode, severity: Severity, faults: &[Fault]) -> anyhow::Result<()> {
    write_faults(&mut io::stderr().lock(), mode, severity, faults)?;
    Ok(())
}

/// One line per fault. JSON mode writes one `{"<severity>": fault}` object
/// per line.
fn write_faults(
    w: &mut dyn Write,
    mode: OutputMode,
    severity: Severity,
    faults: &[Fault],
) -> io::Result<()> {
    let label = severity.label();
    for fault in faults {
        if mode == OutputMode::Json {
            serde_json::to_writer(&mut *w, &serde_json::json!({ label: fault }))?;
            writeln!(w)?;
            continue;
        }
        writeln!(w, "{label}[{}]: {}", fault.code, fault.message)?;
        if let Some(hint) = fault.hint {
            writeln!(w, "  hint: {hint}")?;
        }
    }
    Ok(())
}

/// Pretty heading, underlined to its own width.
pub fn section(w: &mut dyn Write, heading: &str) -> io::Result<()> {
    writeln!(w, "{heading}\n{}", "=".repeat(heading.chars().count()))
}

/// Pretty `key: value` line with keys right-aligned.
pub fn field(w: &mut dyn Write, key: &str, value: impl Display) -> io::Result<()> {
    writeln!(w, "{key:>8}: {value}")
}
