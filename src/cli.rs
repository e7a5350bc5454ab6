// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::types::ColorMode;

/// Command-line arguments for `kubectl-foreach`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "kubectl-foreach",
    version,
    about = "Run a kubectl command in one or more contexts, in parallel.",
    long_about = None,
    after_help = "\
Filters:
  NAME      exact context name
  /REGEX/   contexts matching the regular expression (unanchored)
  ^FILTER   exclude contexts matching FILTER
With no positive filters every context is selected.

Examples:
  kubectl foreach -- get pods
  kubectl foreach /^prod/ ^prod-eu -- get nodes -o wide
  kubectl foreach -I _ /staging/ -- get deploy --context=_
  kubectl foreach --auto /^dev/ -- delete pod -l app=web"
)]
pub struct CliArgs {
    /// Parallel runs (default: as many as matched contexts).
    #[arg(short = 'c', long, value_name = "N")]
    pub workers: Option<usize>,

    /// String to replace in kubectl args with the context name (like
    /// `xargs -I`). Disables the automatic `--context` flag.
    #[arg(short = 'I', long, value_name = "STR")]
    pub replace: Option<String>,

    /// Do not ask for confirmation before running.
    #[arg(short, long)]
    pub quiet: bool,

    /// List the selected contexts, then run without asking.
    #[arg(short, long)]
    pub auto: bool,

    /// Colour context labels.
    #[arg(long, value_enum, value_name = "WHEN")]
    pub color: Option<ColorMode>,

    /// Optional TOML file with defaults.
    ///
    /// If omitted, `KUBECTL_FOREACH_CONFIG` is consulted.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `KUBECTL_FOREACH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Context filters.
    #[arg(value_name = "FILTER")]
    pub filters: Vec<String>,

    /// Arguments passed to kubectl for every selected context.
    #[arg(last = true, required = true, value_name = "KUBECTL_ARGS")]
    pub command: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
