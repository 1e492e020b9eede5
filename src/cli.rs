// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `taskdag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskdag",
    version,
    about = "Compute a dependency-aware execution order for a project's tasks.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the task batch file (TOML).
    ///
    /// Default: `Taskdag.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Taskdag.toml")]
    pub batch: String,

    /// Reject dependency references that name no task in the batch.
    ///
    /// Without this flag such references impose no constraint and are only
    /// logged.
    #[arg(long)]
    pub strict: bool,

    /// How due dates influence the order (default: visit-order).
    ///
    /// `visit-order` keeps dependencies ahead of their dependents
    /// unconditionally; `global-sort` re-sorts the finished order by due
    /// date, which can pull an urgent task ahead of its dependency.
    #[arg(long, value_enum, value_name = "MODE")]
    pub due_date_mode: Option<DueDateMode>,

    /// Output format for the recommended order (default: plain).
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the batch and its roots, but don't order.
    #[arg(long)]
    pub dry_run: bool,
}

/// Due-date handling as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum DueDateMode {
    VisitOrder,
    GlobalSort,
}

/// Output format as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum OutputFormat {
    /// One title per line.
    Plain,
    /// JSON object with a `recommended_order` array.
    Json,
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
