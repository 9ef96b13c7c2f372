//! CLI argument parsing for prcheck.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{ArgAction, Args, Parser, Subcommand};

use crate::report::OutputFormat;

/// prcheck: pull-request review checks over labels, metadata and unified diffs.
///
/// A pull request is described by two inputs:
/// - a snapshot file (YAML or JSON) with labels, body, base branch and milestone
/// - a unified diff, given as a file or computed from a git base revision
#[derive(Parser, Debug)]
#[command(name = "prcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging on stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for prcheck.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run every enabled check against a pull request.
    ///
    /// Prints the status report. Exits with code 2 if any check reported
    /// an error.
    Run(RunArgs),

    /// List classes added without unit tests.
    ///
    /// Runs only the missing-test detector; the bypass label is not
    /// consulted. Exits with code 2 if any class is reported.
    MissingTests(MissingTestsArgs),

    /// Print the configuration as YAML.
    ///
    /// Without `--config`, prints the built-in defaults.
    Config(ConfigArgs),
}

/// Where the diff of the pull request comes from.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct DiffSource {
    /// Read the unified diff from a file (e.g. saved `git diff` output).
    #[arg(long)]
    pub diff: Option<PathBuf>,

    /// Compute the diff as `git diff <BASE>..HEAD` in the repository.
    #[arg(long)]
    pub base: Option<String>,
}

/// Arguments shared by commands that inspect a changeset.
#[derive(Args, Debug, Clone)]
pub struct ChangesetArgs {
    #[command(flatten)]
    pub source: DiffSource,

    /// Repository directory (committed files and `.prcheck.yaml` live here).
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// Config file to use instead of `<repo>/.prcheck.yaml`.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Pull-request snapshot file (YAML or JSON).
    #[arg(long)]
    pub pr: PathBuf,

    #[command(flatten)]
    pub changeset: ChangesetArgs,

    /// Reference time for date-based checks (RFC 3339). Defaults to now.
    #[arg(long)]
    pub now: Option<DateTime<Utc>>,
}

/// Arguments for the `missing-tests` command.
#[derive(Args, Debug)]
pub struct MissingTestsArgs {
    #[command(flatten)]
    pub changeset: ChangesetArgs,
}

/// Arguments for the `config` command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Load, validate and print this config file instead of the defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
