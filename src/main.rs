//! prcheck: pull-request review checks over labels, metadata and unified diffs.
//!
//! This is the main entry point for the `prcheck` CLI. It parses arguments,
//! initialises logging, dispatches to the appropriate command handler, and
//! handles errors with proper exit codes.

use std::process::ExitCode;

use prcheck::cli::Cli;
use prcheck::{commands, exit_codes};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Log to stderr so stdout carries only the report.
///
/// `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "prcheck=debug" } else { "prcheck=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
