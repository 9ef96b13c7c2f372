//! Command implementations for prcheck.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the input loading shared by `run` and
//! `missing-tests`.

mod config_cmd;
mod run;


use crate::cli::{ChangesetArgs, Command};
use crate::config::Config;
use crate::error::{PrCheckError, Result};
use crate::host::LocalChangeset;

pub use config_cmd::cmd_config;
pub use missing_tests::{cmd_missing_tests, find_violations};
pub use run::{cmd_run, execute_run};

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Run(args) => cmd_run(args),
        Command::MissingTests(args) => cmd_missing_tests(args),
        Command::Config(args) => cmd_config(args),
    }
}

/// Load the config named by `--config`, or discover it in the repository.
pub(crate) fn load_config(args: &ChangesetArgs) -> Result<Config> {
    match &args.config {
        Some(path) => Config::load(path),
        None => Config::discover(&args.repo),
    }
}

/// Materialise the changeset from `--diff` or `--base`.
pub(crate) fn load_changeset(args: &ChangesetArgs) -> Result<LocalChangeset> {
    match (&args.source.diff, &args.source.base) {
        (Some(diff), _) => LocalChangeset::from_diff_file(&args.repo, diff),
        (None, Some(base)) => LocalChangeset::from_git(&args.repo, base),
        (None, None) => Err(PrCheckError::UserError(
            "no diff source given\nFix: pass --diff <file> or --base <rev>".to_string(),
        )),
    }
}
