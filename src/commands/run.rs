//! Implementation of the `prcheck run` command.

use chrono::Utc;

use super::{load_changeset, load_config};
use crate::checks::CheckContext;
use crate::cli::RunArgs;
use crate::error::{PrCheckError, Result};
use crate::host::{PrSnapshot, is_main_branch, is_release_branch, is_wip};
use crate::report::StatusReport;
use crate::runner::{RunSummary, build_checks, run_checks};

/// Load every input, run the enabled checks and collect the report.
///
/// Does not print anything and does not turn errors in the report into a
/// failure; see [`cmd_run`].
pub fn execute_run(args: &RunArgs) -> Result<(StatusReport, RunSummary)> {
    let config = load_config(&args.changeset)?;
    let checks = build_checks(&config)?;
    let pr = PrSnapshot::load(&args.pr)?;
    let scm = load_changeset(&args.changeset)?;
    let now = args.now.unwrap_or_else(Utc::now);

    tracing::info!(
        "running {} check(s) against PR targeting '{}'",
        checks.len(),
        pr.base_branch
    );
    tracing::debug!(
        "main branch: {}, release branch: {}, work in progress: {}",
        is_main_branch(&pr),
        is_release_branch(&pr),
        is_wip(&pr)
    );

    let ctx = CheckContext::new(&scm, &pr, now);
    let mut report = StatusReport::new();
    let summary = run_checks(&checks, &ctx, &mut report)?;
    Ok((report, summary))
}

/// Execute the `prcheck run` command.
///
/// Prints the report to stdout. Returns [`PrCheckError::ChecksFailed`] when
/// any error was reported, which maps to exit code 2.
pub fn cmd_run(args: RunArgs) -> Result<()> {
    let (report, summary) = execute_run(&args)?;
    let rendered = report.render(args.changeset.format)?;
    println!("{}", rendered.trim_end());

    if summary.passed() {
        Ok(())
    } else {
        Err(PrCheckError::ChecksFailed(format!(
            "{} error(s) reported",
            summary.errors
        )))
    }
}
