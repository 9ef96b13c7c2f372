//! Check construction and sequential execution.
//!
//! Checks are built from the config sections that enable them and run in
//! [`CHECK_NAMES`] order. Every finding is forwarded to a [`ReportSink`].

use crate::checks::{
    AddedLinesCheck, CHECK_NAMES, Check, CheckContext, FileChangedCheck, LabelsCheck,
    ManifestCheck, MilestoneCheck, MissingTestsCheck, PodfileLockCheck, PrBodyCheck, PrSizeCheck,
    ReleaseNotesCheck, TracksCheck, ViewChangesCheck,
};
use crate::config::Config;
use crate::error::Result;
use crate::report::{ReportSink, Severity};

/// Counts of what one run reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Checks that ran.
    pub checks: usize,
    /// Error-severity findings.
    pub errors: usize,
    /// Warning-severity findings.
    pub warnings: usize,
    /// Informational findings.
    pub messages: usize,
}

impl RunSummary {
    /// Whether no error-severity finding was reported.
    pub fn passed(&self) -> bool {
        self.errors == 0
    }

    fn record(&mut self, severity: Severity) {
        match severity {
            Severity::Error => self.errors += 1,
            Severity::Warning => self.warnings += 1,
            Severity::Message => self.messages += 1,
            Severity::None => {}
        }
    }
}

/// Build every enabled check, in canonical order.
///
/// Invalid regexes or globs in the config are reported here as
/// [`crate::error::PrCheckError::UserError`].
pub fn build_checks(config: &Config) -> Result<Vec<Box<dyn Check>>> {
    let mut checks: Vec<Box<dyn Check>> = Vec::new();

    if config.missing_tests.enabled {
        checks.push(Box::new(MissingTestsCheck::from_config(&config.missing_tests)?));
    }
    if config.labels.enabled {
        checks.push(Box::new(LabelsCheck::from_config(&config.labels)?));
    }
    if config.milestone.enabled {
        checks.push(Box::new(MilestoneCheck::from_config(&config.milestone)));
    }
    if config.pr_size.enabled {
        checks.push(Box::new(PrSizeCheck::from_config(&config.pr_size)?));
    }
    if config.pr_size.body_enabled {
        checks.push(Box::new(PrBodyCheck::from_config(&config.pr_size)));
    }
    if config.view_changes.enabled {
        checks.push(Box::new(ViewChangesCheck::from_config(&config.view_changes)));
    }
    if config.manifest.enabled {
        checks.push(Box::new(ManifestCheck::from_config(&config.manifest)));
    }
    if config.added_lines.enabled {
        checks.push(Box::new(AddedLinesCheck::from_config(&config.added_lines)?));
    }
    if config.podfile.enabled {
        checks.push(Box::new(PodfileLockCheck::from_config(&config.podfile)?));
    }
    if config.release.enabled {
        checks.push(Box::new(FileChangedCheck::from_config(&config.release)?));
    }
    if config.release.release_notes_enabled {
        checks.push(Box::new(ReleaseNotesCheck::from_config(&config.release)));
    }
    if config.tracks.enabled {
        checks.push(Box::new(TracksCheck::from_config(&config.tracks)?));
    }

    debug_assert!(is_canonical_order(&checks));
    Ok(checks)
}

/// Run `checks` in order and forward their findings to `sink`.
///
/// A check that fails (e.g. an unreadable lockfile) aborts the run; findings
/// already reported stay in the sink.
pub fn run_checks(
    checks: &[Box<dyn Check>],
    ctx: &CheckContext<'_>,
    sink: &mut dyn ReportSink,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for check in checks {
        let findings = check.run(ctx)?;
        tracing::debug!("{}: {} finding(s)", check.name(), findings.len());

        for finding in &findings {
            if finding.message.is_empty() {
                continue;
            }
            summary.record(finding.severity);
            sink.report_finding(finding);
        }
        summary.checks += 1;
    }

    tracing::info!(
        "ran {} check(s): {} error(s), {} warning(s), {} message(s)",
        summary.checks,
        summary.errors,
        summary.warnings,
        summary.messages
    );
    Ok(summary)
}

fn is_canonical_order(checks: &[Box<dyn Check>]) -> bool {
    let positions: Vec<usize> = checks
        .iter()
        .map(|c| {
            CHECK_NAMES
                .iter()
                .position(|&n| n == c.name())
                .unwrap_or(usize::MAX)
        })
        .collect();
    positions.windows(2).all(|w| w[0] < w[1])
}
