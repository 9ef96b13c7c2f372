//! Analytics ("Tracks") changes that need the `Tracks` label.

use regex::Regex;

use super::labels::ExpectedLabels;
use super::matcher::{compile_regex, compile_regexes};
use super::{Check, CheckContext};
use crate::config::TracksConfig;
use crate::diff::{DiffLineKind, basename, classify};
use crate::error::Result;
use crate::host::SourceControl;
use crate::report::{Finding, Severity};

/// Instructions posted whenever analytics changes are detected.
pub const TRACKS_PR_INSTRUCTIONS: &str = "\
This PR contains changes to Tracks-related logic. Please ensure (**author and reviewer**) the following are completed:

- The PR must be assigned the **Tracks** label.
- The tracks events must be validated in the Tracks system.
- Verify the internal Tracks spreadsheet has also been updated.
- Please consider registering any new events.
";

/// Error reported when the `Tracks` label is missing.
pub const TRACKS_NO_LABEL_MESSAGE: &str = "Please ensure the PR has the `Tracks` label.";

/// Detects analytics changes and asks for the `Tracks` label.
#[derive(Debug, Clone)]
pub struct TracksCheck {
    tracks_files: Vec<String>,
    usage_patterns: Vec<Regex>,
    label: ExpectedLabels,
}

impl TracksCheck {
    /// Build the check from its config section.
    pub fn from_config(config: &TracksConfig) -> Result<Self> {
        Ok(Self {
            tracks_files: config
                .tracks_files
                .iter()
                .map(|f| basename(f).to_string())
                .collect(),
            usage_patterns: compile_regexes(&config.usage_patterns, "tracks.usage_patterns")?,
            label: ExpectedLabels::new(
                vec![compile_regex(&config.label_pattern, "tracks.label_pattern")?],
                Some(TRACKS_NO_LABEL_MESSAGE.to_string()),
                Severity::Error,
            ),
        })
    }

    /// Whether a changed file has the basename of a tracks file.
    fn changes_tracks_files(&self, scm: &dyn SourceControl) -> bool {
        scm.all_changed_files()
            .iter()
            .any(|path| self.tracks_files.iter().any(|t| t == basename(path)))
    }

    /// Whether an added or removed line of the changeset uses analytics.
    fn diff_has_tracks_changes(&self, scm: &dyn SourceControl) -> bool {
        if self.usage_patterns.is_empty() {
            return false;
        }

        scm.full_changeset_diff().iter().any(|file| {
            file.patch.lines().any(|line| {
                classify(line) != DiffLineKind::Other
                    && self.usage_patterns.iter().any(|re| re.is_match(line))
            })
        })
    }
}

impl Check for TracksCheck {
    fn name(&self) -> &'static str {
        "tracks"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<Vec<Finding>> {
        if !self.changes_tracks_files(ctx.scm) && !self.diff_has_tracks_changes(ctx.scm) {
            return Ok(Vec::new());
        }

        tracing::debug!("tracks: analytics changes detected");
        let mut findings: Vec<Finding> = self.label.check(ctx.pr.labels()).into_iter().collect();
        findings.push(Finding::message(TRACKS_PR_INSTRUCTIONS));
        Ok(findings)
    }
}
