//! Pull-request checks.
//!
//! Every check reads facts through the host traits in [`crate::host`],
//! applies a predicate and returns [`Finding`]s. Checks never report
//! directly; the runner forwards findings to a [`crate::report::ReportSink`].
//!
//! Check families:
//! - `missing_tests`: classes added without unit tests
//! - `labels`: do-not-merge, required and recommended labels
//! - `milestone`: milestone assignment and due date
//! - `pr_size`: diff size and description length
//! - `view_changes`: view files changed without screenshots
//! - `manifest`: manifests changed without their lock files
//! - `added_lines`: added diff lines matching a pattern
//! - `podfile`: commit/branch references in a committed Podfile.lock
//! - `release`: files changed on (or off) a release branch
//! - `tracks`: analytics changes that need the `Tracks` label

pub mod added_lines;
pub mod labels;
pub mod manifest;
mod matcher;
pub mod milestone;
pub mod podfile;
pub mod pr_size;
pub mod release;
pub mod tracks;
pub mod unit_tests;
pub mod view_changes;

#[cfg(test)]
pub(crate) mod test_utils;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::host::{PullRequestInfo, SourceControl};
use crate::report::Finding;

// Re-export public API
pub use added_lines::AddedLinesCheck;
pub use labels::LabelsCheck;
pub use manifest::ManifestCheck;
pub use matcher::{FileMatcher, build_globset, compile_regex, compile_regexes};
pub use milestone::MilestoneCheck;
pub use podfile::PodfileLockCheck;
pub use pr_size::{PrBodyCheck, PrSizeCheck};
pub use release::{FileChangedCheck, ReleaseNotesCheck};
pub use tracks::TracksCheck;
pub use unit_tests::MissingTestsCheck;
pub use view_changes::ViewChangesCheck;

/// Canonical check names, in the order the runner executes them.
pub const CHECK_NAMES: &[&str] = &[
    "missing_tests",
    "labels",
    "milestone",
    "pr_size",
    "pr_body",
    "view_changes",
    "manifest",
    "added_lines",
    "podfile",
    "release",
    "release_notes",
    "tracks",
];

/// Everything a check may read while it runs.
pub struct CheckContext<'a> {
    /// Files and diffs of the pull request.
    pub scm: &'a dyn SourceControl,
    /// Labels, body, base branch and milestone of the pull request.
    pub pr: &'a dyn PullRequestInfo,
    /// Reference time for date-based checks.
    pub now: DateTime<Utc>,
}

impl<'a> CheckContext<'a> {
    /// Create a context for one review run.
    pub fn new(
        scm: &'a dyn SourceControl,
        pr: &'a dyn PullRequestInfo,
        now: DateTime<Utc>,
    ) -> Self {
        Self { scm, pr, now }
    }
}

/// A single pull-request check.
pub trait Check {
    /// Short identifier, one of [`CHECK_NAMES`].
    fn name(&self) -> &'static str;

    /// Inspect the pull request and return what should be reported.
    ///
    /// Heuristic non-matches yield no findings. An `Err` is reserved for
    /// fatal problems such as a required file that cannot be read.
    fn run(&self, ctx: &CheckContext<'_>) -> Result<Vec<Finding>>;
}
