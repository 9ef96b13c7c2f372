//! Builders shared by the check tests.

use chrono::{DateTime, TimeZone, Utc};

use super::{Check, CheckContext};
use crate::diff::{ChangeType, FileDiff};
use crate::host::{LocalChangeset, PrSnapshot};
use crate::report::Finding;

/// Fixed reference time used by every check test.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
}

/// A patch for `path` whose body is `lines`, each already carrying its
/// `+`/`-`/` ` marker.
pub fn patch(path: &str, lines: &[&str]) -> String {
    let mut text = format!(
        "diff --git a/{path} b/{path}\n--- a/{path}\n+++ b/{path}\n@@ -1,1 +1,1 @@\n"
    );
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    text
}

/// A modified file with the given marked lines.
pub fn modified(path: &str, lines: &[&str]) -> FileDiff {
    FileDiff::new(path, ChangeType::Modified, patch(path, lines))
}

/// A new file with the given marked lines.
pub fn added(path: &str, lines: &[&str]) -> FileDiff {
    FileDiff::new(path, ChangeType::New, patch(path, lines))
}

/// A deleted file with the given marked lines.
pub fn deleted(path: &str, lines: &[&str]) -> FileDiff {
    FileDiff::new(path, ChangeType::Deleted, patch(path, lines))
}

/// A changeset rooted at the current directory.
pub fn changeset(files: Vec<FileDiff>) -> LocalChangeset {
    LocalChangeset::new(".", files)
}

/// A pull request with the given labels and defaults elsewhere.
pub fn pr_with_labels(labels: &[&str]) -> PrSnapshot {
    PrSnapshot {
        labels: labels.iter().map(|l| l.to_string()).collect(),
        ..Default::default()
    }
}

/// Run `check` against a changeset and pull request at [`now`].
pub fn run_check(check: &dyn Check, scm: &LocalChangeset, pr: &PrSnapshot) -> Vec<Finding> {
    let ctx = CheckContext::new(scm, pr, now());
    check.run(&ctx).unwrap()
}
