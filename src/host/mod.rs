//! Collaborator interfaces supplied by the host review tool.
//!
//! Checks read everything through these traits:
//! - [`SourceControl`]: file lists, per-file diffs, committed file contents
//! - [`PullRequestInfo`]: labels, body, title, base branch, state, milestone
//!
//! The local implementations ([`LocalChangeset`], [`PrSnapshot`]) back the
//! `prcheck` binary and the tests. All data is materialised before any check
//! runs; nothing here performs network I/O.

mod branch;
mod local;
mod snapshot;


use crate::diff::{ChangeType, FileDiff};
use crate::error::Result;

// Re-export public API
pub use branch::{MAIN_BRANCHES, is_main_branch, is_release_branch, is_wip};
pub use local::LocalChangeset;
pub use snapshot::{Milestone, PrSnapshot};

/// Source-control metadata for the pull request under review.
pub trait SourceControl {
    /// Every per-file diff of the pull request, in host order.
    fn full_changeset_diff(&self) -> &[FileDiff];

    /// Read a committed file directly (e.g. a lockfile).
    ///
    /// A missing file is a fatal [`crate::error::PrCheckError::ReadError`].
    fn read_file(&self, path: &str) -> Result<String>;

    /// Paths of files created by the pull request.
    fn added_files(&self) -> Vec<String> {
        files_with(self.full_changeset_diff(), ChangeType::New)
    }

    /// Paths of files modified by the pull request.
    fn modified_files(&self) -> Vec<String> {
        files_with(self.full_changeset_diff(), ChangeType::Modified)
    }

    /// Paths of files deleted by the pull request.
    fn deleted_files(&self) -> Vec<String> {
        files_with(self.full_changeset_diff(), ChangeType::Deleted)
    }

    /// The diff of a single file, if it is part of the changeset.
    fn diff_for_file(&self, path: &str) -> Option<&FileDiff> {
        self.full_changeset_diff().iter().find(|d| d.path == path)
    }

    /// Added then modified paths.
    fn added_and_modified_files(&self) -> Vec<String> {
        let mut files = self.added_files();
        files.extend(self.modified_files());
        files
    }

    /// Added, modified, then deleted paths.
    fn all_changed_files(&self) -> Vec<String> {
        let mut files = self.added_and_modified_files();
        files.extend(self.deleted_files());
        files
    }
}

/// Pull-request metadata for the pull request under review.
pub trait PullRequestInfo {
    /// Labels currently applied to the pull request.
    fn labels(&self) -> &[String];

    /// Description text.
    fn body(&self) -> &str;

    /// Title.
    fn title(&self) -> &str;

    /// Name of the branch the pull request targets.
    fn branch_for_base(&self) -> &str;

    /// State as reported by the host (`open`, `closed`, ...).
    fn state(&self) -> &str;

    /// Milestone the pull request is assigned to, if any.
    fn milestone(&self) -> Option<&Milestone>;

    /// Whether a label with exactly this name is applied.
    fn has_label(&self, label: &str) -> bool {
        self.labels().iter().any(|l| l == label)
    }
}

fn files_with(diffs: &[FileDiff], change_type: ChangeType) -> Vec<String> {
    diffs
        .iter()
        .filter(|d| d.change_type == change_type)
        .map(|d| d.path.clone())
        .collect()
}
