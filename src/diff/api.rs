//! Public types for per-file diffs.

use serde::{Deserialize, Serialize};

use super::classify::{DiffLineKind, classify};

/// How a file changed within a changeset.
///
/// Informational only: the missing-test detector looks at the patch text,
/// never at this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    /// File was created.
    New,
    /// File existed before and after (includes renames).
    #[default]
    Modified,
    /// File was removed.
    Deleted,
}

/// One file's change within a changeset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDiff {
    /// Repository-relative file path (forward slashes).
    pub path: String,
    /// How the file changed.
    #[serde(default)]
    pub change_type: ChangeType,
    /// The full unified-diff text for this file, headers included.
    pub patch: String,
}

impl FileDiff {
    /// Create a new file diff.
    pub fn new(path: impl Into<String>, change_type: ChangeType, patch: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            change_type,
            patch: patch.into(),
        }
    }

    /// Number of added lines in the patch.
    pub fn insertions(&self) -> usize {
        count_lines(&self.patch, DiffLineKind::Added)
    }

    /// Number of removed lines in the patch.
    pub fn deletions(&self) -> usize {
        count_lines(&self.patch, DiffLineKind::Removed)
    }
}

fn count_lines(patch: &str, kind: DiffLineKind) -> usize {
    patch.lines().filter(|line| classify(line) == kind).count()
}
