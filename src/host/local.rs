//! Changeset backed by local files or a local git repository.

use std::path::{Path, PathBuf};

use super::SourceControl;
use crate::diff::{FileDiff, parse_changeset};
use crate::error::{PrCheckError, Result};
use crate::git::{diff_against, get_repo_root};

/// A materialised changeset plus the directory committed files are read from.
#[derive(Debug, Clone)]
pub struct LocalChangeset {
    root: PathBuf,
    files: Vec<FileDiff>,
}

impl LocalChangeset {
    /// Wrap already-split file diffs.
    pub fn new(root: impl Into<PathBuf>, files: Vec<FileDiff>) -> Self {
        Self {
            root: root.into(),
            files,
        }
    }

    /// Build a changeset from raw `git diff` output.
    pub fn from_diff_text(root: impl Into<PathBuf>, diff_text: &str) -> Self {
        let files = parse_changeset(diff_text);
        tracing::debug!("parsed {} file diff(s) from diff text", files.len());
        Self::new(root, files)
    }

    /// Build a changeset from a diff file on disk.
    pub fn from_diff_file<P: AsRef<Path>>(root: impl Into<PathBuf>, diff_path: P) -> Result<Self> {
        let diff_path = diff_path.as_ref();
        let diff_text = std::fs::read_to_string(diff_path).map_err(|e| {
            PrCheckError::ReadError(format!(
                "failed to read diff file '{}': {}",
                diff_path.display(),
                e
            ))
        })?;
        Ok(Self::from_diff_text(root, &diff_text))
    }

    /// Build a changeset by diffing `HEAD` against `base` in a git checkout.
    ///
    /// Committed files are read relative to the repository root.
    pub fn from_git<P: AsRef<Path>>(repo: P, base: &str) -> Result<Self> {
        let root = get_repo_root(repo)?;
        let diff_text = diff_against(&root, base)?;
        Ok(Self::from_diff_text(root, &diff_text))
    }

    /// Directory committed files are read from.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SourceControl for LocalChangeset {
    fn full_changeset_diff(&self) -> &[FileDiff] {
        &self.files
    }

    fn read_file(&self, path: &str) -> Result<String> {
        let full_path = self.root.join(path);
        std::fs::read_to_string(&full_path).map_err(|e| {
            PrCheckError::ReadError(format!(
                "failed to read '{}': {}",
                full_path.display(),
                e
            ))
        })
    }
}
