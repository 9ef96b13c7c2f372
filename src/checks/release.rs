//! Files changed on (or off) a release branch.

use super::matcher::FileMatcher;
use super::{Check, CheckContext};
use crate::config::{FileChangedRule, ReleaseConfig, ReleaseNotesPair};
use crate::error::Result;
use crate::host::is_release_branch;
use crate::report::{Finding, Severity};

/// A compiled [`FileChangedRule`].
#[derive(Debug, Clone)]
pub struct FileChangedMatcher {
    name: String,
    files: FileMatcher,
    message: String,
    on_release_branch: bool,
    severity: Severity,
}

impl FileChangedMatcher {
    /// Compile a rule from config.
    pub fn compile(rule: &FileChangedRule) -> Result<Self> {
        Ok(Self {
            name: rule.name.clone(),
            files: FileMatcher::new(
                &rule.files,
                &rule.exclude_files,
                &format!("release.{}", rule.name),
            )?,
            message: rule.message.clone(),
            on_release_branch: rule.on_release_branch,
            severity: rule.severity,
        })
    }

    /// The finding for this rule, if it fires.
    ///
    /// Fires when a changed file matches and the branch kind is the one the
    /// rule watches.
    pub fn finding(&self, changed_files: &[String], release_branch: bool) -> Option<Finding> {
        if self.on_release_branch != release_branch {
            return None;
        }

        let changed = changed_files.iter().any(|f| self.files.is_match(f));
        if !changed {
            return None;
        }

        tracing::debug!("release.{}: watched file changed", self.name);
        Some(Finding::new(self.message.clone(), self.severity))
    }
}

/// Applies every configured file-changed rule.
#[derive(Debug, Clone)]
pub struct FileChangedCheck {
    rules: Vec<FileChangedMatcher>,
}

impl FileChangedCheck {
    /// Build the check from its config section.
    pub fn from_config(config: &ReleaseConfig) -> Result<Self> {
        Ok(Self {
            rules: config
                .rules
                .iter()
                .map(FileChangedMatcher::compile)
                .collect::<Result<_>>()?,
        })
    }
}

impl Check for FileChangedCheck {
    fn name(&self) -> &'static str {
        "release"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<Vec<Finding>> {
        let changed_files = ctx.scm.all_changed_files();
        let release_branch = is_release_branch(ctx.pr);

        Ok(self
            .rules
            .iter()
            .filter_map(|rule| rule.finding(&changed_files, release_branch))
            .collect())
    }
}

/// Posts a message when release notes change without their store strings.
#[derive(Debug, Clone)]
pub struct ReleaseNotesCheck {
    pairs: Vec<ReleaseNotesPair>,
}

impl ReleaseNotesCheck {
    /// Build the check from its config section.
    pub fn from_config(config: &ReleaseConfig) -> Self {
        Self {
            pairs: config.release_notes.clone(),
        }
    }
}

impl Check for ReleaseNotesCheck {
    fn name(&self) -> &'static str {
        "release_notes"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<Vec<Finding>> {
        let modified = ctx.scm.modified_files();
        let is_modified = |path: &str| modified.iter().any(|f| f == path);

        Ok(self
            .pairs
            .iter()
            .filter(|pair| {
                is_modified(&pair.release_notes_file) && !is_modified(&pair.store_strings_file)
            })
            .map(|pair| {
                Finding::message(format!(
                    "The `{}` file should be updated if the editorialized release notes file `{}` is being changed.",
                    pair.store_strings_file, pair.release_notes_file
                ))
            })
            .collect())
    }
}
