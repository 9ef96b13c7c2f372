//! Per-check configuration sections and their defaults.
//!
//! Every section is `#[serde(default)]`, so a config file only needs to
//! mention the values it changes.

use serde::{Deserialize, Serialize};

use crate::checks::unit_tests::{
    DEFAULT_CLASS_EXCEPTIONS, DEFAULT_SUBCLASS_EXCEPTIONS, TestFileHeuristic,
};
use crate::report::Severity;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// =========================================================================
// Missing tests
// =========================================================================

/// Default label that downgrades missing-test errors to warnings.
pub const DEFAULT_BYPASS_LABEL: &str = "unit-tests-exemption";

/// `missing_tests:` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissingTestsConfig {
    /// Whether the check runs.
    pub enabled: bool,
    /// Regexes over class names that never need tests.
    pub class_exceptions: Vec<String>,
    /// Regexes over supertype tokens whose subclasses never need tests.
    pub subclass_exceptions: Vec<String>,
    /// Globs of files to skip entirely (`*` also matches `/`).
    pub path_exceptions: Vec<String>,
    /// Label that downgrades violations to warnings.
    pub bypass_label: String,
    /// Which test-file conventions are recognised.
    pub test_files: TestFileHeuristic,
}

impl Default for MissingTestsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            class_exceptions: strings(DEFAULT_CLASS_EXCEPTIONS),
            subclass_exceptions: strings(DEFAULT_SUBCLASS_EXCEPTIONS),
            path_exceptions: Vec::new(),
            bypass_label: DEFAULT_BYPASS_LABEL.to_string(),
            test_files: TestFileHeuristic::default(),
        }
    }
}

// =========================================================================
// Labels
// =========================================================================

/// `labels:` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelsConfig {
    /// Whether the check runs.
    pub enabled: bool,
    /// Labels (case-insensitive) that block merging.
    pub do_not_merge: Vec<String>,
    /// Regexes that must each match at least one label (errors).
    pub required: Vec<String>,
    /// Replaces the generated message for missing required labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_message: Option<String>,
    /// Regexes that should each match at least one label (warnings).
    pub recommended: Vec<String>,
    /// Replaces the generated message for missing recommended labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_message: Option<String>,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            do_not_merge: strings(&["Do Not Merge"]),
            required: Vec::new(),
            required_message: None,
            recommended: Vec::new(),
            recommended_message: None,
        }
    }
}

// =========================================================================
// Milestone
// =========================================================================

/// `milestone:` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MilestoneConfig {
    /// Whether the check runs.
    pub enabled: bool,
    /// Warn when the milestone is due within this many days.
    pub days_before_due: u32,
    /// How to report a pull request without a milestone.
    pub if_no_milestone: Severity,
}

impl Default for MilestoneConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            days_before_due: 5,
            if_no_milestone: Severity::Warning,
        }
    }
}

// =========================================================================
// PR size
// =========================================================================

/// Which changed lines count towards the diff size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiffSizeKind {
    /// Added lines only.
    Insertions,
    /// Removed lines only.
    Deletions,
    /// Added plus removed lines (default).
    #[default]
    All,
}

/// `pr_size:` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrSizeConfig {
    /// Whether the diff-size check runs.
    pub enabled: bool,
    /// Largest diff that is not reported.
    pub max_size: usize,
    /// Which lines are counted.
    pub count: DiffSizeKind,
    /// Globs selecting the counted files (empty counts every file).
    pub files: Vec<String>,
    /// Globs of files never counted.
    pub exclude_files: Vec<String>,
    /// Replaces the generated diff-size message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// How an oversized diff is reported.
    pub severity: Severity,
    /// Whether the description-length check runs.
    pub body_enabled: bool,
    /// Descriptions of at most this many characters are reported.
    pub min_body_length: usize,
    /// Replaces the generated short-description message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_message: Option<String>,
    /// How a short description is reported.
    pub body_severity: Severity,
}

impl Default for PrSizeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_size: 500,
            count: DiffSizeKind::All,
            files: Vec::new(),
            exclude_files: Vec::new(),
            message: None,
            severity: Severity::Warning,
            body_enabled: true,
            min_body_length: 10,
            body_message: None,
            body_severity: Severity::Warning,
        }
    }
}

// =========================================================================
// View changes
// =========================================================================

/// `view_changes:` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewChangesConfig {
    /// Whether the check runs.
    pub enabled: bool,
    /// How missing screenshots are reported.
    pub severity: Severity,
}

impl Default for ViewChangesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            severity: Severity::Warning,
        }
    }
}

// =========================================================================
// Manifest / lock pairs
// =========================================================================

/// A manifest and the lock file that must change with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestPair {
    /// Manifest path, e.g. `Gemfile`.
    pub manifest: String,
    /// Lock file path, e.g. `Gemfile.lock`.
    pub lock_file: String,
    /// How to regenerate the lock file.
    pub instruction: String,
}

impl ManifestPair {
    /// Create a new pair.
    pub fn new(
        manifest: impl Into<String>,
        lock_file: impl Into<String>,
        instruction: impl Into<String>,
    ) -> Self {
        Self {
            manifest: manifest.into(),
            lock_file: lock_file.into(),
            instruction: instruction.into(),
        }
    }
}

/// `manifest:` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    /// Whether the check runs.
    pub enabled: bool,
    /// Pairs to verify.
    pub pairs: Vec<ManifestPair>,
    /// How a stale lock file is reported.
    pub severity: Severity,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            pairs: vec![
                ManifestPair::new(
                    "Gemfile",
                    "Gemfile.lock",
                    "Please run `bundle install` or `bundle update <updated_gem>`",
                ),
                ManifestPair::new(
                    "Podfile",
                    "Podfile.lock",
                    "Please run `bundle exec pod install`",
                ),
                ManifestPair::new(
                    "Package.swift",
                    "Package.resolved",
                    "Please resolve the Swift packages in Xcode",
                ),
            ],
            severity: Severity::Warning,
        }
    }
}

// =========================================================================
// Added diff lines
// =========================================================================

/// Regex over CocoaPods dependencies pinned to a commit.
pub const PODFILE_COMMIT_REFERENCE: &str = r"\(from `\S+`, commit `\S+`\)";

/// Regex over CocoaPods dependencies pinned to a branch.
pub const PODFILE_BRANCH_REFERENCE: &str = r"\(from `\S+`, branch `\S+`\)";

/// One added-line rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddedLinesRule {
    /// Identifier used in logs.
    pub name: String,
    /// Globs selecting the scanned files (empty scans every file).
    #[serde(default)]
    pub files: Vec<String>,
    /// Globs of files never scanned.
    #[serde(default)]
    pub exclude_files: Vec<String>,
    /// Regex an added line must match to be reported.
    pub pattern: String,
    /// Regex that exempts an otherwise matching line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_pattern: Option<String>,
    /// Text shown above the offending line.
    pub message: String,
    /// How each offending line is reported.
    #[serde(default)]
    pub severity: Severity,
}

impl AddedLinesRule {
    /// Translatable `strings.xml` entries referencing another string.
    pub fn android_string_references() -> Self {
        Self {
            name: "android_string_references".to_string(),
            files: strings(&["**/strings.xml"]),
            exclude_files: Vec::new(),
            pattern: "@string/".to_string(),
            exclude_pattern: Some(r#"translatable="false""#.to_string()),
            message: "This PR adds a translatable entry which references another string resource; \
                      this usually causes issues with translations.\n\
                      Please make sure to set the `translatable=\"false\"` attribute."
                .to_string(),
            severity: Severity::Warning,
        }
    }

    /// Podfile.lock dependencies pinned to a commit.
    pub fn podfile_commit_references() -> Self {
        Self {
            name: "podfile_commit_references".to_string(),
            files: strings(&["**/Podfile.lock"]),
            exclude_files: Vec::new(),
            pattern: PODFILE_COMMIT_REFERENCE.to_string(),
            exclude_pattern: None,
            message: "This PR adds a Podfile reference to a commit hash:".to_string(),
            severity: Severity::Warning,
        }
    }

    /// Podfile.lock dependencies pinned to a branch.
    pub fn podfile_branch_references() -> Self {
        Self {
            name: "podfile_branch_references".to_string(),
            files: strings(&["**/Podfile.lock"]),
            exclude_files: Vec::new(),
            pattern: PODFILE_BRANCH_REFERENCE.to_string(),
            exclude_pattern: None,
            message: "This PR adds a Podfile reference to a branch:".to_string(),
            severity: Severity::Warning,
        }
    }
}

/// `added_lines:` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddedLinesConfig {
    /// Whether the check runs.
    pub enabled: bool,
    /// Rules applied in order.
    pub rules: Vec<AddedLinesRule>,
}

impl Default for AddedLinesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rules: vec![
                AddedLinesRule::android_string_references(),
                AddedLinesRule::podfile_commit_references(),
                AddedLinesRule::podfile_branch_references(),
            ],
        }
    }
}

// =========================================================================
// Podfile.lock
// =========================================================================

/// `podfile:` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PodfileConfig {
    /// Whether the check runs. Off by default: it requires a committed lockfile.
    pub enabled: bool,
    /// Lockfile path relative to the repository root.
    pub lockfile_path: String,
    /// Report dependencies pinned to a commit.
    pub check_commits: bool,
    /// Report dependencies pinned to a branch.
    pub check_branches: bool,
    /// How pinned dependencies are reported.
    pub severity: Severity,
}

impl Default for PodfileConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            lockfile_path: "./Podfile.lock".to_string(),
            check_commits: true,
            check_branches: true,
            severity: Severity::Error,
        }
    }
}

// =========================================================================
// Release branch checks
// =========================================================================

/// Report when matching files change on (or off) a release branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileChangedRule {
    /// Identifier used in logs.
    pub name: String,
    /// Globs selecting the watched files.
    pub files: Vec<String>,
    /// Globs of files never watched.
    #[serde(default)]
    pub exclude_files: Vec<String>,
    /// Text reported when the rule fires.
    pub message: String,
    /// Fire on release branches (`true`) or on every other branch (`false`).
    pub on_release_branch: bool,
    /// How the message is reported.
    #[serde(default)]
    pub severity: Severity,
}

impl FileChangedRule {
    fn new(name: &str, files: &[&str], exclude: &[&str], message: String, on_release_branch: bool) -> Self {
        Self {
            name: name.to_string(),
            files: strings(files),
            exclude_files: strings(exclude),
            message,
            on_release_branch,
            severity: Severity::Warning,
        }
    }

    /// Internal release notes edited during code freeze.
    pub fn internal_release_notes(path: &str) -> Self {
        Self::new(
            "internal_release_notes",
            &[path],
            &[],
            format!(
                "This PR contains changes to `{}`.\n\
                 Note that these changes won't affect the final version of the release notes as this version is in code freeze.\n\
                 Please, get in touch with a release manager if you want to update the final release notes.\n",
                path
            ),
            true,
        )
    }

    /// Core Data models edited on a release branch.
    pub fn core_data_model() -> Self {
        Self::new(
            "core_data_model",
            &["*.xcdatamodeld"],
            &[],
            "Do not edit an existing Core Data model in a release branch unless it hasn't been released to testers yet. \
             Instead create a new model version and merge back to develop soon."
                .to_string(),
            true,
        )
    }

    /// Any `Localizable.strings` edited outside a release branch.
    pub fn localizable_strings() -> Self {
        Self::new(
            "localizable_strings",
            &["**/Localizable.strings"],
            &[],
            "The `Localizable.strings` files should only be updated on release branches, \
             when the translations are downloaded by our automation."
                .to_string(),
            false,
        )
    }

    /// The base `en.lproj/Localizable.strings` edited on a release branch.
    pub fn base_strings() -> Self {
        Self::new(
            "base_strings",
            &["**/en.lproj/Localizable.strings"],
            &[],
            "The `en.lproj/Localizable.strings` file should only be updated before creating a release branch."
                .to_string(),
            true,
        )
    }

    /// Translated `*.lproj/Localizable.strings` edited outside a release branch.
    pub fn translations() -> Self {
        Self::new(
            "translations",
            &["**/Localizable.strings"],
            &["**/en.lproj/Localizable.strings"],
            "Translation files `*.lproj/Localizable.strings` should only be updated on a release branch."
                .to_string(),
            false,
        )
    }

    /// Android `strings.xml` edited outside a release branch.
    pub fn android_strings() -> Self {
        Self::new(
            "android_strings",
            &["**/strings.xml"],
            &[],
            "`strings.xml` files should only be updated on release branches, \
             when the translations are downloaded by our automation."
                .to_string(),
            false,
        )
    }
}

/// Editorialized release notes and the store strings generated from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseNotesPair {
    /// Release notes path.
    pub release_notes_file: String,
    /// Store strings (`.po`) path.
    pub store_strings_file: String,
}

impl ReleaseNotesPair {
    /// Create a new pair.
    pub fn new(release_notes_file: impl Into<String>, store_strings_file: impl Into<String>) -> Self {
        Self {
            release_notes_file: release_notes_file.into(),
            store_strings_file: store_strings_file.into(),
        }
    }
}

/// Default internal release notes file.
pub const DEFAULT_INTERNAL_RELEASE_NOTES: &str = "RELEASE-NOTES.txt";

/// `release:` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseConfig {
    /// Whether the file-changed rules run.
    pub enabled: bool,
    /// File-changed rules applied in order.
    pub rules: Vec<FileChangedRule>,
    /// Whether the release-notes pairs are checked.
    pub release_notes_enabled: bool,
    /// Release notes that must change together with their store strings.
    pub release_notes: Vec<ReleaseNotesPair>,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rules: vec![
                FileChangedRule::internal_release_notes(DEFAULT_INTERNAL_RELEASE_NOTES),
                FileChangedRule::core_data_model(),
                FileChangedRule::base_strings(),
                FileChangedRule::translations(),
                FileChangedRule::android_strings(),
            ],
            release_notes_enabled: true,
            release_notes: vec![
                ReleaseNotesPair::new("Resources/release_notes.txt", "Resources/AppStoreStrings.po"),
                ReleaseNotesPair::new("metadata/release_notes.txt", "metadata/PlayStoreStrings.po"),
            ],
        }
    }
}

// =========================================================================
// Tracks
// =========================================================================

/// `tracks:` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TracksConfig {
    /// Whether the check runs.
    pub enabled: bool,
    /// Analytics files; matched by basename.
    pub tracks_files: Vec<String>,
    /// Regexes over changed diff lines that indicate analytics changes.
    pub usage_patterns: Vec<String>,
    /// Regex the required label must match.
    pub label_pattern: String,
}

impl Default for TracksConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tracks_files: Vec::new(),
            usage_patterns: Vec::new(),
            label_pattern: "Tracks".to_string(),
        }
    }
}
