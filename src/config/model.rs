//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Default config file name, looked up in the repository root.
pub const CONFIG_FILE_NAME: &str = ".prcheck.yaml";

/// Configuration for a prcheck run.
///
/// This struct represents the contents of `.prcheck.yaml`: one section per
/// check family. Unknown fields in the YAML are ignored for forward
/// compatibility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Classes added without unit tests.
    pub missing_tests: MissingTestsConfig,

    /// Do-not-merge, required and recommended labels.
    pub labels: LabelsConfig,

    /// Milestone assignment and due date.
    pub milestone: MilestoneConfig,

    /// Diff size and description length.
    pub pr_size: PrSizeConfig,

    /// View files changed without screenshots.
    pub view_changes: ViewChangesConfig,

    /// Manifests changed without their lock files.
    pub manifest: ManifestConfig,

    /// Added diff lines matching a pattern.
    pub added_lines: AddedLinesConfig,

    /// Pinned dependencies in a committed Podfile.lock.
    pub podfile: PodfileConfig,

    /// Files changed on (or off) a release branch.
    pub release: ReleaseConfig,

    /// Analytics changes that need the `Tracks` label.
    pub tracks: TracksConfig,
}
