//! Predicates over pull-request branch names, labels and title.

use super::PullRequestInfo;

/// Base branches that count as the main line of development.
pub const MAIN_BRANCHES: &[&str] = &["trunk", "main", "master", "develop"];

/// Marker for work-in-progress pull requests.
const WIP_MARKER: &str = "WIP";

/// Whether the base branch is one of [`MAIN_BRANCHES`].
pub fn is_main_branch(pr: &dyn PullRequestInfo) -> bool {
    MAIN_BRANCHES.contains(&pr.branch_for_base())
}

/// Whether the base branch is a release or hotfix branch.
pub fn is_release_branch(pr: &dyn PullRequestInfo) -> bool {
    let base = pr.branch_for_base();
    base.starts_with("release/") || base.starts_with("hotfix/")
}

/// Whether a label or the title marks the pull request as work in progress.
///
/// Matching is case-sensitive and by substring.
pub fn is_wip(pr: &dyn PullRequestInfo) -> bool {
    pr.labels().iter().any(|label| label.contains(WIP_MARKER)) || pr.title().contains(WIP_MARKER)
}
