//! Line-level classification of unified-diff text.

/// Kind of change a single diff line represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffLineKind {
    /// Line starts with `+` (but is not a `+++ ` file header).
    Added,
    /// Line starts with `-` (but is not a `--- ` file header).
    Removed,
    /// Context lines, hunk headers, `diff --git` lines, file headers.
    Other,
}

/// Classify a single line of unified-diff text by its prefix.
///
/// # Examples
///
/// ```
/// use prcheck::diff::{DiffLineKind, classify};
///
/// assert_eq!(classify("+let x = 1;"), DiffLineKind::Added);
/// assert_eq!(classify("+++ b/src/lib.rs"), DiffLineKind::Other);
/// assert_eq!(classify("-let x = 0;"), DiffLineKind::Removed);
/// assert_eq!(classify(" context"), DiffLineKind::Other);
/// ```
pub fn classify(line: &str) -> DiffLineKind {
    if line.starts_with('+') && !line.starts_with("+++ ") {
        DiffLineKind::Added
    } else if line.starts_with('-') && !line.starts_with("--- ") {
        DiffLineKind::Removed
    } else {
        DiffLineKind::Other
    }
}

/// Text of every added line in `patch`, marker stripped, newline-joined.
pub fn added_lines(patch: &str) -> String {
    select_lines(patch, DiffLineKind::Added)
}

/// Text of every removed line in `patch`, marker stripped, newline-joined.
pub fn removed_lines(patch: &str) -> String {
    select_lines(patch, DiffLineKind::Removed)
}

/// Select lines of one kind from `patch`, strip their one-character marker
/// and join them back together in their original order.
///
/// The result is the reconstructed added (or removed) source, which is what
/// the class-declaration heuristics scan.
pub fn select_lines(patch: &str, kind: DiffLineKind) -> String {
    patch
        .lines()
        .filter(|line| classify(line) == kind)
        .map(|line| &line[1..])
        .collect::<Vec<_>>()
        .join("\n")
}
