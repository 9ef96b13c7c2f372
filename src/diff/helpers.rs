//! Helper functions for diff parsing.

/// Parse the file path from a "diff --git" line.
///
/// Handles various formats:
/// - "a/path/to/file b/path/to/file" (normal)
/// - "a/path/to/file b/path/to/renamed" (rename)
///
/// Returns the "b/" path (new file path), or None if parsing fails.
pub(super) fn parse_diff_git_line(rest: &str) -> Option<String> {
    // Paths can contain spaces, so split on the last " b/" rather than on whitespace
    if let Some(b_pos) = rest.rfind(" b/") {
        let b_path = &rest[b_pos + 3..];
        return Some(normalize_path(b_path));
    }

    let parts: Vec<&str> = rest.split_whitespace().collect();
    if parts.len() >= 2 {
        let b_part = parts[parts.len() - 1];
        if let Some(path) = b_part.strip_prefix("b/") {
            return Some(normalize_path(path));
        }
    }

    None
}

/// Normalize a file path to use forward slashes.
///
/// This ensures consistent path format for glob matching,
/// regardless of the platform where the diff was generated.
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

/// Last path component of a forward-slash path.
pub fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
