//! Splitting whole-changeset diff output into per-file diffs.

use super::api::{ChangeType, FileDiff};
use super::helpers::{normalize_path, parse_diff_git_line};

/// Split raw `git diff` output into one [`FileDiff`] per file.
///
/// Each section starts at a `diff --git a/... b/...` header and keeps every
/// line up to the next header, headers included, so downstream
/// classification sees exactly what the host would have supplied per file.
///
/// Anything before the first header is ignored. A section whose header
/// cannot be parsed is dropped; unparseable input yields an empty changeset
/// rather than an error.
pub fn parse_changeset(diff_output: &str) -> Vec<FileDiff> {
    let mut files = Vec::new();
    let mut current: Option<Section> = None;

    for line in diff_output.lines() {
        if let Some(rest) = line.strip_prefix("diff --git ") {
            if let Some(section) = current.take() {
                files.extend(section.finish());
            }
            current = Some(Section::new(parse_diff_git_line(rest), line));
            continue;
        }

        let Some(section) = current.as_mut() else {
            continue;
        };
        section.lines.push(line);

        // Only header lines carry metadata; once a hunk starts, "+++ " can
        // not appear as a header again within this section.
        if section.in_hunk {
            continue;
        }

        if line.starts_with("@@") {
            section.in_hunk = true;
        } else if line.starts_with("new file mode") {
            section.change_type = ChangeType::New;
        } else if line.starts_with("deleted file mode") {
            section.change_type = ChangeType::Deleted;
        } else if let Some(rest) = line.strip_prefix("+++ ") {
            if let Some(path) = rest.strip_prefix("b/") {
                section.path = Some(normalize_path(path));
            }
        }
    }

    if let Some(section) = current.take() {
        files.extend(section.finish());
    }

    files
}

struct Section<'a> {
    path: Option<String>,
    change_type: ChangeType,
    lines: Vec<&'a str>,
    in_hunk: bool,
}

impl<'a> Section<'a> {
    fn new(path: Option<String>, header: &'a str) -> Self {
        Self {
            path,
            change_type: ChangeType::Modified,
            lines: vec![header],
            in_hunk: false,
        }
    }

    fn finish(self) -> Option<FileDiff> {
        let path = self.path?;
        Some(FileDiff::new(path, self.change_type, self.lines.join("\n")))
    }
}
