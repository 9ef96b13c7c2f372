//! Diff size and description length.

use super::matcher::FileMatcher;
use super::{Check, CheckContext};
use crate::config::{DiffSizeKind, PrSizeConfig};
use crate::diff::FileDiff;
use crate::error::Result;
use crate::report::{Finding, Severity};

/// Count the lines of `kind` over the selected files.
pub fn diff_size<'a, I>(files: I, matcher: &FileMatcher, kind: DiffSizeKind) -> usize
where
    I: IntoIterator<Item = &'a FileDiff>,
{
    files
        .into_iter()
        .filter(|f| matcher.is_match(&f.path))
        .map(|f| match kind {
            DiffSizeKind::Insertions => f.insertions(),
            DiffSizeKind::Deletions => f.deletions(),
            DiffSizeKind::All => f.insertions() + f.deletions(),
        })
        .sum()
}

/// Reports a pull request whose diff is larger than `max_size` lines.
#[derive(Debug, Clone)]
pub struct PrSizeCheck {
    matcher: FileMatcher,
    kind: DiffSizeKind,
    max_size: usize,
    message: String,
    severity: Severity,
}

impl PrSizeCheck {
    /// Build the check from its config section.
    pub fn from_config(config: &PrSizeConfig) -> Result<Self> {
        Ok(Self {
            matcher: FileMatcher::new(&config.files, &config.exclude_files, "pr_size.files")?,
            kind: config.count,
            max_size: config.max_size,
            message: config.message.clone().unwrap_or_else(|| {
                format!(
                    "This PR is larger than {} lines of changes. \
                     Please consider splitting it into smaller PRs for easier and faster reviews.",
                    config.max_size
                )
            }),
            severity: config.severity,
        })
    }
}

impl Check for PrSizeCheck {
    fn name(&self) -> &'static str {
        "pr_size"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<Vec<Finding>> {
        let size = diff_size(ctx.scm.full_changeset_diff(), &self.matcher, self.kind);
        tracing::debug!("pr_size: {} counted line(s), max {}", size, self.max_size);

        if size > self.max_size {
            Ok(vec![Finding::new(self.message.clone(), self.severity)])
        } else {
            Ok(Vec::new())
        }
    }
}

/// Reports a pull request description of `min_length` characters or fewer.
#[derive(Debug, Clone)]
pub struct PrBodyCheck {
    min_length: usize,
    message: String,
    severity: Severity,
}

impl PrBodyCheck {
    /// Build the check from its config section.
    pub fn from_config(config: &PrSizeConfig) -> Self {
        Self {
            min_length: config.min_body_length,
            message: config.body_message.clone().unwrap_or_else(|| {
                format!(
                    "The PR description appears very short, less than {} characters long. \
                     Please provide a summary of your changes in the PR description.",
                    config.min_body_length
                )
            }),
            severity: config.body_severity,
        }
    }
}

impl Check for PrBodyCheck {
    fn name(&self) -> &'static str {
        "pr_body"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<Vec<Finding>> {
        if ctx.pr.body().chars().count() > self.min_length {
            return Ok(Vec::new());
        }
        Ok(vec![Finding::new(self.message.clone(), self.severity)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::test_utils::{added, changeset, deleted, modified, run_check};
    use crate::host::PrSnapshot;

    fn lines(marker: char, count: usize) -> Vec<String> {
        (0..count).map(|i| format!("{}line {}", marker, i)).collect()
    }

    fn file_with(path: &str, insertions: usize, deletions: usize) -> FileDiff {
        let mut body = lines('+', insertions);
        body.extend(lines('-', deletions));
        let refs: Vec<&str> = body.iter().map(|s| s.as_str()).collect();
        modified(path, &refs)
    }

    #[test]
    fn test_diff_size_kinds() {
        let files = vec![file_with("a.kt", 3, 2), file_with("b.swift", 1, 4)];
        let all = FileMatcher::all();

        assert_eq!(diff_size(&files, &all, DiffSizeKind::Insertions), 4);
        assert_eq!(diff_size(&files, &all, DiffSizeKind::Deletions), 6);
        assert_eq!(diff_size(&files, &all, DiffSizeKind::All), 10);

        let kotlin = FileMatcher::new(&["*.kt".to_string()], &[], "files").unwrap();
        assert_eq!(diff_size(&files, &kotlin, DiffSizeKind::All), 5);
    }

    #[test]
    fn test_large_diff_warns_with_default_message() {
        let scm = changeset(vec![file_with("big.kt", 400, 101)]);
        let check = PrSizeCheck::from_config(&PrSizeConfig::default()).unwrap();

        let findings = run_check(&check, &scm, &PrSnapshot::default());
        assert_eq!(
            findings,
            vec![Finding::warning(
                "This PR is larger than 500 lines of changes. \
                 Please consider splitting it into smaller PRs for easier and faster reviews."
            )]
        );
    }

    #[test]
    fn test_diff_at_limit_is_fine() {
        let scm = changeset(vec![file_with("big.kt", 250, 250)]);
        let check = PrSizeCheck::from_config(&PrSizeConfig::default()).unwrap();

        assert!(run_check(&check, &scm, &PrSnapshot::default()).is_empty());
    }

    #[test]
    fn test_selected_insertions_with_custom_message_and_error() {
        let config = PrSizeConfig {
            max_size: 10,
            count: DiffSizeKind::Insertions,
            files: vec!["**/java/test/**".to_string()],
            message: Some("Too many test changes!".to_string()),
            severity: Severity::Error,
            ..Default::default()
        };
        let check = PrSizeCheck::from_config(&config).unwrap();

        let small = changeset(vec![
            file_with("src/java/test/FooTest.java", 5, 50),
            file_with("src/main/Foo.java", 50, 0),
        ]);
        assert!(run_check(&check, &small, &PrSnapshot::default()).is_empty());

        let large = changeset(vec![
            file_with("src/java/test/FooTest.java", 11, 0),
        ]);
        assert_eq!(
            run_check(&check, &large, &PrSnapshot::default()),
            vec![Finding::error("Too many test changes!")]
        );
    }

    #[test]
    fn test_new_and_deleted_files_count() {
        let scm = changeset(vec![
            added("New.kt", &["+a", "+b"]),
            deleted("Old.kt", &["-c"]),
        ]);
        let config = PrSizeConfig {
            max_size: 2,
            ..Default::default()
        };
        let check = PrSizeCheck::from_config(&config).unwrap();

        assert_eq!(run_check(&check, &scm, &PrSnapshot::default()).len(), 1);
    }

    #[test]
    fn test_short_body() {
        let check = PrBodyCheck::from_config(&PrSizeConfig::default());
        let scm = changeset(Vec::new());

        let short = PrSnapshot {
            body: "Fix bug.".to_string(),
            ..Default::default()
        };
        let findings = run_check(&check, &scm, &short);
        assert_eq!(
            findings,
            vec![Finding::warning(
                "The PR description appears very short, less than 10 characters long. \
                 Please provide a summary of your changes in the PR description."
            )]
        );

        let exactly_ten = PrSnapshot {
            body: "0123456789".to_string(),
            ..Default::default()
        };
        assert_eq!(run_check(&check, &scm, &exactly_ten).len(), 1);

        let long = PrSnapshot {
            body: "Adds the Polygon class and its tests.".to_string(),
            ..Default::default()
        };
        assert!(run_check(&check, &scm, &long).is_empty());
    }

    #[test]
    fn test_body_length_counts_characters() {
        let config = PrSizeConfig {
            min_body_length: 3,
            body_message: Some("Describe it!".to_string()),
            body_severity: Severity::Error,
            ..Default::default()
        };
        let check = PrBodyCheck::from_config(&config);
        let pr = PrSnapshot {
            body: "éééé".to_string(),
            ..Default::default()
        };

        assert!(run_check(&check, &changeset(Vec::new()), &pr).is_empty());
    }
}
