//! Added diff lines matching a pattern.

use regex::Regex;

use super::matcher::{FileMatcher, compile_regex};
use super::{Check, CheckContext};
use crate::config::{AddedLinesConfig, AddedLinesRule};
use crate::diff::{DiffLineKind, classify};
use crate::error::Result;
use crate::report::{Finding, Severity};

/// A compiled [`AddedLinesRule`].
#[derive(Debug, Clone)]
pub struct LineRule {
    name: String,
    files: FileMatcher,
    pattern: Regex,
    exclude_pattern: Option<Regex>,
    message: String,
    severity: Severity,
}

impl LineRule {
    /// Compile a rule from config.
    pub fn compile(rule: &AddedLinesRule) -> Result<Self> {
        let field = format!("added_lines.{}", rule.name);
        Ok(Self {
            name: rule.name.clone(),
            files: FileMatcher::new(&rule.files, &rule.exclude_files, &field)?,
            pattern: compile_regex(&rule.pattern, &field)?,
            exclude_pattern: rule
                .exclude_pattern
                .as_deref()
                .map(|p| compile_regex(p, &field))
                .transpose()?,
            message: rule.message.clone(),
            severity: rule.severity,
        })
    }

    /// Whether a raw added diff line (marker included) is reported.
    pub fn matches_line(&self, line: &str) -> bool {
        self.pattern.is_match(line)
            && !self
                .exclude_pattern
                .as_ref()
                .is_some_and(|re| re.is_match(line))
    }

    /// Findings for every matching added line of the selected files.
    pub fn findings(&self, ctx: &CheckContext<'_>) -> Vec<Finding> {
        let mut findings = Vec::new();

        for path in ctx.scm.added_and_modified_files() {
            if !self.files.is_match(&path) {
                continue;
            }
            let Some(diff) = ctx.scm.diff_for_file(&path) else {
                continue;
            };

            for line in diff.patch.lines() {
                if classify(line) == DiffLineKind::Added && self.matches_line(line) {
                    tracing::debug!("added_lines.{}: match in {}", self.name, path);
                    findings.push(Finding::new(
                        format_line_message(&self.message, &path, line),
                        self.severity,
                    ));
                }
            }
        }

        findings
    }
}

/// The message shown for one offending line.
pub fn format_line_message(message: &str, path: &str, line: &str) -> String {
    format!("{}\nFile `{}`:\n```diff\n{}\n```\n", message, path, line)
}

/// Applies every configured added-line rule.
#[derive(Debug, Clone)]
pub struct AddedLinesCheck {
    rules: Vec<LineRule>,
}

impl AddedLinesCheck {
    /// Build the check from its config section.
    pub fn from_config(config: &AddedLinesConfig) -> Result<Self> {
        Ok(Self {
            rules: config
                .rules
                .iter()
                .map(LineRule::compile)
                .collect::<Result<_>>()?,
        })
    }
}

impl Check for AddedLinesCheck {
    fn name(&self) -> &'static str {
        "added_lines"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<Vec<Finding>> {
        Ok(self.rules.iter().flat_map(|rule| rule.findings(ctx)).collect())
    }
}
