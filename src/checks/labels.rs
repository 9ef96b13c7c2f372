//! Do-not-merge, required and recommended labels.

use regex::Regex;

use super::matcher::compile_regexes;
use super::{Check, CheckContext};
use crate::config::LabelsConfig;
use crate::error::Result;
use crate::report::{Finding, Severity};

/// A set of label regexes that should each match an applied label.
#[derive(Debug, Clone)]
pub struct ExpectedLabels {
    patterns: Vec<Regex>,
    custom_message: Option<String>,
    severity: Severity,
}

impl ExpectedLabels {
    /// Create an expectation from compiled regexes.
    pub fn new(patterns: Vec<Regex>, custom_message: Option<String>, severity: Severity) -> Self {
        Self {
            patterns,
            custom_message,
            severity,
        }
    }

    /// The finding for `labels`, if any pattern matches none of them.
    pub fn check(&self, labels: &[String]) -> Option<Finding> {
        let missing: Vec<&str> = self
            .patterns
            .iter()
            .filter(|re| !labels.iter().any(|label| re.is_match(label)))
            .map(|re| re.as_str())
            .collect();

        if missing.is_empty() {
            return None;
        }

        let message = self.custom_message.clone().unwrap_or_else(|| {
            format!("PR is missing label(s) matching: {}", markdown_list(&missing))
        });
        Some(Finding::new(message, self.severity))
    }
}

/// Checks the labels applied to the pull request.
#[derive(Debug, Clone)]
pub struct LabelsCheck {
    do_not_merge: Vec<String>,
    required: ExpectedLabels,
    recommended: ExpectedLabels,
}

impl LabelsCheck {
    /// Build the check from its config section.
    pub fn from_config(config: &LabelsConfig) -> Result<Self> {
        Ok(Self {
            do_not_merge: config.do_not_merge.clone(),
            required: ExpectedLabels::new(
                compile_regexes(&config.required, "labels.required")?,
                config.required_message.clone(),
                Severity::Error,
            ),
            recommended: ExpectedLabels::new(
                compile_regexes(&config.recommended, "labels.recommended")?,
                config.recommended_message.clone(),
                Severity::Warning,
            ),
        })
    }
}

impl Check for LabelsCheck {
    fn name(&self) -> &'static str {
        "labels"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<Vec<Finding>> {
        let labels = ctx.pr.labels();
        let mut findings = Vec::new();

        let blocking: Vec<&str> = labels
            .iter()
            .filter(|label| {
                self.do_not_merge
                    .iter()
                    .any(|dnm| label.to_lowercase() == dnm.to_lowercase())
            })
            .map(|label| label.as_str())
            .collect();

        if !blocking.is_empty() {
            findings.push(Finding::error(format!(
                "This PR is tagged with {} label(s).",
                markdown_list(&blocking)
            )));
        }

        findings.extend(self.required.check(labels));
        findings.extend(self.recommended.check(labels));

        Ok(findings)
    }
}

/// `` `a`, `b` ``
pub(crate) fn markdown_list(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("`{}`", item))
        .collect::<Vec<_>>()
        .join(", ")
}
