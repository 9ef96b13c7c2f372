//! The caller-facing missing-tests check.

use super::detector::{ClassExceptions, find_missing_test_violations};
use super::test_files::TestFileHeuristic;
use super::types::ClassViolation;
use crate::checks::{Check, CheckContext};
use crate::config::MissingTestsConfig;
use crate::error::Result;
use crate::report::Finding;

/// Reports newly added classes without unit tests.
///
/// Violations are errors unless the bypass label is applied, in which case
/// they are downgraded to warnings.
#[derive(Debug, Clone)]
pub struct MissingTestsCheck {
    exceptions: ClassExceptions,
    heuristic: TestFileHeuristic,
    bypass_label: String,
}

impl MissingTestsCheck {
    /// Build the check from its config section.
    pub fn from_config(config: &MissingTestsConfig) -> Result<Self> {
        Ok(Self {
            exceptions: ClassExceptions::compile(
                &config.class_exceptions,
                &config.subclass_exceptions,
                &config.path_exceptions,
            )?,
            heuristic: config.test_files,
            bypass_label: config.bypass_label.clone(),
        })
    }

    /// Run only the detector, without turning violations into findings.
    pub fn violations(&self, ctx: &CheckContext<'_>) -> Vec<ClassViolation> {
        find_missing_test_violations(
            ctx.scm.full_changeset_diff(),
            &self.exceptions,
            self.heuristic,
        )
    }

    /// Label that downgrades violations to warnings.
    pub fn bypass_label(&self) -> &str {
        &self.bypass_label
    }
}

impl Check for MissingTestsCheck {
    fn name(&self) -> &'static str {
        "missing_tests"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<Vec<Finding>> {
        let violations = self.violations(ctx);
        let bypassed = ctx.pr.has_label(&self.bypass_label);

        tracing::debug!(
            "missing_tests: {} violation(s), bypass label {}",
            violations.len(),
            if bypassed { "present" } else { "absent" }
        );

        Ok(violations
            .iter()
            .map(|v| {
                if bypassed {
                    Finding::warning(format!(
                        "Class `{}` is missing tests, but `{}` label was set to ignore this.",
                        v.class_name, self.bypass_label
                    ))
                } else {
                    Finding::error(format!(
                        "Please add tests for class `{}` (or add `{}` label to ignore this).",
                        v.class_name, self.bypass_label
                    ))
                }
            })
            .collect())
    }
}
