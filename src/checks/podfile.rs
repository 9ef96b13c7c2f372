//! Pinned dependencies in a committed Podfile.lock.

use regex::Regex;

use super::matcher::compile_regex;
use super::{Check, CheckContext};
use crate::config::PodfileConfig;
use crate::config::types::{PODFILE_BRANCH_REFERENCE, PODFILE_COMMIT_REFERENCE};
use crate::error::{PrCheckError, Result};
use crate::report::{Finding, Severity};

/// Top-level Podfile.lock key listing the declared dependencies.
const DEPENDENCIES_KEY: &str = "DEPENDENCIES";

/// `DEPENDENCIES` entries of a Podfile.lock.
///
/// A lockfile without the key has no dependencies. Content that is not
/// YAML is a [`PrCheckError::UserError`] naming `path`.
pub fn lockfile_dependencies(lockfile: &str, path: &str) -> Result<Vec<String>> {
    let data: serde_yaml::Value = serde_yaml::from_str(lockfile).map_err(|e| {
        PrCheckError::UserError(format!(
            "failed to parse lockfile '{}': {}\n\
             Fix: commit a valid Podfile.lock or point podfile.lockfile_path at one.",
            path, e
        ))
    })?;

    let Some(entries) = data.get(DEPENDENCIES_KEY).and_then(|v| v.as_sequence()) else {
        return Ok(Vec::new());
    };

    Ok(entries
        .iter()
        .filter_map(|entry| entry.as_str())
        .map(str::to_string)
        .collect())
}

/// One kind of pinned reference and how it is described.
#[derive(Debug, Clone)]
struct ReferenceRule {
    pattern: Regex,
    description: &'static str,
}

/// Reports Podfile.lock dependencies pinned to a commit or branch.
///
/// The lockfile is read from the repository; a missing lockfile is fatal.
#[derive(Debug, Clone)]
pub struct PodfileLockCheck {
    lockfile_path: String,
    rules: Vec<ReferenceRule>,
    severity: Severity,
}

impl PodfileLockCheck {
    /// Build the check from its config section.
    pub fn from_config(config: &PodfileConfig) -> Result<Self> {
        let mut rules = Vec::new();
        if config.check_commits {
            rules.push(ReferenceRule {
                pattern: compile_regex(PODFILE_COMMIT_REFERENCE, "podfile")?,
                description: "a commit hash",
            });
        }
        if config.check_branches {
            rules.push(ReferenceRule {
                pattern: compile_regex(PODFILE_BRANCH_REFERENCE, "podfile")?,
                description: "a branch",
            });
        }

        Ok(Self {
            lockfile_path: config.lockfile_path.clone(),
            rules,
            severity: config.severity,
        })
    }
}

impl Check for PodfileLockCheck {
    fn name(&self) -> &'static str {
        "podfile"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<Vec<Finding>> {
        let lockfile = ctx.scm.read_file(&self.lockfile_path)?;
        let dependencies = lockfile_dependencies(&lockfile, &self.lockfile_path)?;
        tracing::debug!(
            "podfile: {} dependencies in {}",
            dependencies.len(),
            self.lockfile_path
        );

        let mut findings = Vec::new();
        for rule in &self.rules {
            let matches: Vec<&str> = dependencies
                .iter()
                .filter(|d| rule.pattern.is_match(d))
                .map(|d| d.as_str())
                .collect();

            if !matches.is_empty() {
                findings.push(Finding::new(
                    format!(
                        "Podfile reference(s) to {}:\n```{}```",
                        rule.description,
                        matches.join("\n")
                    ),
                    self.severity,
                ));
            }
        }

        Ok(findings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::test_utils::now;
    use crate::host::{LocalChangeset, PrSnapshot};
    use tempfile::TempDir;

    const LOCKFILE: &str = r#"PODS:
  - Alamofire (5.8.0)
  - Gutenberg (1.100.0)
  - WordPressKit (8.0.0)

DEPENDENCIES:
  - Alamofire (= 5.8.0)
  - Gutenberg (from `https://github.com/wordpress-mobile/gutenberg-mobile.git`, branch `trunk`)
  - WordPressKit (from `https://github.com/wordpress-mobile/WordPressKit-iOS.git`, commit `a1b2c3d`)

COCOAPODS: 1.14.2
"#;

    fn run_in(dir: &TempDir, config: &PodfileConfig) -> Result<Vec<Finding>> {
        let scm = LocalChangeset::new(dir.path(), Vec::new());
        let pr = PrSnapshot::default();
        let ctx = CheckContext::new(&scm, &pr, now());
        PodfileLockCheck::from_config(config)?.run(&ctx)
    }

    #[test]
    fn test_lockfile_dependencies() {
        let deps = lockfile_dependencies(LOCKFILE, "Podfile.lock").unwrap();
        assert_eq!(deps.len(), 3);
        assert_eq!(deps[0], "Alamofire (= 5.8.0)");

        assert!(
            lockfile_dependencies("PODS: []\n", "Podfile.lock")
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_reports_commit_and_branch_references() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("Podfile.lock"), LOCKFILE).unwrap();

        let findings = run_in(&temp_dir, &PodfileConfig::default()).unwrap();

        assert_eq!(
            findings,
            vec![
                Finding::error(
                    "Podfile reference(s) to a commit hash:\n\
                     ```WordPressKit (from `https://github.com/wordpress-mobile/WordPressKit-iOS.git`, commit `a1b2c3d`)```"
                ),
                Finding::error(
                    "Podfile reference(s) to a branch:\n\
                     ```Gutenberg (from `https://github.com/wordpress-mobile/gutenberg-mobile.git`, branch `trunk`)```"
                ),
            ]
        );
    }

    #[test]
    fn test_custom_path_and_severity() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join("ios")).unwrap();
        std::fs::write(temp_dir.path().join("ios/Podfile.lock"), LOCKFILE).unwrap();

        let config = PodfileConfig {
            enabled: true,
            lockfile_path: "ios/Podfile.lock".to_string(),
            check_branches: false,
            severity: Severity::Warning,
            ..Default::default()
        };
        let findings = run_in(&temp_dir, &config).unwrap();

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert!(findings[0].message.contains("commit hash"));
    }

    #[test]
    fn test_clean_lockfile_reports_nothing() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("Podfile.lock"),
            "DEPENDENCIES:\n  - Alamofire (= 5.8.0)\n",
        )
        .unwrap();

        assert!(run_in(&temp_dir, &PodfileConfig::default()).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_lockfile_is_user_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("Podfile.lock"),
            "DEPENDENCIES:\n  - [unclosed\n",
        )
        .unwrap();

        let err = run_in(&temp_dir, &PodfileConfig::default()).unwrap_err();
        assert!(matches!(err, PrCheckError::UserError(_)));
        assert!(err.to_string().contains("'./Podfile.lock'"));
    }

    #[test]
    fn test_missing_lockfile_is_fatal() {
        let temp_dir = TempDir::new().unwrap();

        let err = run_in(&temp_dir, &PodfileConfig::default()).unwrap_err();
        assert!(matches!(err, PrCheckError::ReadError(_)));
    }
}
