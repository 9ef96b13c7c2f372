//! Manifests changed without their lock files.

use super::{Check, CheckContext};
use crate::config::{ManifestConfig, ManifestPair};
use crate::error::Result;
use crate::report::{Finding, Severity};

/// Reports manifests modified while their lock file was left untouched.
#[derive(Debug, Clone)]
pub struct ManifestCheck {
    pairs: Vec<ManifestPair>,
    severity: Severity,
}

impl ManifestCheck {
    /// Build the check from its config section.
    pub fn from_config(config: &ManifestConfig) -> Self {
        Self {
            pairs: config.pairs.clone(),
            severity: config.severity,
        }
    }
}

impl Check for ManifestCheck {
    fn name(&self) -> &'static str {
        "manifest"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<Vec<Finding>> {
        let modified = ctx.scm.modified_files();
        let is_modified = |path: &str| modified.iter().any(|f| f == path);

        Ok(self
            .pairs
            .iter()
            .filter(|pair| is_modified(&pair.manifest) && !is_modified(&pair.lock_file))
            .map(|pair| {
                Finding::new(
                    format!(
                        "{} was changed without updating {}. {}.",
                        pair.manifest, pair.lock_file, pair.instruction
                    ),
                    self.severity,
                )
            })
            .collect())
    }
}
