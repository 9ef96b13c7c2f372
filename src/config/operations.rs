//! Config loading, validation, and utility operations.

use super::model::{CONFIG_FILE_NAME, Config};
use crate::error::{PrCheckError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the config file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(PrCheckError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PrCheckError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load `.prcheck.yaml` from `dir`, or the defaults if there is none.
    pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let path = dir.as_ref().join(CONFIG_FILE_NAME);
        if path.is_file() {
            tracing::debug!("loading config from {}", path.display());
            Self::load(&path)
        } else {
            tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| PrCheckError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            PrCheckError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `missing_tests.bypass_label` must be non-empty
    /// - `pr_size.max_size` and `milestone.days_before_due` must be positive
    /// - label, pattern and path entries must be non-empty
    ///
    /// Regex and glob syntax is checked when the checks are built.
    pub fn validate(&self) -> Result<()> {
        if self.missing_tests.bypass_label.trim().is_empty() {
            return Err(invalid("missing_tests.bypass_label must be non-empty"));
        }

        if self.pr_size.max_size == 0 {
            return Err(invalid("pr_size.max_size must be greater than 0"));
        }

        if self.milestone.days_before_due == 0 {
            return Err(invalid("milestone.days_before_due must be greater than 0"));
        }

        if self.labels.do_not_merge.iter().any(|l| l.is_empty()) {
            return Err(invalid("labels.do_not_merge entries must be non-empty"));
        }

        for rule in &self.added_lines.rules {
            if rule.pattern.is_empty() {
                return Err(PrCheckError::UserError(format!(
                    "config validation failed: added_lines rule '{}' has an empty pattern",
                    rule.name
                )));
            }
        }

        for rule in &self.release.rules {
            if rule.files.is_empty() {
                return Err(PrCheckError::UserError(format!(
                    "config validation failed: release rule '{}' must select at least one file",
                    rule.name
                )));
            }
        }

        if self.podfile.lockfile_path.is_empty() {
            return Err(invalid("podfile.lockfile_path must be non-empty"));
        }

        if self.tracks.label_pattern.is_empty() {
            return Err(invalid("tracks.label_pattern must be non-empty"));
        }

        Ok(())
    }
}

fn invalid(reason: &str) -> PrCheckError {
    PrCheckError::UserError(format!("config validation failed: {}", reason))
}
