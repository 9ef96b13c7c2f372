//! Pull-request metadata loaded from a snapshot file.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::PullRequestInfo;
use crate::error::{PrCheckError, Result};

/// A milestone attached to a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    /// Milestone title.
    pub title: String,
    /// Due date, if the milestone has one.
    #[serde(default)]
    pub due_on: Option<DateTime<Utc>>,
    /// Link to the milestone page.
    #[serde(default, alias = "html_url")]
    pub url: Option<String>,
}

/// Pull-request metadata as exported by a host (YAML or JSON).
///
/// ```yaml
/// title: Add shapes
/// body: Adds the Polygon class.
/// labels: [enhancement]
/// base_branch: trunk
/// state: open
/// milestone:
///   title: "24.3"
///   due_on: 2024-03-18T00:00:00Z
///   url: https://example.com/milestone/12
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrSnapshot {
    /// Title.
    pub title: String,
    /// Description text.
    pub body: String,
    /// Applied labels.
    pub labels: Vec<String>,
    /// Branch the pull request targets.
    #[serde(alias = "branch_for_base")]
    pub base_branch: String,
    /// State (`open`, `closed`).
    pub state: String,
    /// Assigned milestone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<Milestone>,
}

impl Default for PrSnapshot {
    fn default() -> Self {
        Self {
            title: String::new(),
            body: String::new(),
            labels: Vec::new(),
            base_branch: "main".to_string(),
            state: "open".to_string(),
            milestone: None,
        }
    }
}

impl PrSnapshot {
    /// Load a snapshot from a YAML or JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PrCheckError::ReadError(format!(
                "failed to read pull request snapshot '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse a snapshot from YAML (JSON is accepted too).
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| {
            PrCheckError::UserError(format!("failed to parse pull request snapshot: {}", e))
        })
    }
}

impl PullRequestInfo for PrSnapshot {
    fn labels(&self) -> &[String] {
        &self.labels
    }

    fn body(&self) -> &str {
        &self.body
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn branch_for_base(&self) -> &str {
        &self.base_branch
    }

    fn state(&self) -> &str {
        &self.state
    }

    fn milestone(&self) -> Option<&Milestone> {
        self.milestone.as_ref()
    }
}
