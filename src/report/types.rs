//! Severity and finding types shared by every check.

use serde::{Deserialize, Serialize};

/// How a finding is reported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Non-blocking warning (default).
    #[default]
    #[serde(alias = "warn")]
    Warning,
    /// Blocking error; fails the automated check.
    #[serde(alias = "fail", alias = "failure")]
    Error,
    /// Informational message; never fails the check.
    Message,
    /// Suppressed; nothing is reported.
    None,
}

/// One message emitted by a check, together with how to report it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// The text shown to the pull-request author.
    pub message: String,
    /// How the message is reported.
    pub severity: Severity,
}

impl Finding {
    /// Create a new finding.
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    /// Create an error-severity finding.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    /// Create a warning-severity finding.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Warning)
    }

    /// Create an informational finding.
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Message)
    }
}
