//! The host reporting sink and an accumulating implementation.

use serde::{Deserialize, Serialize};

use super::types::{Finding, Severity};

/// Reporting primitives offered by the host review tool.
///
/// Implementors provide the three host primitives; [`ReportSink::report`]
/// is the uniform adapter every check targets.
pub trait ReportSink {
    /// Report a blocking error.
    fn fail(&mut self, message: &str);

    /// Report a non-blocking warning.
    fn warn(&mut self, message: &str);

    /// Post an informational message.
    fn message(&mut self, message: &str);

    /// Dispatch `message` to the primitive matching `severity`.
    ///
    /// An empty message or [`Severity::None`] is a no-op.
    fn report(&mut self, message: &str, severity: Severity) {
        if message.is_empty() {
            return;
        }

        match severity {
            Severity::Error => self.fail(message),
            Severity::Warning => self.warn(message),
            Severity::Message => self.message(message),
            Severity::None => {}
        }
    }

    /// Report a finding produced by a check.
    fn report_finding(&mut self, finding: &Finding) {
        self.report(&finding.message, finding.severity);
    }
}

/// Accumulated results of one review run, in reporting order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    /// Blocking errors.
    pub errors: Vec<String>,
    /// Non-blocking warnings.
    pub warnings: Vec<String>,
    /// Informational messages.
    pub messages: Vec<String>,
}

impl StatusReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the run passes (no errors were reported).
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether nothing at all was reported.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty() && self.messages.is_empty()
    }
}

impl ReportSink for StatusReport {
    fn fail(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    fn message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
