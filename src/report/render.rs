//! Rendering a status report for the terminal or for machines.

use serde::{Deserialize, Serialize};

use super::sink::StatusReport;
use crate::error::{PrCheckError, Result};

/// Output format for a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable sections.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl StatusReport {
    /// Render the report in the requested format.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.format_text()),
            OutputFormat::Json => self.to_json(),
        }
    }

    /// Format the report as text.
    ///
    /// ```text
    /// Errors
    ///
    ///   x Please add tests for class `Foo` (or add `unit-tests-exemption` label to ignore this).
    ///
    /// Warnings
    ///
    ///   ! PR is not assigned to a milestone.
    /// ```
    ///
    /// An empty report renders as a single "no issues" line.
    pub fn format_text(&self) -> String {
        if self.is_empty() {
            return String::from("No issues found.\n");
        }

        let mut out = String::new();
        push_section(&mut out, "Errors", "x", &self.errors);
        push_section(&mut out, "Warnings", "!", &self.warnings);
        push_section(&mut out, "Messages", "-", &self.messages);
        out
    }

    /// Serialize the report to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PrCheckError::UserError(format!("failed to serialize report: {}", e)))
    }
}

fn push_section(out: &mut String, title: &str, bullet: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }

    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(title);
    out.push_str("\n\n");

    for item in items {
        // Indent continuation lines so multi-line messages stay under their bullet
        let body = item.trim_end().replace('\n', "\n    ");
        out.push_str(&format!("  {} {}\n", bullet, body));
    }
}
