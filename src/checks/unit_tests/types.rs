//! Core types for missing-test detection.

use serde::Serialize;

/// A class declaration found by the heuristic extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDeclarationMatch {
    /// Declared class name (starts with an uppercase letter).
    pub name: String,
    /// Superclass or interface token from the declaration tail, if any.
    pub supertype: Option<String>,
}

impl ClassDeclarationMatch {
    /// Create a new declaration match.
    pub fn new(name: impl Into<String>, supertype: Option<String>) -> Self {
        Self {
            name: name.into(),
            supertype,
        }
    }
}

/// A newly added class with no test referencing it.
///
/// Violations are not de-duplicated: the same class declared twice yields
/// two entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassViolation {
    /// Declared class name.
    pub class_name: String,
    /// Path of the file the class was declared in.
    pub file_path: String,
}

impl ClassViolation {
    /// Create a new violation.
    pub fn new(class_name: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            file_path: file_path.into(),
        }
    }
}
