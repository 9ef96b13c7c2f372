//! Error types for prcheck.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Heuristic non-matches are never errors; only configuration problems,
//! unreadable inputs and git failures surface here.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for prcheck operations.
#[derive(Error, Debug)]
pub enum PrCheckError {
    /// Invalid arguments or configuration (bad YAML, bad regex, bad glob).
    #[error("{0}")]
    UserError(String),

    /// A file a check or the host needs could not be read.
    #[error("Read failed: {0}")]
    ReadError(String),

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// At least one check reported an error-severity finding.
    #[error("Checks failed: {0}")]
    ChecksFailed(String),
}

impl PrCheckError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PrCheckError::UserError(_) => exit_codes::USER_ERROR,
            PrCheckError::ReadError(_) => exit_codes::USER_ERROR,
            PrCheckError::GitError(_) => exit_codes::GIT_FAILURE,
            PrCheckError::ChecksFailed(_) => exit_codes::CHECKS_FAILED,
        }
    }
}

/// Result type alias for prcheck operations.
pub type Result<T> = std::result::Result<T, PrCheckError>;
