//! Exit code constants for the prcheck CLI.
//!
//! - 0: Success (no error-severity findings)
//! - 1: User error (bad args, invalid config, missing input file)
//! - 2: Checks failed (at least one error was reported)
//! - 3: Git operation failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid configuration or a missing input file.
pub const USER_ERROR: i32 = 1;

/// At least one check reported an error-severity finding.
pub const CHECKS_FAILED: i32 = 2;

/// Git operation failure while collecting the changeset.
pub const GIT_FAILURE: i32 = 3;
