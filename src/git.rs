//! Git command runner for prcheck.
//!
//! Provides a safe wrapper around git commands with captured stdout/stderr
//! and structured error handling. Only the local host uses git; checks
//! themselves never shell out.

use crate::error::{PrCheckError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    /// Create a new GitOutput from raw output bytes.
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

/// Run a git command with the specified working directory.
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(PrCheckError::GitError)` - On non-zero exit code (mapped to exit code 3)
///
/// # Examples
///
/// ```no_run
/// use prcheck::git::run_git;
/// use std::path::Path;
///
/// let output = run_git(Path::new("."), &["diff", "--name-only", "main..HEAD"])?;
/// println!("Changed: {}", output.stdout);
/// # Ok::<(), prcheck::error::PrCheckError>(())
/// ```
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let output = run_git_raw(cwd, args)?;
    Ok(GitOutput::from_output(&output))
}

/// Like [`run_git`], but hands back the untouched process output.
///
/// Used where trailing whitespace is significant, such as diff text.
fn run_git_raw<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<Output> {
    let cwd = cwd.as_ref();

    tracing::debug!("running git {} in {}", args.join(" "), cwd.display());

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            PrCheckError::GitError(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    if output.status.success() {
        Ok(output)
    } else {
        let git_output = GitOutput::from_output(&output);
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.stdout
        } else {
            git_output.stderr
        };

        Err(PrCheckError::GitError(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            exit_code,
            error_msg
        )))
    }
}

/// Get the repository root directory using `git rev-parse --show-toplevel`.
///
/// # Returns
///
/// * `Ok(PathBuf)` - The absolute path to the repository root
/// * `Err(PrCheckError::UserError)` - If not inside a git repository (exit code 1)
pub fn get_repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    let cwd = cwd.as_ref();

    let output = Command::new("git")
        .current_dir(cwd)
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .map_err(|e| {
            PrCheckError::UserError(format!("failed to execute git: {} (is git installed?)", e))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(PathBuf::from(&git_output.stdout))
    } else {
        // "Not a repository" is a usage problem (exit 1), not a git failure (exit 3)
        Err(PrCheckError::UserError(format!(
            "'{}' is not inside a git repository. Pass --repo pointing at a git checkout.",
            cwd.display()
        )))
    }
}

/// Full unified diff of `HEAD` against `base`.
///
/// Renames are not detected, so a moved file shows up as a deletion plus an
/// addition; the missing-test detector relies on that to recognise moves.
/// The text is returned untrimmed.
pub fn diff_against<P: AsRef<Path>>(cwd: P, base: &str) -> Result<String> {
    let diff_range = format!("{}..HEAD", base);
    let output = run_git_raw(
        cwd,
        &["diff", "--no-color", "--no-ext-diff", "--no-renames", &diff_range],
    )?;
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
