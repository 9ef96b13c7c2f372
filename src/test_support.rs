//! Shared helpers for tests that need a real git repository.

use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Create a repository on `main` with a single initial commit.
pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init"]);
    // Deterministic default branch name across environments.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);

    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "commit.gpgsign", "false"]);

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);

    temp_dir
}

/// Write `content` to `relative_path` (creating directories) and commit it.
pub(crate) fn commit_file(repo_dir: &Path, relative_path: &str, content: &str) {
    let full_path = repo_dir.join(relative_path);
    if let Some(parent) = full_path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&full_path, content).unwrap();
    git(repo_dir, &["add", "."]);
    git(repo_dir, &["commit", "-m", &format!("Add {}", relative_path)]);
}

/// Remove `relative_path` and commit the deletion.
pub(crate) fn remove_file(repo_dir: &Path, relative_path: &str) {
    git(repo_dir, &["rm", "-q", relative_path]);
    git(repo_dir, &["commit", "-m", &format!("Remove {}", relative_path)]);
}

/// Current `HEAD` commit SHA.
pub(crate) fn head_sha(repo_dir: &Path) -> String {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(["rev-parse", "HEAD"])
        .output()
        .unwrap();
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn git(repo_dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }
}
