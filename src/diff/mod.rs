//! Diff parsing primitives for prcheck.
//!
//! This module provides utilities for working with unified-diff text:
//! - Classifying single diff lines as added, removed or other
//! - Reconstructing the added (or removed) source of a patch
//! - Splitting whole `git diff` output into per-file diffs
//!
//! Diffs are always supplied by the host; nothing here computes one.

mod api;
mod classify;
mod helpers;
mod parser;

#[cfg(test)]
mod tests;

// Re-export public API
pub use api::{ChangeType, FileDiff};
pub use classify::{DiffLineKind, added_lines, classify, removed_lines, select_lines};
pub use helpers::{basename, normalize_path};
pub use parser::parse_changeset;
