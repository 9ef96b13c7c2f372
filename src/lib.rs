//! prcheck: pull-request review checks over labels, metadata and unified diffs.
//!
//! The library holds the checks and the local host; the `prcheck` binary
//! wires them to the command line.

pub mod checks;
pub mod cli;
pub mod commands;
pub mod config;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod git;
pub mod host;
pub mod report;
pub mod runner;

#[cfg(test)]
mod test_support;
