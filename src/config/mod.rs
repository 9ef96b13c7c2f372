//! Configuration model for prcheck.
//!
//! This module defines the Config struct that represents `.prcheck.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! defaults for every check family, and validation of config values.
//! Regexes and globs are compiled (and rejected) when checks are built.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::{CONFIG_FILE_NAME, Config};
pub use types::{
    AddedLinesConfig, AddedLinesRule, DiffSizeKind, FileChangedRule, LabelsConfig, ManifestConfig,
    ManifestPair, MilestoneConfig, MissingTestsConfig, PodfileConfig, PrSizeConfig, ReleaseConfig,
    ReleaseNotesPair, TracksConfig, ViewChangesConfig,
};
