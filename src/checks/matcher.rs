//! Compiling user-supplied regexes and globs into matchers.
//!
//! Every pattern comes from configuration, so compilation errors are
//! [`PrCheckError::UserError`]s naming the offending field.

use globset::{Glob, GlobSet, GlobSetBuilder};
use regex::Regex;

use crate::diff::normalize_path;
use crate::error::{PrCheckError, Result};

/// Compile one regex from a config field.
pub fn compile_regex(pattern: &str, field_name: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| {
        PrCheckError::UserError(format!(
            "invalid regex pattern in {}: '{}' - {}\n\
             Fix: edit the config file and correct or remove this pattern.",
            field_name, pattern, e
        ))
    })
}

/// Compile every regex of a config field, preserving order.
pub fn compile_regexes(patterns: &[String], field_name: &str) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| compile_regex(p, field_name))
        .collect()
}

/// Build a [`GlobSet`] from a list of glob patterns.
///
/// Globs use the default `globset` syntax, where `*` also matches `/`.
pub fn build_globset(patterns: &[String], field_name: &str) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
        let normalized_pattern = normalize_path(pattern);
        let glob = Glob::new(&normalized_pattern).map_err(|e| {
            PrCheckError::UserError(format!(
                "invalid glob pattern in {}: '{}' - {}",
                field_name, pattern, e
            ))
        })?;
        builder.add(glob);
    }

    builder.build().map_err(|e| {
        PrCheckError::UserError(format!("failed to compile {} globs: {}", field_name, e))
    })
}

/// Selects files by include and exclude globs.
///
/// An empty include list selects every file.
#[derive(Debug, Clone)]
pub struct FileMatcher {
    include: GlobSet,
    exclude: GlobSet,
    match_all: bool,
}

impl FileMatcher {
    /// Compile a matcher from config globs.
    pub fn new(include: &[String], exclude: &[String], field_name: &str) -> Result<Self> {
        Ok(Self {
            include: build_globset(include, field_name)?,
            exclude: build_globset(exclude, &format!("{} exclusions", field_name))?,
            match_all: include.is_empty(),
        })
    }

    /// A matcher that selects every file.
    pub fn all() -> Self {
        Self {
            include: GlobSet::empty(),
            exclude: GlobSet::empty(),
            match_all: true,
        }
    }

    /// Whether `path` is selected.
    pub fn is_match(&self, path: &str) -> bool {
        let path = normalize_path(path);
        if self.exclude.is_match(&path) {
            return false;
        }
        self.match_all || self.include.is_match(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_star_crosses_directories() {
        let set = build_globset(&strings(&["src/*.kt"]), "paths").unwrap();
        assert!(set.is_match("src/main/java/Foo.kt"));
        assert!(!set.is_match("lib/Foo.kt"));
    }

    #[test]
    fn test_invalid_glob_is_user_error() {
        let err = build_globset(&strings(&["src/[unclosed"]), "path_exceptions").unwrap_err();
        assert!(matches!(err, PrCheckError::UserError(_)));
        assert!(err.to_string().contains("path_exceptions"));
    }

    #[test]
    fn test_invalid_regex_is_user_error() {
        let err = compile_regexes(&strings(&["ok", "(unclosed"]), "class_exceptions").unwrap_err();
        assert!(matches!(err, PrCheckError::UserError(_)));
        assert!(err.to_string().contains("(unclosed"));
    }

    #[test]
    fn test_file_matcher_include_and_exclude() {
        let matcher = FileMatcher::new(
            &strings(&["**/Localizable.strings"]),
            &strings(&["**/en.lproj/Localizable.strings"]),
            "files",
        )
        .unwrap();

        assert!(matcher.is_match("Resources/fr.lproj/Localizable.strings"));
        assert!(matcher.is_match("Localizable.strings"));
        assert!(!matcher.is_match("Resources/en.lproj/Localizable.strings"));
        assert!(!matcher.is_match("Resources/fr.lproj/InfoPlist.strings"));
    }

    #[test]
    fn test_empty_include_selects_everything() {
        let matcher = FileMatcher::new(&[], &strings(&["*.lock"]), "files").unwrap();
        assert!(matcher.is_match("src/Foo.kt"));
        assert!(!matcher.is_match("Podfile.lock"));
        assert!(FileMatcher::all().is_match("anything"));
    }
}
