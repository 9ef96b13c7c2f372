//! Missing-test detection over a whole changeset.

use std::collections::HashSet;

use globset::GlobSet;
use regex::Regex;

use super::patterns::{DeclarationPattern, extract_declarations};
use super::test_files::TestFileHeuristic;
use super::types::{ClassDeclarationMatch, ClassViolation};
use crate::checks::matcher::{build_globset, compile_regexes};
use crate::diff::{FileDiff, added_lines, removed_lines};
use crate::error::Result;

/// Default class-name exceptions.
pub const DEFAULT_CLASS_EXCEPTIONS: &[&str] = &["ViewHolder$", "Module$", "Button$"];

/// Default supertype exceptions.
pub const DEFAULT_SUBCLASS_EXCEPTIONS: &[&str] = &[
    r"(Fragment|Activity)\b",
    "RecyclerView",
    "^BroadcastReceiver$",
    "^ContentProvider$",
    "Service$",
    "View$",
    "ViewGroup$",
    "Layout$",
];

/// The three caller-supplied filters of the detector.
#[derive(Debug, Clone)]
pub struct ClassExceptions {
    /// Class names that never need tests.
    pub class_names: Vec<Regex>,
    /// Supertype tokens whose subclasses never need tests.
    pub supertypes: Vec<Regex>,
    /// Files skipped entirely.
    pub paths: GlobSet,
}

impl ClassExceptions {
    /// Compile exception rule sets from config strings.
    ///
    /// Returns `PrCheckError::UserError` for an invalid regex or glob.
    pub fn compile(class_names: &[String], supertypes: &[String], paths: &[String]) -> Result<Self> {
        Ok(Self {
            class_names: compile_regexes(class_names, "missing_tests.class_exceptions")?,
            supertypes: compile_regexes(supertypes, "missing_tests.subclass_exceptions")?,
            paths: build_globset(paths, "missing_tests.path_exceptions")?,
        })
    }

    /// Whether `path` matches a path exception.
    pub fn skips_path(&self, path: &str) -> bool {
        self.paths.is_match(path)
    }

    /// Whether a declaration is exempt by class name or supertype.
    pub fn exempts(&self, declaration: &ClassDeclarationMatch) -> bool {
        if self.class_names.iter().any(|re| re.is_match(&declaration.name)) {
            return true;
        }

        declaration
            .supertype
            .as_deref()
            .is_some_and(|supertype| self.supertypes.iter().any(|re| re.is_match(supertype)))
    }
}

/// A candidate violation together with the declaration it came from.
struct Candidate {
    declaration: ClassDeclarationMatch,
    file_path: String,
}

/// Find classes added by `changeset` that no added test references.
///
/// Files are scanned in order:
/// 1. Files matching a path exception are skipped.
/// 2. Added lines of test files are pooled for cross-referencing.
/// 3. Other files contribute non-private declarations from their added
///    lines as candidates, and any declaration from their removed lines
///    to the pool of removed class names.
///
/// A candidate survives when its name was not removed anywhere in the
/// changeset (a move), it is not exempt, and no added test line contains
/// its name as a whole word. Survivors keep scan order.
pub fn find_missing_test_violations(
    changeset: &[FileDiff],
    exceptions: &ClassExceptions,
    heuristic: TestFileHeuristic,
) -> Vec<ClassViolation> {
    let mut candidates: Vec<Candidate> = Vec::new();
    let mut removed_class_names: HashSet<String> = HashSet::new();
    let mut added_test_lines: Vec<String> = Vec::new();

    for file in changeset {
        if exceptions.skips_path(&file.path) {
            tracing::debug!("skipping {} (path exception)", file.path);
            continue;
        }

        if heuristic.is_test_file(&file.path) {
            tracing::debug!("scanning test file {}", file.path);
            added_test_lines.push(added_lines(&file.patch));
            continue;
        }

        tracing::debug!("scanning {}", file.path);
        candidates.extend(
            extract_declarations(
                &added_lines(&file.patch),
                &file.path,
                DeclarationPattern::NonPrivate,
            )
            .into_iter()
            .map(|declaration| Candidate {
                declaration,
                file_path: file.path.clone(),
            }),
        );
        removed_class_names.extend(
            extract_declarations(
                &removed_lines(&file.patch),
                &file.path,
                DeclarationPattern::AnyClass,
            )
            .into_iter()
            .map(|declaration| declaration.name),
        );
    }

    let test_text = added_test_lines.join("\n");

    candidates
        .into_iter()
        .filter(|c| !removed_class_names.contains(&c.declaration.name))
        .filter(|c| !exceptions.exempts(&c.declaration))
        .filter(|c| !is_referenced(&c.declaration.name, &test_text))
        .map(|c| ClassViolation::new(c.declaration.name, c.file_path))
        .collect()
}

/// Whether `name` appears as a whole word in `text`.
fn is_referenced(name: &str, text: &str) -> bool {
    match Regex::new(&format!(r"\b{}\b", regex::escape(name))) {
        Ok(re) => re.is_match(text),
        Err(e) => {
            tracing::warn!("cannot search tests for class {}: {}", name, e);
            false
        }
    }
}
