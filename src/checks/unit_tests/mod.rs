//! Detection of classes added without unit tests.
//!
//! The pipeline is: changeset, then line classification, then heuristic
//! class-declaration extraction, then filtering by moves, exceptions and
//! test references. See [`find_missing_test_violations`].

mod check;
mod detector;
mod patterns;
mod test_files;
mod types;


// Re-export public API
pub use check::MissingTestsCheck;
pub use detector::{
    ClassExceptions, DEFAULT_CLASS_EXCEPTIONS, DEFAULT_SUBCLASS_EXCEPTIONS,
    find_missing_test_violations,
};
pub use patterns::{DeclarationPattern, extract_declarations, supertype_token};
pub use test_files::{TestFileHeuristic, is_android_test_file, is_ios_test_file};
pub use types::{ClassDeclarationMatch, ClassViolation};
