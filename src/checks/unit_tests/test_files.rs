//! Path heuristics recognising unit-test files.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::diff::basename;

static ANDROID_TEST_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/(?:test|androidTest).*\.(?:java|kt)$").expect("valid regex pattern")
});

static IOS_TEST_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+Tests?\.(?:swift|m)$").expect("valid regex pattern"));

/// Which platforms' test-file conventions are recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TestFileHeuristic {
    /// JVM sources under a `test` or `androidTest` directory.
    Android,
    /// Swift / Objective-C files named `*Test` or `*Tests`.
    Ios,
    /// Either of the above (default).
    #[default]
    Combined,
}

impl TestFileHeuristic {
    /// Whether `path` is a test file under this heuristic.
    pub fn is_test_file(self, path: &str) -> bool {
        match self {
            Self::Android => is_android_test_file(path),
            Self::Ios => is_ios_test_file(path),
            Self::Combined => is_android_test_file(path) || is_ios_test_file(path),
        }
    }
}

/// `.../test/...*.java|kt` or `.../androidTest/...*.java|kt`.
pub fn is_android_test_file(path: &str) -> bool {
    ANDROID_TEST_FILE.is_match(path)
}

/// Basename like `FooTest.swift`, `FooTests.m`.
pub fn is_ios_test_file(path: &str) -> bool {
    IOS_TEST_FILE.is_match(basename(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_android_test_files() {
        assert!(is_android_test_file("app/src/test/java/org/FooTest.kt"));
        assert!(is_android_test_file(
            "app/src/androidTest/java/org/FooInstrumentedTest.java"
        ));
        assert!(!is_android_test_file("app/src/main/java/org/Foo.kt"));
        assert!(!is_android_test_file("app/src/test/resources/fixture.json"));
    }

    #[test]
    fn test_ios_test_files() {
        assert!(is_ios_test_file("WordPressTest/PostTests.swift"));
        assert!(is_ios_test_file("Tests/ReaderTest.m"));
        assert!(!is_ios_test_file("Classes/Post.swift"));
        assert!(!is_ios_test_file("Classes/Tests.swift"));
    }

    #[test]
    fn test_heuristic_modes() {
        let kotlin = "app/src/test/java/FooTest.kt";
        let swift = "Tests/FooTests.swift";

        assert!(TestFileHeuristic::Android.is_test_file(kotlin));
        assert!(!TestFileHeuristic::Android.is_test_file(swift));
        assert!(TestFileHeuristic::Ios.is_test_file(swift));
        assert!(!TestFileHeuristic::Ios.is_test_file(kotlin));
        assert!(TestFileHeuristic::Combined.is_test_file(kotlin));
        assert!(TestFileHeuristic::Combined.is_test_file(swift));
    }
}
