//! Tests for diff parsing.

use super::helpers::parse_diff_git_line;
use super::*;

// =========================================================================
// Line classification
// =========================================================================

#[test]
fn test_classify_added_line() {
    assert_eq!(classify("+x"), DiffLineKind::Added);
    assert_eq!(classify("+"), DiffLineKind::Added);
    assert_eq!(classify("++x"), DiffLineKind::Added);
}

#[test]
fn test_classify_removed_line() {
    assert_eq!(classify("-x"), DiffLineKind::Removed);
    assert_eq!(classify("-"), DiffLineKind::Removed);
    assert_eq!(classify("--x"), DiffLineKind::Removed);
}

#[test]
fn test_classify_file_headers_are_other() {
    assert_eq!(classify("+++ x"), DiffLineKind::Other);
    assert_eq!(classify("+++ b/src/lib.rs"), DiffLineKind::Other);
    assert_eq!(classify("--- x"), DiffLineKind::Other);
    assert_eq!(classify("--- /dev/null"), DiffLineKind::Other);
}

#[test]
fn test_classify_context_and_metadata_are_other() {
    assert_eq!(classify(" x"), DiffLineKind::Other);
    assert_eq!(classify("@@ -1,2 +1,3 @@"), DiffLineKind::Other);
    assert_eq!(classify("diff --git a/x b/x"), DiffLineKind::Other);
    assert_eq!(classify(""), DiffLineKind::Other);
    assert_eq!(classify("\\ No newline at end of file"), DiffLineKind::Other);
}

/// "+++x" has no space after the marker, so it is content, not a header.
#[test]
fn test_classify_triple_plus_without_space_is_added() {
    assert_eq!(classify("+++x"), DiffLineKind::Added);
    assert_eq!(classify("---x"), DiffLineKind::Removed);
}

// =========================================================================
// Added / removed line reconstruction
// =========================================================================

const MIXED_PATCH: &str = r#"diff --git a/src/Foo.kt b/src/Foo.kt
index abc1234..def5678 100644
--- a/src/Foo.kt
+++ b/src/Foo.kt
@@ -1,3 +1,4 @@
 package foo
-class Old {
-}
+class Foo(
+    val x: Int
+) {
 }
"#;

#[test]
fn test_added_lines_strips_markers_in_order() {
    assert_eq!(added_lines(MIXED_PATCH), "class Foo(\n    val x: Int\n) {");
}

#[test]
fn test_removed_lines_strips_markers_in_order() {
    assert_eq!(removed_lines(MIXED_PATCH), "class Old {\n}");
}

#[test]
fn test_select_lines_ignores_headers() {
    let patch = "--- a/f\n+++ b/f\n@@ -0,0 +1 @@\n+only";
    assert_eq!(added_lines(patch), "only");
    assert_eq!(removed_lines(patch), "");
}

#[test]
fn test_select_lines_empty_patch() {
    assert_eq!(added_lines(""), "");
    assert_eq!(removed_lines(""), "");
}

#[test]
fn test_select_lines_keeps_empty_added_lines() {
    let patch = "+first\n+\n+third";
    assert_eq!(added_lines(patch), "first\n\nthird");
}

#[test]
fn test_insertions_and_deletions() {
    let diff = FileDiff::new("src/Foo.kt", ChangeType::Modified, MIXED_PATCH);
    assert_eq!(diff.insertions(), 3);
    assert_eq!(diff.deletions(), 2);
}

// =========================================================================
// Changeset splitting
// =========================================================================

#[test]
fn test_parse_changeset_multiple_files() {
    let diff = r#"diff --git a/src/first.rs b/src/first.rs
index abc1234..def5678 100644
--- a/src/first.rs
+++ b/src/first.rs
@@ -1,0 +2,1 @@
+// Added to first.rs
diff --git a/src/second.rs b/src/second.rs
index 111111..222222 100644
--- a/src/second.rs
+++ b/src/second.rs
@@ -5,0 +6,1 @@
+// Added to second.rs
"#;

    let files = parse_changeset(diff);

    assert_eq!(files.len(), 2);
    assert_eq!(files[0].path, "src/first.rs");
    assert_eq!(files[0].change_type, ChangeType::Modified);
    assert!(files[0].patch.starts_with("diff --git a/src/first.rs"));
    assert_eq!(added_lines(&files[0].patch), "// Added to first.rs");
    assert_eq!(files[1].path, "src/second.rs");
    assert_eq!(added_lines(&files[1].patch), "// Added to second.rs");
}

#[test]
fn test_parse_changeset_new_and_deleted_files() {
    let diff = r#"diff --git a/Foo.java b/Foo.java
new file mode 100644
index 0000000..fd48a22
--- /dev/null
+++ b/Foo.java
@@ -0,0 +1 @@
+public class Foo { }
diff --git a/Old.java b/Old.java
deleted file mode 100644
index fd48a22..0000000
--- a/Old.java
+++ /dev/null
@@ -1 +0,0 @@
-public class Old { }
"#;

    let files = parse_changeset(diff);

    assert_eq!(files.len(), 2);
    assert_eq!(files[0].path, "Foo.java");
    assert_eq!(files[0].change_type, ChangeType::New);
    assert_eq!(files[1].path, "Old.java");
    assert_eq!(files[1].change_type, ChangeType::Deleted);
    assert_eq!(removed_lines(&files[1].patch), "public class Old { }");
}

#[test]
fn test_parse_changeset_rename_uses_new_path() {
    let diff = r#"diff --git a/src/OldName.kt b/src/NewName.kt
similarity index 95%
rename from src/OldName.kt
rename to src/NewName.kt
index abc1234..def5678 100644
--- a/src/OldName.kt
+++ b/src/NewName.kt
@@ -10,0 +11,1 @@
+// Added line in renamed file
"#;

    let files = parse_changeset(diff);

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path, "src/NewName.kt");
    assert_eq!(files[0].change_type, ChangeType::Modified);
}

/// A removed line whose content starts with "++ " must not be mistaken for
/// a file header once the hunk has started.
#[test]
fn test_parse_changeset_header_like_content_in_hunk() {
    let diff = "diff --git a/a.txt b/a.txt\n--- a/a.txt\n+++ b/a.txt\n@@ -1 +1 @@\n+++ b/evil.txt";
    let files = parse_changeset(diff);

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path, "a.txt");
}

#[test]
fn test_parse_changeset_ignores_preamble_and_garbage() {
    assert!(parse_changeset("").is_empty());
    assert!(parse_changeset("not a diff at all\n+just text").is_empty());

    let diff = "commit abc\nAuthor: someone\n\ndiff --git a/x.kt b/x.kt\n+class X {}";
    let files = parse_changeset(diff);
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path, "x.kt");
}

#[test]
fn test_parse_changeset_binary_file_has_no_added_lines() {
    let diff = r#"diff --git a/assets/image.png b/assets/image.png
new file mode 100644
index 0000000..abc1234
Binary files /dev/null and b/assets/image.png differ
"#;

    let files = parse_changeset(diff);
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].change_type, ChangeType::New);
    assert_eq!(files[0].insertions(), 0);
}

#[test]
fn test_parse_diff_git_line_with_spaces() {
    assert_eq!(
        parse_diff_git_line("a/src/my file.rs b/src/my file.rs"),
        Some("src/my file.rs".to_string())
    );
    assert_eq!(parse_diff_git_line("garbage"), None);
}

#[test]
fn test_normalize_path() {
    assert_eq!(normalize_path("src/lib.rs"), "src/lib.rs");
    assert_eq!(normalize_path("src\\nested\\file.rs"), "src/nested/file.rs");
}

#[test]
fn test_basename() {
    assert_eq!(basename("app/src/main/res/values/strings.xml"), "strings.xml");
    assert_eq!(basename("Podfile.lock"), "Podfile.lock");
}
