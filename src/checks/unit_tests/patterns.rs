//! Heuristic class-declaration extraction.
//!
//! Declarations are found with regexes over reconstructed source text, not
//! with a parser. Class-like text inside comments or strings is matched too,
//! and declarations the patterns do not anticipate are missed.
//!
//! | Pattern     | Used on       | Shape                                              |
//! |-------------|---------------|----------------------------------------------------|
//! | any-class   | removed text  | `class Name <tail> {`                              |
//! | non-private | added text    | `[public\|internal\|protected\|final\|abstract\|static]* class Name <tail> {` |
//!
//! | File        | Supertype token (last match in the tail) |
//! |-------------|------------------------------------------|
//! | `*.java`    | `extends Name`                           |
//! | other       | `: Name`                                 |

use std::sync::LazyLock;

use regex::Regex;

use super::types::ClassDeclarationMatch;

/// Any `class Name ... {` declaration. The tail may span lines.
static ANY_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(?P<kw>class)\s+(?P<name>[A-Z]\w+)\s*(?P<tail>.*?)\s*\{")
        .expect("valid regex pattern")
});

/// A declaration preceded only by whitespace and non-private modifiers.
static NON_PRIVATE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)(?:\s|public|internal|protected|final|abstract|static)*(?P<kw>class)\s+(?P<name>[A-Z]\w+)\s*(?P<tail>.*?)\s*\{",
    )
    .expect("valid regex pattern")
});

/// Access modifiers that hide a class from the missing-test check.
static PRIVATE_MODIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:private|fileprivate)\b").expect("valid regex pattern"));

static JAVA_SUPERTYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"extends\s+([A-Z]\w+)").expect("valid regex pattern"));

static COLON_SUPERTYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*:\s*([A-Z]\w+)").expect("valid regex pattern"));

/// Which declaration heuristic to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationPattern {
    /// Every `class Name ... {`, regardless of modifiers.
    AnyClass,
    /// Only declarations not marked `private` / `fileprivate`.
    NonPrivate,
}

/// Extract class declarations from reconstructed source text.
///
/// `file_path` selects the supertype heuristic (`extends` for `.java`,
/// `:` otherwise). Text with no declarations yields an empty list.
pub fn extract_declarations(
    text: &str,
    file_path: &str,
    pattern: DeclarationPattern,
) -> Vec<ClassDeclarationMatch> {
    let regex = match pattern {
        DeclarationPattern::AnyClass => &*ANY_CLASS,
        DeclarationPattern::NonPrivate => &*NON_PRIVATE_CLASS,
    };

    let mut matches = Vec::new();
    for caps in regex.captures_iter(text) {
        let (Some(kw), Some(name)) = (caps.name("kw"), caps.name("name")) else {
            continue;
        };

        if pattern == DeclarationPattern::NonPrivate && has_private_modifier(text, kw.start()) {
            continue;
        }

        let tail = caps.name("tail").map_or("", |m| m.as_str());
        matches.push(ClassDeclarationMatch::new(
            name.as_str(),
            supertype_token(tail, file_path),
        ));
    }

    matches
}

/// Whether a private modifier precedes `keyword_start` on its line.
fn has_private_modifier(text: &str, keyword_start: usize) -> bool {
    let line_start = text[..keyword_start].rfind('\n').map_or(0, |i| i + 1);
    PRIVATE_MODIFIER.is_match(&text[line_start..keyword_start])
}

/// Derive the superclass or interface token from a declaration tail.
///
/// The last match wins, so `class A : B(), C {` yields `C`.
pub fn supertype_token(tail: &str, file_path: &str) -> Option<String> {
    let regex = if is_java_file(file_path) {
        &*JAVA_SUPERTYPE
    } else {
        &*COLON_SUPERTYPE
    };

    regex
        .captures_iter(tail)
        .last()
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn is_java_file(file_path: &str) -> bool {
    std::path::Path::new(file_path)
        .extension()
        .is_some_and(|ext| ext == "java")
}
