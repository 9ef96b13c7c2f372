//! View files changed without screenshots in the description.

use std::sync::LazyLock;

use regex::Regex;

use super::{Check, CheckContext};
use crate::config::ViewChangesConfig;
use crate::error::Result;
use crate::report::{Finding, Severity};

static IOS_VIEW_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:View|Button)\.(?:swift|m)$|\.xib$|\.storyboard$").expect("valid regex pattern")
});

static ANDROID_VIEW_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:View|Button)\.(?:java|kt|xml)$").expect("valid regex pattern")
});

/// An image URL, a markdown image, or an HTML `<img>` tag.
static IMAGE_IN_BODY: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"https?://\S*\.(?:gif|jpg|jpeg|png|svg)").expect("valid regex pattern"),
        Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("valid regex pattern"),
        Regex::new(r"<img\s+[^>]*src\s*=\s*[^>]*>").expect("valid regex pattern"),
    ]
});

/// Warning text for view changes without screenshots.
pub const MISSING_SCREENSHOTS_MESSAGE: &str = "View files have been modified, but no screenshot is included in the pull request. \
     Consider adding some for clarity.";

/// Whether `path` looks like an iOS or Android view file.
pub fn is_view_file(path: &str) -> bool {
    IOS_VIEW_FILE.is_match(path) || ANDROID_VIEW_FILE.is_match(path)
}

/// Whether `body` contains an image.
pub fn has_screenshot(body: &str) -> bool {
    IMAGE_IN_BODY.iter().any(|re| re.is_match(body))
}

/// Asks for screenshots when view files are modified.
#[derive(Debug, Clone)]
pub struct ViewChangesCheck {
    severity: Severity,
}

impl ViewChangesCheck {
    /// Build the check from its config section.
    pub fn from_config(config: &ViewChangesConfig) -> Self {
        Self {
            severity: config.severity,
        }
    }
}

impl Check for ViewChangesCheck {
    fn name(&self) -> &'static str {
        "view_changes"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<Vec<Finding>> {
        let views_modified = ctx.scm.modified_files().iter().any(|f| is_view_file(f));

        if views_modified && !has_screenshot(ctx.pr.body()) {
            Ok(vec![Finding::new(MISSING_SCREENSHOTS_MESSAGE, self.severity)])
        } else {
            Ok(Vec::new())
        }
    }
}
