//! Hardcoded URLs and credentials.
//!
//! Test files and files whose name mentions `config`, `constants` or `env`
//! are exempt; localhost URLs are allowed.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use zone_lint_core::utils::CommentTracker;
use zone_lint_core::{Category, ContentPredicate, Severity, Violation};

use super::{is_test_file, PluginInfo, PluginKind};
use crate::static_regex;

/// Plug-in identifier.
pub const NAME: &str = "hardcoded-data";

/// Rule name on reported violations.
pub const RULE: &str = "No hardcoded data";

pub(super) const INFO: PluginInfo = PluginInfo {
    name: NAME,
    kind: PluginKind::Content,
    rule: RULE,
    description: "URLs and secret-like literals embedded in source",
};

static URL_LITERAL: Lazy<Regex> =
    Lazy::new(|| static_regex(r#"["'`](https?://[^"'`\s]+)"#));

static SECRET_ASSIGNMENT: Lazy<Regex> = Lazy::new(|| {
    static_regex(
        r#"(?i)\b[\w$]*(?:api[_-]?key|secret|token|password|passwd)[\w$]*\s*[:=]\s*["'`][^"'`\s]{8,}["'`]"#,
    )
});

/// Flags hardcoded URLs and secret-like string assignments.
#[derive(Debug, Clone, Default)]
pub struct HardcodedData;

impl HardcodedData {
    /// Creates the plug-in.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn is_exempt(path: &Path) -> bool {
    if is_test_file(path) {
        return true;
    }
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    name.split(['.', '-', '_'])
        .any(|word| matches!(word, "config" | "constants" | "env" | "environment"))
}

fn is_local_url(url: &str) -> bool {
    let host = url
        .split("://")
        .nth(1)
        .unwrap_or_default()
        .split(['/', ':', '?'])
        .next()
        .unwrap_or_default();
    matches!(host, "localhost" | "127.0.0.1" | "0.0.0.0")
}

impl ContentPredicate for HardcodedData {
    fn name(&self) -> &'static str {
        NAME
    }

    fn inspect(&self, content: &str, path: &Path) -> Vec<Violation> {
        if is_exempt(path) {
            return Vec::new();
        }

        let mut tracker = CommentTracker::new();
        let mut violations = Vec::new();
        for (i, line) in content.lines().enumerate() {
            let code = tracker.strip(line);
            let line_no = i + 1;

            let message = if SECRET_ASSIGNMENT.is_match(&code) {
                Some("Hardcoded credential; load it from the environment".to_string())
            } else {
                URL_LITERAL
                    .captures_iter(&code)
                    .filter_map(|caps| caps.get(1))
                    .find(|url| !is_local_url(url.as_str()))
                    .map(|url| format!("Hardcoded URL '{}'; move it to configuration", url.as_str()))
            };

            if let Some(message) = message {
                violations.push(
                    Violation::new(RULE, Category::Content, Severity::Warning, path, message)
                        .at_line(line_no),
                );
            }
        }
        violations
    }
}
