//! Commented-out code.
//!
//! A `//` comment counts as code when its text ends like a statement or
//! starts with a keyword. Each run of consecutive commented code lines is
//! reported once, at its first line. Directives (`eslint-`, `@ts-`,
//! `prettier-`), `TODO`-style notes and `///` references are ignored.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use zone_lint_core::{Category, ContentPredicate, Severity, Violation};

use super::{PluginInfo, PluginKind};
use crate::static_regex;

/// Plug-in identifier.
pub const NAME: &str = "commented-code";

/// Rule name on reported violations.
pub const RULE: &str = "No commented-out code";

pub(super) const INFO: PluginInfo = PluginInfo {
    name: NAME,
    kind: PluginKind::Content,
    rule: RULE,
    description: "Line comments that contain code instead of prose",
};

static CODE_LIKE: Lazy<Regex> = Lazy::new(|| {
    static_regex(
        r"^(?:(?:const|let|var|function|return|import|export|if|for|while|await|class)\b|[\w$.]+\s*\(.*\)\s*;?\s*$|.*[;{}]\s*$|[\w$.]+\s*=[^=])",
    )
});

const PROSE_MARKERS: [&str; 7] = [
    "eslint-", "@ts-", "prettier-", "TODO", "FIXME", "NOTE", "HACK",
];

/// Flags runs of commented-out code.
#[derive(Debug, Clone, Default)]
pub struct CommentedCode;

impl CommentedCode {
    /// Creates the plug-in.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn commented_code(line: &str) -> bool {
    let trimmed = line.trim_start();
    if trimmed.starts_with("///") {
        return false;
    }
    let Some(text) = trimmed.strip_prefix("//") else {
        return false;
    };
    let text = text.trim();
    !text.is_empty()
        && !PROSE_MARKERS.iter().any(|m| text.starts_with(m))
        && CODE_LIKE.is_match(text)
}

impl ContentPredicate for CommentedCode {
    fn name(&self) -> &'static str {
        NAME
    }

    fn inspect(&self, content: &str, path: &Path) -> Vec<Violation> {
        let mut violations = Vec::new();
        let mut in_run = false;
        for (i, line) in content.lines().enumerate() {
            let is_code = commented_code(line);
            if is_code && !in_run {
                violations.push(
                    Violation::new(
                        RULE,
                        Category::Style,
                        Severity::Info,
                        path,
                        "Remove commented-out code; version control keeps history",
                    )
                    .at_line(i + 1),
                );
            }
            in_run = is_code;
        }
        violations
    }
}
