//! Styling conventions in script files: hardcoded colors and `!important`.
//!
//! Theme, token and palette files define the colors and are exempt.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use zone_lint_core::utils::CommentTracker;
use zone_lint_core::{Category, ContentPredicate, Severity, Violation};

use super::{is_test_file, PluginInfo, PluginKind};
use crate::static_regex;

/// Plug-in identifier.
pub const NAME: &str = "style-conventions";

/// Rule name on reported violations.
pub const RULE: &str = "Style conventions";

pub(super) const INFO: PluginInfo = PluginInfo {
    name: NAME,
    kind: PluginKind::Content,
    rule: RULE,
    description: "Hardcoded hex/rgb colors and !important in script files",
};

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| static_regex(r#"["'`]#(?:[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})["'`;\s]"#));

static RGB_COLOR: Lazy<Regex> = Lazy::new(|| static_regex(r#"["'`]rgba?\(\s*\d"#));

static IMPORTANT: Lazy<Regex> = Lazy::new(|| static_regex(r"!important\b"));

/// Flags colors that bypass the theme and `!important` overrides.
#[derive(Debug, Clone, Default)]
pub struct StyleConventions;

impl StyleConventions {
    /// Creates the plug-in.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn is_theme_file(path: &Path) -> bool {
    let lowered = path.to_string_lossy().to_ascii_lowercase();
    ["theme", "tokens", "palette", "colors"]
        .iter()
        .any(|marker| lowered.contains(marker))
}

impl ContentPredicate for StyleConventions {
    fn name(&self) -> &'static str {
        NAME
    }

    fn inspect(&self, content: &str, path: &Path) -> Vec<Violation> {
        if is_theme_file(path) || is_test_file(path) {
            return Vec::new();
        }

        let mut tracker = CommentTracker::new();
        let mut violations = Vec::new();
        for (i, line) in content.lines().enumerate() {
            let code = tracker.strip(line);
            let message = if HEX_COLOR.is_match(&code) || RGB_COLOR.is_match(&code) {
                "Use theme colors instead of hardcoded color values"
            } else if IMPORTANT.is_match(&code) {
                "Avoid !important; increase selector specificity instead"
            } else {
                continue;
            };
            violations.push(
                Violation::new(RULE, Category::Style, Severity::Info, path, message).at_line(i + 1),
            );
        }
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(path: &str, code: &str) -> Vec<usize> {
        StyleConventions::new()
            .inspect(code, Path::new(path))
            .iter()
            .filter_map(|v| v.line)
            .collect()
    }

    #[test]
    fn test_detects_colors_and_important() {
        let code = r#"const a = { color: '#fff' };
const b = { color: theme.primary };
const c = `color: #ff0000;`;
const d = { background: "rgba(0, 0, 0, 0.5)" };
const e = "margin: 0 !important";
const f = '#section-id';
"#;
        assert_eq!(lines("src/Card.tsx", code), [1, 4, 5]);
    }

    #[test]
    fn test_theme_files_are_exempt() {
        assert!(lines("src/theme/colors.ts", "export const primary = '#0055ff';").is_empty());
    }
}
