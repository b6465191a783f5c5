//! Inline `style={{ ... }}` objects in JSX.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use zone_lint_core::utils::matching_lines;
use zone_lint_core::{Category, ContentPredicate, Severity, Violation};

use super::{is_jsx_file, PluginInfo, PluginKind};
use crate::static_regex;

/// Plug-in identifier.
pub const NAME: &str = "inline-styles";

/// Rule name on reported violations.
pub const RULE: &str = "No inline styles";

pub(super) const INFO: PluginInfo = PluginInfo {
    name: NAME,
    kind: PluginKind::Content,
    rule: RULE,
    description: "JSX style attributes with object literals",
};

static INLINE_STYLE: Lazy<Regex> = Lazy::new(|| static_regex(r"\bstyle\s*=\s*\{\s*\{"));

/// Flags inline style objects in `.tsx`/`.jsx` files.
#[derive(Debug, Clone, Default)]
pub struct InlineStyles;

impl InlineStyles {
    /// Creates the plug-in.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ContentPredicate for InlineStyles {
    fn name(&self) -> &'static str {
        NAME
    }

    fn inspect(&self, content: &str, path: &Path) -> Vec<Violation> {
        if !is_jsx_file(path) {
            return Vec::new();
        }
        matching_lines(content, &INLINE_STYLE, true)
            .into_iter()
            .map(|line| {
                Violation::new(
                    RULE,
                    Category::Style,
                    Severity::Warning,
                    path,
                    "Move inline styles to a stylesheet or styled component",
                )
                .at_line(line)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_inline_style_objects() {
        let code = "<div style={{ color: 'red' }} />\n<div className=\"x\" />\n<div style = { { margin: 0 } } />\n<div style={styles.box} />\n";
        let violations = InlineStyles::new().inspect(code, Path::new("src/Box.tsx"));
        let lines: Vec<_> = violations.iter().map(|v| v.line).collect();
        assert_eq!(lines, [Some(1), Some(3)]);
    }

    #[test]
    fn test_ignores_non_jsx_files() {
        let code = "const el = { style: {} }; render('<div style={{}} />');";
        assert!(InlineStyles::new()
            .inspect(code, Path::new("src/render.ts"))
            .is_empty());
    }
}
